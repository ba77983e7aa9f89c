//! Spawner that schedules producer runs on the Yew scheduler.

use futures::future::LocalFutureObj;
use futures::task::{LocalSpawn, SpawnError};

/// [`LocalSpawn`] implementation over `yew::platform::spawn_local`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct YewSpawner;

impl LocalSpawn for YewSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        yew::platform::spawn_local(future);
        Ok(())
    }
}
