//! `use_async`: run a producer once per mount (or on demand).

use crate::core::task::{AsyncConfig, AsyncTask};
use crate::services::spawn::YewSpawner;
use std::rc::Rc;
use yew::prelude::*;

/// Attach `config` to the calling component.
///
/// The configuration is captured on the first render and kept for the life of
/// the component. Outcomes are only delivered while the component is mounted.
/// Returns the manual trigger, or a no-op callback in automatic mode.
#[hook]
pub fn use_async<T, E>(config: AsyncConfig<T, E>) -> Callback<()>
where
    T: 'static,
    E: 'static,
{
    let attachment = use_memo(
        move |_| {
            let task = AsyncTask::new(config, YewSpawner);
            let trigger = task.trigger();
            (task, trigger)
        },
        (),
    );
    {
        let attachment = Rc::clone(&attachment);
        use_effect_with_deps(
            move |_| {
                attachment.0.mount();
                move || attachment.0.unmount()
            },
            (),
        );
    }
    attachment.1.clone()
}
