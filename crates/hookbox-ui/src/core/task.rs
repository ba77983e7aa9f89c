//! Async orchestrator: runs a producer and routes its outcome to callbacks.
//!
//! # Design
//! - Each attachment owns one [`Liveness`] flag; outcomes arriving after
//!   teardown are discarded.
//! - Runs are scheduled through [`LocalSpawn`] so the browser scheduler and
//!   test executors are interchangeable.
//! - Overlapping runs are allowed; each delivers its own outcome.

use crate::core::liveness::Liveness;
use futures::future::LocalBoxFuture;
use futures::task::{LocalSpawn, LocalSpawnExt};
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use tracing::{debug, trace, warn};
use yew::Callback;

type Producer<T, E> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<T, E>>>;

/// Caller-supplied configuration for one attachment.
pub struct AsyncConfig<T, E> {
    producer: Producer<T, E>,
    on_success: Option<Callback<T>>,
    on_reject: Option<Callback<E>>,
    manual: bool,
}

impl<T: 'static, E: 'static> AsyncConfig<T, E> {
    /// Configure an automatic run of `producer` with no callbacks.
    #[must_use]
    pub fn new<F, Fut>(producer: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
    {
        Self {
            producer: Rc::new(move || -> LocalBoxFuture<'static, Result<T, E>> {
                Box::pin(producer())
            }),
            on_success: None,
            on_reject: None,
            manual: false,
        }
    }

    /// Callback receiving the resolved value.
    #[must_use]
    pub fn on_success(mut self, callback: impl Into<Callback<T>>) -> Self {
        self.on_success = Some(callback.into());
        self
    }

    /// Callback receiving the rejection reason.
    #[must_use]
    pub fn on_reject(mut self, callback: impl Into<Callback<E>>) -> Self {
        self.on_reject = Some(callback.into());
        self
    }

    /// Suppress the automatic run on mount.
    #[must_use]
    pub const fn manual(mut self, manual: bool) -> Self {
        self.manual = manual;
        self
    }
}

impl<T, E> AsyncConfig<T, E> {
    /// Whether runs only happen through the trigger.
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        self.manual
    }
}

impl<T, E> fmt::Debug for AsyncConfig<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncConfig")
            .field("on_success", &self.on_success.is_some())
            .field("on_reject", &self.on_reject.is_some())
            .field("manual", &self.manual)
            .finish_non_exhaustive()
    }
}

/// One attachment of an [`AsyncConfig`] to a view.
pub struct AsyncTask<T, E, S> {
    config: Rc<AsyncConfig<T, E>>,
    liveness: Liveness,
    spawner: S,
}

impl<T, E, S: Clone> Clone for AsyncTask<T, E, S> {
    fn clone(&self) -> Self {
        Self {
            config: Rc::clone(&self.config),
            liveness: self.liveness.clone(),
            spawner: self.spawner.clone(),
        }
    }
}

impl<T, E, S> fmt::Debug for AsyncTask<T, E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncTask")
            .field("config", &self.config)
            .field("live", &self.liveness.is_live())
            .finish_non_exhaustive()
    }
}

impl<T, E, S> AsyncTask<T, E, S>
where
    T: 'static,
    E: 'static,
    S: LocalSpawn + Clone + 'static,
{
    /// Attach `config` with a fresh, inactive liveness flag.
    #[must_use]
    pub fn new(config: AsyncConfig<T, E>, spawner: S) -> Self {
        Self::with_liveness(config, Liveness::new(), spawner)
    }

    /// Attach `config` guarded by an externally owned flag.
    #[must_use]
    pub fn with_liveness(config: AsyncConfig<T, E>, liveness: Liveness, spawner: S) -> Self {
        Self {
            config: Rc::new(config),
            liveness,
            spawner,
        }
    }

    /// Flag consulted before every callback.
    #[must_use]
    pub const fn liveness(&self) -> &Liveness {
        &self.liveness
    }

    /// Activate the attachment and run once unless configured as manual.
    pub fn mount(&self) {
        self.liveness.activate();
        if !self.config.manual {
            self.execute();
        }
    }

    /// Deactivate the attachment; pending outcomes are dropped.
    pub fn unmount(&self) {
        self.liveness.deactivate();
    }

    /// Invoke the producer now and deliver its outcome when it settles.
    pub fn execute(&self) {
        let pending = (self.config.producer)();
        let config = Rc::clone(&self.config);
        let liveness = self.liveness.clone();
        let run = async move {
            let outcome = pending.await;
            if !liveness.is_live() {
                trace!("view torn down; discarding async outcome");
                return;
            }
            match outcome {
                Ok(value) => {
                    if let Some(callback) = &config.on_success {
                        callback.emit(value);
                    }
                }
                Err(reason) => match &config.on_reject {
                    Some(callback) => callback.emit(reason),
                    None => debug!("async producer rejected without a reject callback"),
                },
            }
        };
        if let Err(err) = self.spawner.spawn_local(run) {
            warn!(error = %err, "failed to schedule async producer");
        }
    }

    /// Callable handed back to the view: [`Self::execute`] in manual mode,
    /// a no-op otherwise.
    #[must_use]
    pub fn trigger(&self) -> Callback<()> {
        if self.config.manual {
            let task = self.clone();
            Callback::from(move |()| task.execute())
        } else {
            Callback::noop()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::{LocalPool, LocalSpawner};
    use std::cell::{Cell, RefCell};

    struct Recorder<T, E> {
        calls: Rc<Cell<u32>>,
        successes: Rc<RefCell<Vec<T>>>,
        rejects: Rc<RefCell<Vec<E>>>,
    }

    impl<T: 'static, E: 'static> Recorder<T, E> {
        fn new() -> Self {
            Self {
                calls: Rc::new(Cell::new(0)),
                successes: Rc::new(RefCell::new(Vec::new())),
                rejects: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn wire(&self, config: AsyncConfig<T, E>) -> AsyncConfig<T, E> {
            let successes = Rc::clone(&self.successes);
            let rejects = Rc::clone(&self.rejects);
            config
                .on_success(move |value: T| successes.borrow_mut().push(value))
                .on_reject(move |reason: E| rejects.borrow_mut().push(reason))
        }

        fn counting<F, Fut>(&self, producer: F) -> AsyncConfig<T, E>
        where
            F: Fn() -> Fut + 'static,
            Fut: Future<Output = Result<T, E>> + 'static,
        {
            let calls = Rc::clone(&self.calls);
            self.wire(AsyncConfig::new(move || {
                calls.set(calls.get() + 1);
                producer()
            }))
        }
    }

    fn attach<T: 'static, E: 'static>(
        config: AsyncConfig<T, E>,
    ) -> (AsyncTask<T, E, LocalSpawner>, LocalPool) {
        let pool = LocalPool::new();
        let task = AsyncTask::new(config, pool.spawner());
        (task, pool)
    }

    #[test]
    fn automatic_mode_runs_once_on_mount_and_delivers_success() {
        let recorder = Recorder::<&'static str, i32>::new();
        let (task, mut pool) = attach(recorder.counting(|| async { Ok("Success") }));

        assert_eq!(recorder.calls.get(), 0);
        task.mount();
        assert_eq!(recorder.calls.get(), 1);
        pool.run_until_stalled();

        assert_eq!(*recorder.successes.borrow(), vec!["Success"]);
        assert!(recorder.rejects.borrow().is_empty());
    }

    #[test]
    fn automatic_mode_routes_rejection() {
        let recorder = Recorder::<&'static str, i32>::new();
        let (task, mut pool) = attach(recorder.counting(|| async { Err(0) }));

        task.mount();
        pool.run_until_stalled();

        assert_eq!(*recorder.rejects.borrow(), vec![0]);
        assert!(recorder.successes.borrow().is_empty());
    }

    #[test]
    fn automatic_trigger_is_a_noop() {
        let recorder = Recorder::<u8, ()>::new();
        let (task, mut pool) = attach(recorder.counting(|| async { Ok(1) }));

        task.mount();
        task.trigger().emit(());
        pool.run_until_stalled();

        assert_eq!(recorder.calls.get(), 1);
        assert_eq!(*recorder.successes.borrow(), vec![1]);
    }

    #[test]
    fn manual_mode_only_runs_on_trigger() {
        let recorder = Recorder::<u8, ()>::new();
        let (task, mut pool) = attach(recorder.counting(|| async { Ok(7) }).manual(true));

        task.mount();
        pool.run_until_stalled();
        assert_eq!(recorder.calls.get(), 0);

        let trigger = task.trigger();
        trigger.emit(());
        trigger.emit(());
        trigger.emit(());
        assert_eq!(recorder.calls.get(), 3);
        pool.run_until_stalled();
        assert_eq!(*recorder.successes.borrow(), vec![7, 7, 7]);
    }

    #[test]
    fn teardown_suppresses_late_outcomes() {
        let recorder = Recorder::<String, String>::new();
        let (tx, rx) = oneshot::channel::<Result<String, String>>();
        let rx = Rc::new(RefCell::new(Some(rx)));
        let config = recorder.counting(move || {
            let rx = rx.borrow_mut().take();
            async move {
                match rx {
                    Some(rx) => rx.await.unwrap_or_else(|_| Err("dropped".into())),
                    None => Err("already taken".into()),
                }
            }
        });
        let (task, mut pool) = attach(config);

        task.mount();
        pool.run_until_stalled();
        task.unmount();
        assert!(tx.send(Ok("late".into())).is_ok());
        pool.run_until_stalled();

        assert_eq!(recorder.calls.get(), 1);
        assert!(recorder.successes.borrow().is_empty());
        assert!(recorder.rejects.borrow().is_empty());
    }

    #[test]
    fn overlapping_runs_each_deliver() {
        let recorder = Recorder::<u32, ()>::new();
        let senders = Rc::new(RefCell::new(Vec::new()));
        let config = {
            let senders = Rc::clone(&senders);
            recorder.counting(move || {
                let (tx, rx) = oneshot::channel::<u32>();
                senders.borrow_mut().push(tx);
                async move { rx.await.map_err(|_| ()) }
            })
        };
        let (task, mut pool) = attach(config.manual(true));
        task.mount();
        let trigger = task.trigger();
        trigger.emit(());
        trigger.emit(());
        pool.run_until_stalled();

        let mut pending: Vec<_> = senders.borrow_mut().drain(..).collect();
        let second = pending.pop().unwrap();
        let first = pending.pop().unwrap();
        second.send(2).unwrap();
        pool.run_until_stalled();
        first.send(1).unwrap();
        pool.run_until_stalled();

        assert_eq!(*recorder.successes.borrow(), vec![2, 1]);
    }

    #[test]
    fn missing_reject_callback_drops_the_error() {
        let successes = Rc::new(RefCell::new(Vec::<u8>::new()));
        let config = {
            let successes = Rc::clone(&successes);
            AsyncConfig::new(|| async { Err::<u8, _>("nope") })
                .on_success(move |value: u8| successes.borrow_mut().push(value))
        };
        let (task, mut pool) = attach(config);
        task.mount();
        pool.run_until_stalled();
        assert!(successes.borrow().is_empty());
    }

    #[test]
    fn shared_liveness_is_honoured() {
        let recorder = Recorder::<u8, ()>::new();
        let liveness = Liveness::new();
        let mut pool = LocalPool::new();
        let task = AsyncTask::with_liveness(
            recorder.counting(|| async { Ok(3) }).manual(true),
            liveness.clone(),
            pool.spawner(),
        );

        task.execute();
        pool.run_until_stalled();
        assert!(recorder.successes.borrow().is_empty());

        liveness.activate();
        task.trigger().emit(());
        pool.run_until_stalled();
        assert_eq!(*recorder.successes.borrow(), vec![3]);
        assert_eq!(task.liveness(), &liveness);
    }
}
