//! `use_fetch`: JSON requests with loading/error state and abort on unmount.

use crate::core::fetch::{FetchError, RequestExecutor, RequestOptions, RequestState};
use crate::services::fetch::BrowserTransport;
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use yew::prelude::*;

/// State and controls returned by [`use_fetch`].
#[derive(Clone, Debug, PartialEq)]
pub struct UseFetchHandle {
    /// Last captured failure.
    pub error: Option<FetchError>,
    /// Whether a request is in flight.
    pub is_loading: bool,
    executor: RequestExecutor<BrowserTransport>,
}

impl UseFetchHandle {
    /// See [`RequestExecutor::call_endpoint`].
    pub fn call_endpoint<T>(
        &self,
        url: impl Into<String>,
        options: RequestOptions,
    ) -> LocalBoxFuture<'static, Option<T>>
    where
        T: DeserializeOwned + 'static,
    {
        self.executor.call_endpoint(url, options)
    }

    /// See [`RequestExecutor::abort`].
    pub fn abort(&self) {
        self.executor.abort();
    }

    /// Executor shared with this component, for use inside producers.
    #[must_use]
    pub fn executor(&self) -> RequestExecutor<BrowserTransport> {
        self.executor.clone()
    }
}

/// Request executor bound to the calling component.
///
/// The executor and its cancellation token live as long as the component;
/// in-flight requests are aborted when it unmounts.
#[hook]
pub fn use_fetch() -> UseFetchHandle {
    let state = use_state(RequestState::default);
    let executor = {
        let state = state.clone();
        use_memo(
            move |_| {
                RequestExecutor::with_listener(BrowserTransport, move |next: &RequestState| {
                    state.set(next.clone());
                })
            },
            (),
        )
    };
    {
        let executor = Rc::clone(&executor);
        use_effect_with_deps(move |_| move || executor.unmount(), ());
    }
    UseFetchHandle {
        error: state.error.clone(),
        is_loading: state.is_loading,
        executor: (*executor).clone(),
    }
}
