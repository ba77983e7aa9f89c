//! Request executor: one JSON request at a time with loading/error state.
//!
//! # Design
//! - The executor owns its state and a parent cancellation token; every
//!   request runs under a child token that is dropped once it settles.
//! - Failures are recorded in state; `call_endpoint` never returns an error.
//! - The network layer sits behind [`Transport`] so the browser binding and
//!   test doubles share the same lifecycle logic.

use futures::future::{self, Either, LocalBoxFuture};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::pin::pin;
use std::rc::Rc;
use thiserror::Error;
use tracing::debug;

pub use http::Method;
pub use tokio_util::sync::CancellationToken;

/// Failure captured by a [`RequestExecutor`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not be constructed (bad header, missing window, ...).
    #[error("request could not be built: {0}")]
    Request(String),
    /// The network layer rejected the request.
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not valid JSON for the expected type.
    #[error("response body could not be parsed: {0}")]
    Parse(String),
    /// The request was cancelled through the executor's token.
    #[error("request aborted")]
    Aborted,
}

/// Request configuration passed alongside the URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// HTTP method. Defaults to `GET`.
    pub method: Method,
    /// Header name/value pairs, applied in order.
    pub headers: Vec<(String, String)>,
    /// Optional request body.
    pub body: Option<String>,
}

impl RequestOptions {
    /// Options for a plain `GET`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Append a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set a raw body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON body and set the matching content type.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] when `value` cannot be serialized.
    pub fn json<B: Serialize>(self, value: &B) -> Result<Self, FetchError> {
        let body =
            serde_json::to_string(value).map_err(|err| FetchError::Request(err.to_string()))?;
        Ok(self.header("Content-Type", "application/json").body(body))
    }
}

/// Fully described request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Absolute or relative URL.
    pub url: String,
    /// Method, headers and body.
    pub options: RequestOptions,
}

/// Network layer used by a [`RequestExecutor`].
pub trait Transport {
    /// Send `request` and resolve with the raw response body.
    ///
    /// `token` belongs to this request alone. Implementations should abort the
    /// underlying I/O when it fires and release it once the returned future
    /// completes; the executor treats a fired token as a cancellation
    /// regardless.
    fn send(
        &self,
        request: FetchRequest,
        token: CancellationToken,
    ) -> LocalBoxFuture<'static, Result<String, FetchError>>;
}

/// Loading/error state observed by the view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestState {
    /// Last captured failure. Not cleared when a new request starts.
    pub error: Option<FetchError>,
    /// Whether a request is in flight.
    pub is_loading: bool,
}

type StateListener = Box<dyn Fn(&RequestState)>;

struct ExecutorInner<C> {
    transport: C,
    token: CancellationToken,
    unmounted: Cell<bool>,
    state: RefCell<RequestState>,
    on_change: Option<StateListener>,
}

impl<C> ExecutorInner<C> {
    fn update(&self, apply: impl FnOnce(&mut RequestState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            apply(&mut state);
            state.clone()
        };
        if let Some(listener) = &self.on_change {
            listener(&snapshot);
        }
    }
}

/// Issues requests through a [`Transport`] and tracks their lifecycle.
///
/// Clones share state and the cancellation token.
pub struct RequestExecutor<C> {
    inner: Rc<ExecutorInner<C>>,
}

impl<C> Clone for RequestExecutor<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C> PartialEq for RequestExecutor<C> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C> fmt::Debug for RequestExecutor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("state", &*self.inner.state.borrow())
            .field("token", &self.inner.token)
            .finish_non_exhaustive()
    }
}

impl<C: Transport + 'static> RequestExecutor<C> {
    /// Create an executor with a fresh cancellation token.
    #[must_use]
    pub fn new(transport: C) -> Self {
        Self::build(transport, None)
    }

    /// Create an executor that reports every state change to `on_change`.
    #[must_use]
    pub fn with_listener(transport: C, on_change: impl Fn(&RequestState) + 'static) -> Self {
        Self::build(transport, Some(Box::new(on_change)))
    }

    fn build(transport: C, on_change: Option<StateListener>) -> Self {
        Self {
            inner: Rc::new(ExecutorInner {
                transport,
                token: CancellationToken::new(),
                unmounted: Cell::new(false),
                state: RefCell::new(RequestState::default()),
                on_change,
            }),
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> RequestState {
        self.inner.state.borrow().clone()
    }

    /// Start a request and resolve with the parsed body, or `None` on failure.
    ///
    /// Loading is flagged and the request is handed to the transport before
    /// the returned future is first polled.
    pub fn call_endpoint<T>(
        &self,
        url: impl Into<String>,
        options: RequestOptions,
    ) -> LocalBoxFuture<'static, Option<T>>
    where
        T: DeserializeOwned + 'static,
    {
        let request = FetchRequest {
            url: url.into(),
            options,
        };
        debug!(url = %request.url, method = %request.options.method, "request started");
        self.inner.update(|state| state.is_loading = true);

        let inner = Rc::clone(&self.inner);
        let token = inner.token.child_token();
        let send = inner.transport.send(request, token.clone());
        Box::pin(async move {
            let outcome = {
                let cancelled = pin!(token.cancelled());
                match future::select(send, cancelled).await {
                    Either::Left((result, _)) if !token.is_cancelled() => {
                        result.and_then(|body| parse_body::<T>(&body))
                    }
                    _ => Err(FetchError::Aborted),
                }
            };
            drop(token);
            match outcome {
                Ok(value) => {
                    debug!("request finished");
                    inner.update(|state| state.is_loading = false);
                    Some(value)
                }
                Err(err) => {
                    debug!(error = %err, "request failed");
                    inner.update(|state| {
                        state.error = Some(err);
                        state.is_loading = false;
                    });
                    None
                }
            }
        })
    }

    /// Cancel any in-flight request and clear the loading flag.
    ///
    /// The token is not reset: requests started afterwards settle as
    /// [`FetchError::Aborted`].
    pub fn abort(&self) {
        if !self.inner.token.is_cancelled() {
            debug!("request executor aborted");
        }
        self.inner.token.cancel();
        self.inner.update(|state| state.is_loading = false);
    }

    /// Tear the executor down with its owner: aborts once, later calls do
    /// nothing.
    pub fn unmount(&self) {
        if self.inner.unmounted.replace(true) {
            return;
        }
        debug!("request executor unmounted");
        self.abort();
    }

    /// Whether [`unmount`](Self::unmount) has run.
    #[must_use]
    pub fn is_unmounted(&self) -> bool {
        self.inner.unmounted.get()
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|err| FetchError::Parse(err.to_string()))
}
