//! Browser `fetch` transport.
//!
//! # Design
//! - One `AbortController` per request, aborted when that request's token fires.
//! - The controller and token are dropped with the request future.
//! - Bodies are read as text; JSON parsing stays in the executor.

use crate::core::fetch::{CancellationToken, FetchError, FetchRequest, Transport};
use futures::future::{self, Either, LocalBoxFuture};
use gloo_net::http::RequestBuilder;
use std::pin::pin;
use web_sys::{AbortController, AbortSignal};

/// [`Transport`] backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    fn send(
        &self,
        request: FetchRequest,
        token: CancellationToken,
    ) -> LocalBoxFuture<'static, Result<String, FetchError>> {
        Box::pin(async move {
            let controller = match AbortController::new() {
                Ok(controller) => controller,
                Err(err) => {
                    return Err(FetchError::Request(format!(
                        "abort controller unavailable: {err:?}"
                    )));
                }
            };
            let signal = controller.signal();
            let fetch = pin!(fetch_text(&request, &signal));
            let cancelled = pin!(token.cancelled());
            match future::select(fetch, cancelled).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => {
                    controller.abort();
                    Err(FetchError::Aborted)
                }
            }
        })
    }
}

#[allow(clippy::future_not_send)]
async fn fetch_text(request: &FetchRequest, signal: &AbortSignal) -> Result<String, FetchError> {
    let mut builder = RequestBuilder::new(&request.url)
        .method(request.options.method.clone())
        .abort_signal(Some(signal));
    for (name, value) in &request.options.headers {
        builder = builder.header(name, value);
    }
    let prepared = match &request.options.body {
        Some(body) => builder.body(body.as_str()),
        None => builder.build(),
    }
    .map_err(|err| FetchError::Request(err.to_string()))?;

    let response = prepared
        .send()
        .await
        .map_err(|err| rejection(&err, signal))?;
    response.text().await.map_err(|err| rejection(&err, signal))
}

fn rejection(err: &gloo_net::Error, signal: &AbortSignal) -> FetchError {
    if signal.aborted() {
        FetchError::Aborted
    } else {
        FetchError::Network(err.to_string())
    }
}
