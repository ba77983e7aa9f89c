#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Reusable Yew hooks: mount-aware async calls, cancellable JSON fetches and
//! responsive breakpoints, plus a small demo page.
//!
//! The hook logic lives in [`core`] and is testable on the host; the browser
//! bindings and the hooks themselves are only built for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod hooks;
#[cfg(target_arch = "wasm32")]
pub mod services;

pub use crate::core::breakpoints::BreakpointFlags;
pub use crate::core::fetch::{
    CancellationToken, FetchError, Method, RequestExecutor, RequestOptions, RequestState, Transport,
};
pub use crate::core::liveness::Liveness;
pub use crate::core::task::{AsyncConfig, AsyncTask};

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
#[cfg(target_arch = "wasm32")]
pub use hooks::{UseFetchHandle, use_async, use_breakpoint, use_fetch};
