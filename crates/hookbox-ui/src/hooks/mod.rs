//! Yew hooks over the core primitives.

mod use_async;
mod use_breakpoint;
mod use_fetch;

pub use use_async::use_async;
pub use use_breakpoint::{current_breakpoint, use_breakpoint};
pub use use_fetch::{UseFetchHandle, use_fetch};
