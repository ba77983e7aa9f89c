//! Core, DOM-free primitives behind the hooks.
pub mod breakpoints;
pub mod config;
pub mod fetch;
pub mod liveness;
pub mod task;
