//! Browser bindings for the core primitives.

pub mod fetch;
pub mod spawn;
