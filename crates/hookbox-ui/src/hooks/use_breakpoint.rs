//! `use_breakpoint`: active breakpoint tracked from window resizes.

use crate::core::breakpoints::{Breakpoint, BreakpointFlags, for_width};
use gloo::events::EventListener;
use gloo::utils::window;
use yew::prelude::*;

/// Breakpoint for the current window width.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn current_breakpoint() -> Breakpoint {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(1280.0) as u32;
    for_width(width)
}

/// Flags for the active breakpoint, re-rendering only when it changes.
///
/// The resize listener is acquired after each render and released by its
/// cleanup, so unmounting always unsubscribes.
#[hook]
pub fn use_breakpoint() -> BreakpointFlags {
    let breakpoint = use_state(current_breakpoint);
    {
        let breakpoint = breakpoint.clone();
        use_effect(move || {
            let listener = EventListener::new(&window(), "resize", {
                let breakpoint = breakpoint.clone();
                move |_event| {
                    let next = current_breakpoint();
                    if next != *breakpoint {
                        breakpoint.set(next);
                    }
                }
            });
            move || drop(listener)
        });
    }
    BreakpointFlags::from(*breakpoint)
}
