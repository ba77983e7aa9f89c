//! Per-attachment liveness flag shared between a view and its pending work.

use std::cell::Cell;
use std::rc::Rc;

/// Tracks whether the view owning an attachment is still mounted.
///
/// Starts inactive. Clones share the same flag, so a pending future holding a
/// clone observes teardown performed through any other clone.
#[derive(Clone, Debug, Default)]
pub struct Liveness {
    live: Rc<Cell<bool>>,
}

impl Liveness {
    /// Create an inactive flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the owning view as mounted.
    pub fn activate(&self) {
        self.live.set(true);
    }

    /// Mark the owning view as torn down.
    pub fn deactivate(&self) {
        self.live.set(false);
    }

    /// Whether callbacks may still be delivered.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.get()
    }
}

impl PartialEq for Liveness {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.live, &other.live)
    }
}
