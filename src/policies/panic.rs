//! # Handler panic policy.
//!
//! [`PanicPolicy`] decides what [`EventRegistry::emit`](crate::EventRegistry::emit)
//! does when a handler panics.
//!
//! ```text
//! PanicPolicy::Propagate  → panic unwinds out of emit; later handlers are skipped (default)
//! PanicPolicy::Isolate    → panic is caught and logged; delivery continues with the next handler
//! ```
//!
//! In both modes the registry stays usable: no lock is held while handlers run.

/// What to do when a handler panics during emission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanicPolicy {
    /// Let the panic unwind to the caller of `emit` (default).
    #[default]
    Propagate,
    /// Catch the panic, log it and keep delivering.
    Isolate,
}

impl PanicPolicy {
    /// True if handler panics are caught by the registry.
    #[inline]
    pub fn isolates(self) -> bool {
        matches!(self, PanicPolicy::Isolate)
    }
}
