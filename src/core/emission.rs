//! Outcome of a single emit.

/// Summary returned by [`EventRegistry::emit`](crate::EventRegistry::emit).
///
/// - `invoked`: handlers that were called (including the ones that panicked)
/// - `panicked`: handlers whose panic was caught (`PanicPolicy::Isolate` only)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Emission {
    /// Handlers called.
    pub invoked: usize,
    /// Handler panics caught.
    pub panicked: usize,
}

impl Emission {
    /// True if no handler was registered for the category.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.invoked == 0
    }

    /// Handlers that returned normally.
    #[inline]
    pub fn completed(&self) -> usize {
        self.invoked - self.panicked
    }
}
