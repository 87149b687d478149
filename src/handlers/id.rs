//! Handler identity.

use std::fmt;

/// Identity issued by [`EventRegistry::register`](crate::EventRegistry::register).
///
/// Ids come from one counter per registry: they are unique across every
/// category, strictly increasing in registration order, and never reused,
/// even after the handler or its whole category is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerId(u64);

impl HandlerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
