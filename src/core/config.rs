//! # Registry configuration.
//!
//! Provides [`Config`], centralized settings for an [`EventRegistry`](crate::EventRegistry).
//!
//! Config is used in two ways:
//! 1. **Registry creation**: `EventRegistry::new(config)`
//! 2. **HandlerSpec defaults**: `HandlerSpec::with_defaults(handler, &config)`
//!
//! ## Sentinel values
//! - `max_handlers_per_category = 0` → unlimited

use crate::policies::{PanicPolicy, Priority};

/// Configuration for an event registry.
///
/// ## Field semantics
/// - `panic_policy`: What emit does when a handler panics
/// - `default_priority`: Priority used by `HandlerSpec::with_defaults`
/// - `max_handlers_per_category`: Bucket size limit (`0` = unlimited)
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to avoid
/// sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Debug)]
pub struct Config {
    /// Handler panic handling during emit.
    ///
    /// - `Propagate`: the panic reaches the caller of `emit`, later handlers are skipped
    /// - `Isolate`: the panic is logged and counted, delivery continues
    pub panic_policy: PanicPolicy,

    /// Default priority for handlers.
    ///
    /// Used by `HandlerSpec::with_defaults()`. Can be overridden per handler.
    pub default_priority: Priority,

    /// Maximum number of handlers one category may hold.
    ///
    /// - `0` = unlimited
    /// - `n > 0` = a registration batch that would grow the bucket past `n`
    ///   is rejected as a whole
    pub max_handlers_per_category: usize,
}

impl Config {
    /// Returns the per-category handler limit as an `Option`.
    ///
    /// - `None` → unlimited
    /// - `Some(n)` → at most `n` handlers per category
    #[inline]
    pub fn handler_limit(&self) -> Option<usize> {
        if self.max_handlers_per_category == 0 {
            None
        } else {
            Some(self.max_handlers_per_category)
        }
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `panic_policy = PanicPolicy::Propagate`
    /// - `default_priority = Priority::Default`
    /// - `max_handlers_per_category = 0` (unlimited)
    fn default() -> Self {
        Self {
            panic_policy: PanicPolicy::default(),
            default_priority: Priority::default(),
            max_handlers_per_category: 0,
        }
    }
}
