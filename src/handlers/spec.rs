//! # Handler specification for registration.
//!
//! Defines [`HandlerSpec`], the bundle passed to
//! [`EventRegistry::register`](crate::EventRegistry::register): a handler and
//! the priority it is delivered with.
//!
//! A spec can be created:
//! - **Explicitly** with [`HandlerSpec::new`] / [`HandlerSpec::from_fn`]
//! - **From config** with [`HandlerSpec::with_defaults`] (inherit the default priority)

use std::fmt;
use std::sync::Arc;

use crate::{
    core::Config,
    handlers::{handler::HandlerRef, handler_fn::HandlerFn},
    policies::Priority,
};

/// Handler plus delivery priority.
///
/// ## Example
/// ```rust
/// use eventvisor::{Config, HandlerFn, HandlerSpec, Priority};
///
/// struct Tick(u32);
///
/// let spec = HandlerSpec::from_fn(|t: &Tick| println!("tick {}", t.0), Priority::Important);
/// assert_eq!(spec.priority(), Priority::Important);
///
/// let cfg = Config::default();
/// let spec2 = HandlerSpec::<Tick>::with_defaults(HandlerFn::arc("quiet", |_: &Tick| {}), &cfg);
/// assert_eq!(spec2.priority(), Priority::Default);
/// assert_eq!(spec2.name(), "quiet");
/// ```
pub struct HandlerSpec<E> {
    handler: HandlerRef<E>,
    priority: Priority,
}

impl<E: 'static> HandlerSpec<E> {
    /// Creates a spec from an existing handler.
    pub fn new(handler: HandlerRef<E>, priority: Priority) -> Self {
        Self { handler, priority }
    }

    /// Creates a spec from a closure, named after the closure's type.
    pub fn from_fn<F>(f: F, priority: Priority) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        Self::new(Arc::new(HandlerFn::anonymous(f)), priority)
    }

    /// Creates a spec with `cfg.default_priority`.
    pub fn with_defaults(handler: HandlerRef<E>, cfg: &Config) -> Self {
        Self::new(handler, cfg.default_priority)
    }

    /// Returns reference to the handler.
    pub fn handler(&self) -> &HandlerRef<E> {
        &self.handler
    }

    /// Convenience: returns the handler name.
    pub fn name(&self) -> &str {
        self.handler.name()
    }

    /// Returns the priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns a new spec with updated priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub(crate) fn into_parts(self) -> (HandlerRef<E>, Priority) {
        (self.handler, self.priority)
    }
}

impl<E> Clone for HandlerSpec<E> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            priority: self.priority,
        }
    }
}

impl<E: 'static> fmt::Debug for HandlerSpec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSpec")
            .field("handler", &self.handler.name())
            .field("priority", &self.priority)
            .finish()
    }
}
