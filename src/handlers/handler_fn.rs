//! # Closure-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(&E)` so it can be stored as a
//! [`HandlerRef`](crate::HandlerRef). The closure is shared, not cloned: state
//! that must change between events belongs behind an explicit `Arc<Mutex<..>>`
//! or atomic captured by the closure.
//!
//! ## Example
//! ```rust
//! use eventvisor::{HandlerFn, HandlerRef};
//!
//! let h: HandlerRef<u32> = HandlerFn::arc("printer", |n: &u32| println!("{n}"));
//! assert_eq!(h.name(), "printer");
//! h.handle(&5);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::handlers::handler::Handler;

/// Closure-backed handler implementation.
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new closure-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a [`HandlerRef`](crate::HandlerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates a handler named after the closure's type.
    pub fn anonymous(f: F) -> Self {
        Self::new(std::any::type_name::<F>(), f)
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFn").field("name", &self.name).finish()
    }
}

impl<E, F> Handler<E> for HandlerFn<F>
where
    F: Fn(&E) + Send + Sync + 'static, // Fn, not FnMut
{
    fn handle(&self, event: &E) {
        (self.f)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::HandlerRef;

    #[test]
    fn test_named_handler_invokes_closure() {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&hits);
        let h: HandlerRef<usize> = HandlerFn::arc("adder", move |n: &usize| {
            seen.fetch_add(*n, Ordering::SeqCst);
        });

        h.handle(&2);
        h.handle(&3);

        assert_eq!(h.name(), "adder");
        assert_eq!(hits.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_anonymous_name_mentions_closure() {
        let h = HandlerFn::anonymous(|_: &u8| {});
        let name = <HandlerFn<_> as Handler<u8>>::name(&h);
        assert!(name.contains("closure"), "unexpected name {name}");
    }

    #[test]
    fn test_debug_shows_name() {
        let h = HandlerFn::new("dbg", |_: &()| {});
        assert_eq!(format!("{h:?}"), r#"HandlerFn { name: "dbg" }"#);
    }
}
