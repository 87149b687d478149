//! # Handler abstraction.
//!
//! A [`Handler`] receives a shared reference to an event of its category and
//! runs synchronously on the thread that called
//! [`EventRegistry::emit`](crate::EventRegistry::emit).
//!
//! Closures are adapted with [`HandlerFn`](crate::HandlerFn); implement the
//! trait directly when a handler carries state or wants a stable name.

use std::sync::Arc;

/// # Synchronous event callback.
///
/// # Example
/// ```
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use eventvisor::Handler;
///
/// struct Tick(u64);
///
/// #[derive(Default)]
/// struct TickCounter {
///     total: AtomicU64,
/// }
///
/// impl Handler<Tick> for TickCounter {
///     fn handle(&self, event: &Tick) {
///         self.total.fetch_add(event.0, Ordering::Relaxed);
///     }
///
///     fn name(&self) -> &str { "tick_counter" }
/// }
///
/// let counter = TickCounter::default();
/// counter.handle(&Tick(3));
/// assert_eq!(counter.total.load(Ordering::Relaxed), 3);
/// ```
pub trait Handler<E>: Send + Sync + 'static {
    /// Handles one event.
    ///
    /// Must not block indefinitely: emit runs every handler to completion
    /// before returning to its caller.
    fn handle(&self, event: &E);

    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handler handle stored in a bucket.
pub type HandlerRef<E> = Arc<dyn Handler<E>>;
