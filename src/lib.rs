//! # eventvisor
//!
//! **Eventvisor** is an in-process, synchronous publish/subscribe registry.
//!
//! Components register handlers for an event category (any Rust type) with a
//! [`Priority`], and later emit values of that type to every registered
//! handler, highest priority first, on the caller's thread. Each registration
//! yields a [`HandlerId`] used to remove exactly that handler later.
//!
//! ## Architecture
//! ```text
//!   register::<Tick>([spec, spec])        emit(&Tick(5))            unregister_handler::<Tick>(id)
//!              │                               │                               │
//!              ▼                               ▼                               ▼
//! ┌───────────────────────────────────────────────────────────────────────────────────┐
//! │  EventRegistry                                                                    │
//! │  RwLock ─┬─ next_id (one counter, ids unique across categories)                   │
//! │          └─ HashMap<TypeId, Box<dyn ErasedBucket>>                                │
//! │                 ├─ TypeId(Tick) ─► Bucket<Tick> [VeryImportant.., Important.., Default..]
//! │                 └─ TypeId(Quit) ─► Bucket<Quit> [...]                             │
//! └──────────────────────────────────────┬────────────────────────────────────────────┘
//!                                        │ snapshot (read lock), then unlock
//!                                        ▼
//!                    handler_1(&ev) ─► handler_2(&ev) ─► ... ─► Emission { invoked, panicked }
//! ```
//!
//! ## Features
//! | Area              | Description                                                 | Key types / traits                          |
//! |-------------------|-------------------------------------------------------------|---------------------------------------------|
//! | **Registry**      | Register, remove and emit per event category.               | [`EventRegistry`], [`Emission`]             |
//! | **Handlers**      | Callbacks as closures or trait implementations.             | [`Handler`], [`HandlerFn`], [`HandlerSpec`] |
//! | **Policies**      | Delivery order and handler panic handling.                  | [`Priority`], [`PanicPolicy`]               |
//! | **Errors**        | Typed errors for removal, capacity and contract violations. | [`RegistryError`]                           |
//! | **Configuration** | Centralize registry settings.                               | [`Config`]                                  |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] handler _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use eventvisor::{Config, EventRegistry, HandlerFn, HandlerSpec, PanicPolicy, Priority};
//!
//! struct Tick(u32);
//!
//! let mut cfg = Config::default();
//! cfg.panic_policy = PanicPolicy::Isolate;
//! let registry = EventRegistry::new(cfg);
//!
//! let total = Arc::new(AtomicU32::new(0));
//! let sum = Arc::clone(&total);
//! let ids = registry.register([
//!     HandlerSpec::<Tick>::new(
//!         HandlerFn::arc("sum", move |t: &Tick| { sum.fetch_add(t.0, Ordering::SeqCst); }),
//!         Priority::Important,
//!     ),
//! ])?;
//!
//! let emission = registry.emit(&Tick(5))?;
//! assert_eq!(emission.invoked, 1);
//! assert_eq!(total.load(Ordering::SeqCst), 5);
//!
//! registry.unregister_handler::<Tick>(ids[0])?;
//! assert!(registry.emit(&Tick(5))?.is_empty());
//! # Ok::<(), eventvisor::RegistryError>(())
//! ```
mod core;
mod error;
mod handlers;
mod policies;

// ---- Public re-exports ----

pub use crate::core::{Config, Emission, EventRegistry};
pub use error::RegistryError;
pub use handlers::{Handler, HandlerFn, HandlerId, HandlerRef, HandlerSpec};
pub use policies::{PanicPolicy, Priority};

// Optional: expose a simple built-in logging handler (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use handlers::LogWriter;
