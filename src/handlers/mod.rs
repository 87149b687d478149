//! # Handler abstractions and specifications.
//!
//! This module provides the handler-related types:
//! - [`Handler`] - trait for synchronous event callbacks
//! - [`HandlerFn`] - closure-backed handler implementation
//! - [`HandlerRef`] - shared reference to a handler (`Arc<dyn Handler<E>>`)
//! - [`HandlerSpec`] - specification bundling a handler with its priority
//! - [`HandlerId`] - identity issued at registration, used for removal

mod handler;
mod handler_fn;
mod id;
#[cfg(feature = "logging")]
mod log;
mod spec;

pub use handler::{Handler, HandlerRef};
pub use handler_fn::HandlerFn;
pub use id::HandlerId;
#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use spec::HandlerSpec;
