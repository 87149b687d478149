//! Delivery policies.
//!
//! This module groups the knobs that control **in which order** handlers run
//! and **what happens** when one of them panics.
//!
//! ## Contents
//! - [`Priority`]    where a handler sits in its bucket (highest first)
//! - [`PanicPolicy`] propagate or isolate handler panics during emit
//!
//! ## Defaults
//! - `Priority::Default` for handlers built with `HandlerSpec::with_defaults`.
//! - `PanicPolicy::Propagate`: emit is not panic-safe across handlers unless
//!   `Isolate` is configured.

mod panic;
mod priority;

pub use panic::PanicPolicy;
pub use priority::Priority;
