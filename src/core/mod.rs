//! Registry core: storage, ordering and dispatch.
//!
//! The public API from this module is [`EventRegistry`], its [`Config`] and
//! the [`Emission`] report returned by every emit.
//!
//! Internal modules:
//! - [`registry`]: the registry itself (register/unregister/emit);
//! - [`bucket`]: per-category ordered handler storage and type erasure;
//! - [`config`]: registry settings;
//! - [`emission`]: emit outcome.

mod bucket;
mod config;
mod emission;
mod registry;

pub use config::Config;
pub use emission::Emission;
pub use registry::EventRegistry;
