//! # Logging handler for debugging and demos.
//!
//! [`LogWriter`] logs every event it receives through `tracing` at `info`
//! level. Register it like any other handler for categories that implement
//! `Debug`.
//!
//! ## Output format (fmt subscriber)
//! ```text
//! INFO eventvisor::handlers::log: event category="tick::Tick" event=Tick(5)
//! ```
//!
//! ## Example
//! ```no_run
//! # use std::sync::Arc;
//! # use eventvisor::{EventRegistry, HandlerSpec, LogWriter, Priority};
//! #[derive(Debug)]
//! struct Tick(u32);
//!
//! let registry = EventRegistry::default();
//! registry
//!     .register([HandlerSpec::<Tick>::new(Arc::new(LogWriter), Priority::VeryImportant)])
//!     .unwrap();
//! ```

use std::fmt::Debug;

use crate::handlers::handler::Handler;

/// Handler that logs each event.
///
/// Enabled via the `logging` feature. Not intended for production use:
/// implement a custom [`Handler`] for structured logging or metrics.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogWriter;

impl<E: Debug + 'static> Handler<E> for LogWriter {
    fn handle(&self, event: &E) {
        tracing::info!(category = std::any::type_name::<E>(), event = ?event, "event");
    }

    fn name(&self) -> &str {
        "log_writer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Ping;

    #[test]
    fn test_log_writer_handles_without_subscriber() {
        let h = LogWriter;
        h.handle(&Ping);
        assert_eq!(<LogWriter as Handler<Ping>>::name(&h), "log_writer");
    }
}
