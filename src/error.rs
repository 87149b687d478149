//! Error types used by the event registry.
//!
//! [`RegistryError`] covers every failure the registry reports. It provides
//! helper methods (`as_label`, `as_message`) for logging/metrics.
//!
//! Emitting to a category without handlers is not an error; neither is
//! removing a category that was never registered.

use thiserror::Error;

use crate::handlers::HandlerId;

/// # Errors produced by the event registry.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No handler with this id is registered for the category.
    #[error("handler {id} is not registered for `{category}`")]
    HandlerNotFound {
        /// Category the removal targeted.
        category: &'static str,
        /// The id that was not found.
        id: HandlerId,
    },

    /// The bucket stored for a category holds handlers of another payload type.
    ///
    /// Contract violation: category keys are unique per type, so this signals
    /// a bug in the registry rather than a caller error.
    #[error("bucket for `{category}` holds handlers of `{found}`")]
    CategoryMismatch {
        /// Category the operation asked for.
        category: &'static str,
        /// Category the stored bucket was created for.
        found: &'static str,
    },

    /// Registration would grow the category past the configured limit.
    #[error("`{category}` would hold {requested} handlers; limit is {limit}")]
    CapacityExceeded {
        /// Category the batch targeted.
        category: &'static str,
        /// Configured `max_handlers_per_category`.
        limit: usize,
        /// Bucket size the batch would have produced.
        requested: usize,
    },
}

impl RegistryError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventvisor::RegistryError;
    ///
    /// let err = RegistryError::CapacityExceeded { category: "tick", limit: 1, requested: 2 };
    /// assert_eq!(err.as_label(), "capacity_exceeded");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RegistryError::HandlerNotFound { .. } => "handler_not_found",
            RegistryError::CategoryMismatch { .. } => "category_mismatch",
            RegistryError::CapacityExceeded { .. } => "capacity_exceeded",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RegistryError::HandlerNotFound { category, id } => {
                format!("not found: handler={id} category={category}")
            }
            RegistryError::CategoryMismatch { category, found } => {
                format!("mismatch: category={category} bucket={found}")
            }
            RegistryError::CapacityExceeded {
                category,
                limit,
                requested,
            } => format!("capacity: category={category} limit={limit} requested={requested}"),
        }
    }

    /// True if the error signals a broken registry invariant rather than a
    /// caller-side condition.
    ///
    /// # Example
    /// ```
    /// use eventvisor::RegistryError;
    ///
    /// let bug = RegistryError::CategoryMismatch { category: "a", found: "b" };
    /// assert!(bug.is_contract_violation());
    /// ```
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, RegistryError::CategoryMismatch { .. })
    }
}
