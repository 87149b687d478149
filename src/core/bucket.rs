//! # Handler buckets.
//!
//! A [`Bucket<E>`] holds every handler registered for category `E`, always
//! sorted by descending priority with ties in registration order.
//!
//! The registry stores buckets of different categories side by side behind
//! [`ErasedBucket`]. Operations that do not touch the payload type (removal by
//! id, size, name) go through the trait object; typed access goes through
//! [`downcast_ref`] / [`downcast_mut`], which check the concrete type and
//! return [`RegistryError::CategoryMismatch`] instead of reinterpreting memory.
//!
//! ```text
//! HashMap<TypeId, Box<dyn ErasedBucket>>
//!   TypeId(Tick)  ─► Bucket<Tick>  [ #3 VeryImportant, #0 Important, #1 Default ]
//!   TypeId(Quit)  ─► Bucket<Quit>  [ #2 Default ]
//! ```

use std::any::Any;
use std::sync::Arc;

use crate::{
    error::RegistryError,
    handlers::{HandlerId, HandlerRef},
    policies::Priority,
};

/// One registered handler.
pub(crate) struct Record<E> {
    pub(crate) id: HandlerId,
    pub(crate) priority: Priority,
    pub(crate) handler: HandlerRef<E>,
}

/// Ordered handlers of a single category.
pub(crate) struct Bucket<E> {
    records: Vec<Record<E>>,
}

impl<E: 'static> Bucket<E> {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a batch of records and restores the order.
    ///
    /// The batch must carry ids larger than any already present.
    pub(crate) fn extend(&mut self, batch: impl IntoIterator<Item = Record<E>>) {
        self.records.extend(batch);
        // `sort_by` is stable: equal priorities keep registration order.
        self.records.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Handlers in delivery order.
    pub(crate) fn snapshot(&self) -> Vec<HandlerRef<E>> {
        self.records.iter().map(|r| Arc::clone(&r.handler)).collect()
    }

    #[cfg(test)]
    pub(crate) fn ids(&self) -> Vec<HandlerId> {
        self.records.iter().map(|r| r.id).collect()
    }
}

/// Category-independent view of a bucket.
pub(crate) trait ErasedBucket: Send + Sync {
    /// Name of the category this bucket was created for.
    fn category(&self) -> &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes the record with `id`, keeping the order of the rest.
    fn remove(&mut self, id: HandlerId) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<E: 'static> ErasedBucket for Bucket<E> {
    fn category(&self) -> &'static str {
        std::any::type_name::<E>()
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn remove(&mut self, id: HandlerId) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(idx) => {
                self.records.remove(idx);
                true
            }
            None => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Typed shared access to an erased bucket.
pub(crate) fn downcast_ref<E: 'static>(
    bucket: &dyn ErasedBucket,
) -> Result<&Bucket<E>, RegistryError> {
    let found = bucket.category();
    bucket
        .as_any()
        .downcast_ref::<Bucket<E>>()
        .ok_or_else(|| RegistryError::CategoryMismatch {
            category: std::any::type_name::<E>(),
            found,
        })
}

/// Typed exclusive access to an erased bucket.
pub(crate) fn downcast_mut<E: 'static>(
    bucket: &mut dyn ErasedBucket,
) -> Result<&mut Bucket<E>, RegistryError> {
    let found = bucket.category();
    bucket
        .as_any_mut()
        .downcast_mut::<Bucket<E>>()
        .ok_or_else(|| RegistryError::CategoryMismatch {
            category: std::any::type_name::<E>(),
            found,
        })
}
