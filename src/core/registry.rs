//! # Event registry - typed, priority-ordered handler dispatch.
//!
//! [`EventRegistry`] maps every event category (a Rust type) to a bucket of
//! handlers and delivers events to them synchronously, highest priority first.
//!
//! ## Architecture
//! ```text
//! register::<E>(specs) ──► write lock ──► bucket(E) created lazily
//!                                          ├─► ids issued from the shared counter
//!                                          └─► stable re-sort by priority (desc)
//!
//! unregister_handler::<E>(id) ──► write lock ──► bucket(E).remove(id)
//! unregister_category::<E>()  ──► write lock ──► drop bucket(E)
//!
//! emit::<E>(&event) ──► read lock ──► snapshot bucket(E) (Arc clones) ──► unlock
//!                                        └─► handler_1(&event) ─► handler_2(&event) ─► ...
//! ```
//!
//! ## Rules
//! - One reader/writer lock guards the bucket map and the id counter together.
//! - Ids are unique across categories and never reused.
//! - Emit delivers to the snapshot taken under the read lock; handlers run
//!   with no lock held, so they may register, unregister or emit re-entrantly.
//! - Unknown categories are never an error for emit.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};

use parking_lot::RwLock;
use tracing::{debug, error, trace, warn};

use crate::{
    core::{
        bucket::{downcast_mut, downcast_ref, Bucket, ErasedBucket, Record},
        config::Config,
        emission::Emission,
    },
    error::RegistryError,
    handlers::{HandlerId, HandlerSpec},
    policies::Priority,
};

/// Buckets plus the id counter, guarded by one lock.
struct Inner {
    buckets: HashMap<TypeId, Box<dyn ErasedBucket>>,
    next_id: u64,
}

/// In-process publish/subscribe registry.
///
/// ## Example
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use eventvisor::{EventRegistry, HandlerSpec, Priority};
///
/// struct Tick(u32);
///
/// let registry = EventRegistry::default();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let (a, b) = (Arc::clone(&seen), Arc::clone(&seen));
/// let ids = registry.register([
///     HandlerSpec::from_fn(move |t: &Tick| a.lock().unwrap().push(("A", t.0)), Priority::Default),
///     HandlerSpec::from_fn(move |t: &Tick| b.lock().unwrap().push(("B", t.0)), Priority::Important),
/// ])?;
///
/// registry.emit(&Tick(5))?;
/// registry.unregister_handler::<Tick>(ids[0])?;
/// registry.emit(&Tick(7))?;
///
/// assert_eq!(*seen.lock().unwrap(), vec![("B", 5), ("A", 5), ("B", 7)]);
/// # Ok::<(), eventvisor::RegistryError>(())
/// ```
pub struct EventRegistry {
    inner: RwLock<Inner>,
    cfg: Config,
}

impl EventRegistry {
    /// Creates an empty registry.
    pub fn new(cfg: Config) -> Self {
        Self {
            inner: RwLock::new(Inner {
                buckets: HashMap::new(),
                next_id: 0,
            }),
            cfg,
        }
    }

    /// Returns the configuration the registry was built with.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Registers a batch of handlers for category `E`.
    ///
    /// Ids are returned in input order. An empty batch is a no-op returning
    /// an empty list. A batch that would exceed
    /// [`Config::max_handlers_per_category`] is rejected whole.
    pub fn register<E, I>(&self, specs: I) -> Result<Vec<HandlerId>, RegistryError>
    where
        E: 'static,
        I: IntoIterator<Item = HandlerSpec<E>>,
    {
        let specs: Vec<HandlerSpec<E>> = specs.into_iter().collect();
        let ids = self.insert(specs)?;
        Ok(ids.map(HandlerId::new).collect())
    }

    /// Registers a single closure for category `E`.
    ///
    /// Shorthand for `register([HandlerSpec::from_fn(f, priority)])`.
    pub fn on<E, F>(&self, priority: Priority, f: F) -> Result<HandlerId, RegistryError>
    where
        E: 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let ids = self.insert(vec![HandlerSpec::from_fn(f, priority)])?;
        Ok(HandlerId::new(ids.start))
    }

    /// Removes one handler from category `E`.
    ///
    /// Returns [`RegistryError::HandlerNotFound`] when the category has no
    /// bucket or the id was not issued for it (or was already removed).
    ///
    /// An emit already in flight delivers from its own snapshot, so the
    /// handler may still run once after this returns `Ok`.
    pub fn unregister_handler<E: 'static>(&self, id: HandlerId) -> Result<(), RegistryError> {
        let category = type_name::<E>();
        let remaining = {
            let mut inner = self.inner.write();
            inner
                .buckets
                .get_mut(&TypeId::of::<E>())
                .and_then(|bucket| bucket.remove(id).then(|| bucket.len()))
        };

        match remaining {
            Some(remaining) => {
                debug!(category, %id, remaining, "handler unregistered");
                Ok(())
            }
            None => {
                warn!(category, %id, "unregister: handler not found");
                Err(RegistryError::HandlerNotFound { category, id })
            }
        }
    }

    /// Drops every handler of category `E`.
    ///
    /// Returns `true` if the category had a bucket. Issued ids stay retired.
    pub fn unregister_category<E: 'static>(&self) -> bool {
        let removed = self.inner.write().buckets.remove(&TypeId::of::<E>());
        match removed {
            Some(bucket) => {
                debug!(
                    category = type_name::<E>(),
                    dropped = bucket.len(),
                    "category unregistered"
                );
                true
            }
            None => false,
        }
    }

    /// Delivers `event` to every handler of category `E`, highest priority first.
    ///
    /// Runs synchronously on the caller's thread. A category without handlers
    /// yields an empty [`Emission`]. Under [`PanicPolicy::Propagate`](crate::PanicPolicy::Propagate)
    /// a panicking handler unwinds out of this call and the remaining handlers
    /// are not invoked.
    pub fn emit<E: 'static>(&self, event: &E) -> Result<Emission, RegistryError> {
        let category = type_name::<E>();
        let handlers = {
            let inner = self.inner.read();
            match inner.buckets.get(&TypeId::of::<E>()) {
                Some(bucket) => downcast_ref::<E>(&**bucket)?.snapshot(),
                None => Vec::new(),
            }
        };

        trace!(category, handlers = handlers.len(), "emit");

        let isolate = self.cfg.panic_policy.isolates();
        let mut emission = Emission::default();
        for handler in &handlers {
            emission.invoked += 1;
            if !isolate {
                handler.handle(event);
                continue;
            }
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| handler.handle(event))) {
                emission.panicked += 1;
                error!(
                    category,
                    handler = handler.name(),
                    panic = panic_message(&*payload),
                    "handler panicked"
                );
            }
        }
        Ok(emission)
    }

    /// Number of handlers registered for category `E`.
    pub fn handler_count<E: 'static>(&self) -> usize {
        self.inner
            .read()
            .buckets
            .get(&TypeId::of::<E>())
            .map_or(0, |bucket| bucket.len())
    }

    /// True if category `E` has at least one handler.
    pub fn contains<E: 'static>(&self) -> bool {
        self.handler_count::<E>() > 0
    }

    /// Number of categories with at least one handler.
    pub fn category_count(&self) -> usize {
        self.inner
            .read()
            .buckets
            .values()
            .filter(|bucket| !bucket.is_empty())
            .count()
    }

    /// True if no category has a handler.
    pub fn is_empty(&self) -> bool {
        self.category_count() == 0
    }

    /// Drops every bucket. The id counter keeps running.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        let dropped = inner.buckets.len();
        inner.buckets.clear();
        debug!(dropped, "registry cleared");
    }

    /// Appends a batch under the write lock and returns the raw id range issued.
    fn insert<E: 'static>(&self, specs: Vec<HandlerSpec<E>>) -> Result<Range<u64>, RegistryError> {
        let category = type_name::<E>();
        let mut guard = self.inner.write();
        let Inner { buckets, next_id } = &mut *guard;

        let first = *next_id;
        if specs.is_empty() {
            return Ok(first..first);
        }

        if let Some(limit) = self.cfg.handler_limit() {
            let current = buckets
                .get(&TypeId::of::<E>())
                .map_or(0, |bucket| bucket.len());
            let requested = current + specs.len();
            if requested > limit {
                return Err(RegistryError::CapacityExceeded {
                    category,
                    limit,
                    requested,
                });
            }
        }

        let erased = buckets
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(Bucket::<E>::new()) as Box<dyn ErasedBucket>);
        let bucket = downcast_mut::<E>(&mut **erased)?;

        let mut batch = Vec::with_capacity(specs.len());
        for spec in specs {
            let (handler, priority) = spec.into_parts();
            batch.push(Record {
                id: HandlerId::new(*next_id),
                priority,
                handler,
            });
            *next_id += 1;
        }
        let issued = first..*next_id;

        bucket.extend(batch);
        let size = bucket.len();
        drop(guard);

        debug!(
            category,
            first = issued.start,
            count = issued.end - issued.start,
            size,
            "handlers registered"
        );
        Ok(issued)
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("EventRegistry")
            .field("categories", &inner.buckets.len())
            .field("next_id", &inner.next_id)
            .field("cfg", &self.cfg)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}
