//! Lock-guarded backing store shared by every locator surface.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{LocatorError, LocatorEvent, Result};

/// A registered service, type-erased. Always holds an `Arc<T>` for the `T`
/// whose `TypeId` keys it.
pub(crate) type Service = Box<dyn Any + Send + Sync>;

/// Observer invoked with every [`LocatorEvent`].
pub type TraceCallback = dyn Fn(&LocatorEvent) + Send + Sync + 'static;

/// Storage behind a locator: the service map and the optional trace callback.
///
/// A single `RwLock` guards the whole map. Register and reset take it for
/// writing, lookups take it for reading. Values displaced by a register or a
/// reset are dropped only after the lock is released, so a service's `Drop`
/// impl may call back into the locator.
#[derive(Default)]
pub struct LocatorStorage {
    services: RwLock<HashMap<TypeId, Service>>,
    trace: RwLock<Option<Arc<TraceCallback>>>,
}

impl LocatorStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose map is pre-sized for `capacity` services.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            services: RwLock::new(HashMap::with_capacity(capacity)),
            trace: RwLock::new(None),
        }
    }

    /// Inserts `service` under `key`, returning the displaced entry.
    pub(crate) fn insert(&self, key: TypeId, service: Service) -> Option<Service> {
        self.services.write().insert(key, service)
    }

    /// Clones the `Arc<T>` registered under `T`.
    pub(crate) fn get<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        let services = self.services.read();
        let service: &(dyn Any + Send + Sync) = services
            .get(&TypeId::of::<T>())
            .ok_or_else(LocatorError::not_registered::<T>)?
            .as_ref();

        service
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or_else(LocatorError::type_mismatch::<T>)
    }

    pub(crate) fn contains_key(&self, key: TypeId) -> bool {
        self.services.read().contains_key(&key)
    }

    pub(crate) fn len(&self) -> usize {
        self.services.read().len()
    }

    /// Empties the map and returns how many entries it held.
    pub(crate) fn clear(&self) -> usize {
        let drained = std::mem::take(&mut *self.services.write());
        drained.len()
    }

    pub(crate) fn set_trace(&self, callback: Option<Arc<TraceCallback>>) {
        *self.trace.write() = callback;
    }

    /// Current trace callback. The slot's lock is released before returning,
    /// so the callback is free to touch the locator.
    pub(crate) fn trace_callback(&self) -> Option<Arc<TraceCallback>> {
        self.trace.read().clone()
    }
}

impl fmt::Debug for LocatorStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocatorStorage")
            .field("services", &self.len())
            .field("traced", &self.trace.read().is_some())
            .finish()
    }
}
