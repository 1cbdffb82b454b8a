//! An injectable locator that owns its storage.

use std::fmt;
use std::sync::Arc;

use crate::{LocatorApi, LocatorEvent, LocatorStorage};

/// A locator constructed explicitly and passed to the code that needs it,
/// typically behind an `Arc`.
///
/// Every instance is isolated: services registered in one are invisible to
/// others and to the [global](crate::global) locator.
///
/// # Examples
///
/// ```rust
/// use service_locator::{LocatorApi, ServiceLocator};
/// use std::sync::Arc;
///
/// let locator = Arc::new(ServiceLocator::with_capacity(4));
/// locator.register("postgres://localhost".to_string());
///
/// let worker = {
///     let locator = Arc::clone(&locator);
///     std::thread::spawn(move || locator.resolve::<String>().is_some())
/// };
/// assert!(worker.join().unwrap());
/// ```
#[derive(Default)]
pub struct ServiceLocator {
    storage: LocatorStorage,
}

impl ServiceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a locator pre-sized for `capacity` services.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: LocatorStorage::with_capacity(capacity),
        }
    }

    /// Installs a trace callback at construction time.
    pub fn with_trace_callback(
        self,
        callback: impl Fn(&LocatorEvent) + Send + Sync + 'static,
    ) -> Self {
        self.storage.set_trace(Some(Arc::new(callback)));
        self
    }
}

impl LocatorApi for ServiceLocator {
    fn storage(&self) -> &LocatorStorage {
        &self.storage
    }
}

impl fmt::Debug for ServiceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceLocator")
            .field("storage", &self.storage)
            .finish()
    }
}
