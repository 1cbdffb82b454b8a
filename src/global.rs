//! The process-wide locator.
//!
//! Storage is created lazily on first access and lives until the process
//! exits; there is no teardown beyond [`reset`]. Prefer an injected
//! [`ServiceLocator`](crate::ServiceLocator) where the surrounding code can
//! pass one around.
//!
//! ```rust
//! use service_locator::global;
//! use std::sync::Arc;
//!
//! global::register("Hello, World!".to_string());
//!
//! let message: Arc<String> = global::resolve().unwrap();
//! assert_eq!(&*message, "Hello, World!");
//!
//! global::reset();
//! assert!(global::resolve::<String>().is_none());
//! ```

use std::sync::{Arc, LazyLock};

use crate::{LocatorApi, LocatorEvent, LocatorStorage, Result};

static STORAGE: LazyLock<LocatorStorage> = LazyLock::new(LocatorStorage::new);

/// Zero-sized handle to the process-wide storage.
///
/// Useful where a `LocatorApi` implementor is expected; the free functions
/// in this module delegate to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Global;

impl LocatorApi for Global {
    fn storage(&self) -> &LocatorStorage {
        &STORAGE
    }
}

/// The process-wide locator.
pub const GLOBAL: Global = Global;

/// Register a service in the global locator.
pub fn register<T: Send + Sync + 'static>(value: T) {
    GLOBAL.register(value)
}

/// Register an `Arc`-wrapped service, possibly a trait object, in the global locator.
pub fn register_arc<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) {
    GLOBAL.register_arc(value)
}

/// Resolve a service from the global locator; `None` on a miss.
pub fn resolve<T: ?Sized + Send + Sync + 'static>() -> Option<Arc<T>> {
    GLOBAL.resolve()
}

/// Resolve a service from the global locator, reporting a miss as an error.
pub fn try_resolve<T: ?Sized + Send + Sync + 'static>() -> Result<Arc<T>> {
    GLOBAL.try_resolve()
}

pub fn resolve_cloned<T: Send + Sync + Clone + 'static>() -> Option<T> {
    GLOBAL.resolve_cloned()
}

pub fn contains<T: ?Sized + Send + Sync + 'static>() -> bool {
    GLOBAL.contains::<T>()
}

pub fn len() -> usize {
    GLOBAL.len()
}

pub fn is_empty() -> bool {
    GLOBAL.is_empty()
}

/// Remove every service from the global locator.
pub fn reset() {
    GLOBAL.reset()
}

pub fn set_trace_callback(callback: impl Fn(&LocatorEvent) + Send + Sync + 'static) {
    GLOBAL.set_trace_callback(callback)
}

pub fn clear_trace_callback() {
    GLOBAL.clear_trace_callback()
}
