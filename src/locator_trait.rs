//! Core trait defining locator behavior.
//!
//! This module provides the `LocatorApi` trait with default implementations for
//! type-keyed registration, resolution, reset, and tracing of shared services.
//!
//! The locator is keyed by type: each `TypeId` holds at most one service.
//! Registering a service under a type that is already present replaces it.

use std::any::{type_name, TypeId};
use std::sync::Arc;

use crate::{LocatorError, LocatorEvent, LocatorStorage, Result};

/// Core trait defining locator behavior.
///
/// Every operation has a default implementation; implementors only provide
/// access to a [`LocatorStorage`]. The crate implements it for
/// [`ServiceLocator`](crate::ServiceLocator) and for the process-wide
/// [`Global`](crate::global::Global), and an application context that owns a
/// `LocatorStorage` can implement it too.
pub trait LocatorApi {
    /// Access the backing storage.
    fn storage(&self) -> &LocatorStorage;

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Install an observer for locator operations, replacing any previous one.
    ///
    /// The callback runs after the service map lock has been released, so it
    /// may call back into the same locator.
    fn set_trace_callback(&self, callback: impl Fn(&LocatorEvent) + Send + Sync + 'static) {
        self.storage().set_trace(Some(Arc::new(callback)));
    }

    /// Remove the observer. Registered services are untouched.
    fn clear_trace_callback(&self) {
        self.storage().set_trace(None);
    }

    /// Forward `event` to the observer, if one is installed.
    ///
    /// A panic inside the callback propagates to the caller.
    fn emit_event(&self, event: &LocatorEvent) {
        if let Some(callback) = self.storage().trace_callback() {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Locator
    // -------------------------------------------------------------------------------------------------

    /// Register a service, wrapping it in an `Arc`.
    ///
    /// Any service previously registered under `T` is replaced; callers that
    /// already resolved it keep their `Arc`.
    fn register<T: Send + Sync + 'static>(&self, value: T) {
        self.register_arc(Arc::new(value));
    }

    /// Register an `Arc`-wrapped service under `T`.
    ///
    /// `T` may be unsized, which is how trait objects are registered:
    ///
    /// ```rust
    /// use service_locator::{LocatorApi, ServiceLocator};
    /// use std::sync::Arc;
    ///
    /// trait Logger: Send + Sync {
    ///     fn name(&self) -> &'static str;
    /// }
    ///
    /// struct ConsoleLogger;
    ///
    /// impl Logger for ConsoleLogger {
    ///     fn name(&self) -> &'static str {
    ///         "console"
    ///     }
    /// }
    ///
    /// let locator = ServiceLocator::new();
    /// locator.register_arc::<dyn Logger>(Arc::new(ConsoleLogger));
    ///
    /// let logger = locator.resolve::<dyn Logger>().unwrap();
    /// assert_eq!(logger.name(), "console");
    /// ```
    fn register_arc<T: ?Sized + Send + Sync + 'static>(&self, value: Arc<T>) {
        let type_name = type_name::<T>();
        let displaced = self.storage().insert(TypeId::of::<T>(), Box::new(value));
        let replaced = displaced.is_some();
        drop(displaced);

        tracing::debug!(type_name, replaced, "service registered");
        self.emit_event(&LocatorEvent::Register {
            type_name,
            replaced,
        });
    }

    /// Resolve the service registered under `T`.
    ///
    /// Returns the registered `Arc` itself (not a copy of the service), or
    /// `None` when nothing is registered. A stored value that fails the
    /// checked downcast is logged and also yields `None`; use
    /// [`try_resolve`](Self::try_resolve) to observe it as an error.
    fn resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        match self.try_resolve::<T>() {
            Ok(service) => Some(service),
            Err(LocatorError::NotRegistered { .. }) => None,
            Err(err) => {
                tracing::error!(%err, "registered service failed its type check");
                None
            }
        }
    }

    /// Resolve the service registered under `T`, reporting a miss as an error.
    ///
    /// # Errors
    ///
    /// - [`LocatorError::NotRegistered`] if nothing is registered under `T`
    /// - [`LocatorError::TypeMismatch`] if the stored value is not an `Arc<T>`
    fn try_resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        let result = self.storage().get::<T>();
        let type_name = type_name::<T>();
        let found = result.is_ok();

        tracing::trace!(type_name, found, "service resolved");
        self.emit_event(&LocatorEvent::Resolve { type_name, found });

        result
    }

    /// Resolve an owned clone of the service registered under `T`.
    fn resolve_cloned<T: Send + Sync + Clone + 'static>(&self) -> Option<T> {
        self.resolve::<T>().map(|service| (*service).clone())
    }

    /// Check whether a service is registered under `T`.
    fn contains<T: ?Sized + Send + Sync + 'static>(&self) -> bool {
        let type_name = type_name::<T>();
        let found = self.storage().contains_key(TypeId::of::<T>());

        tracing::trace!(type_name, found, "service lookup");
        self.emit_event(&LocatorEvent::Contains { type_name, found });

        found
    }

    /// Number of registered services.
    fn len(&self) -> usize {
        self.storage().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every registered service.
    ///
    /// Already-resolved `Arc`s stay valid, and the trace callback is kept.
    /// Resetting an empty locator is a no-op apart from the emitted event.
    fn reset(&self) {
        let removed = self.storage().clear();

        tracing::debug!(removed, "locator reset");
        self.emit_event(&LocatorEvent::Reset { removed });
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
