//! # Service Locator
//!
//! A thread-safe, type-keyed service locator: one shared instance per type,
//! with register, resolve and reset.
//!
//! Services are stored as `Arc<T>` and handed back as the same `Arc`, never
//! copied. `T` may be a trait object, so a service can be looked up by the
//! interface it implements.
//!
//! ## Quick Start
//!
//! ```rust
//! use service_locator::{LocatorApi, ServiceLocator};
//! use std::sync::Arc;
//!
//! trait Logger: Send + Sync {
//!     fn target(&self) -> &'static str;
//! }
//!
//! struct ConsoleLogger;
//! struct FileLogger;
//!
//! impl Logger for ConsoleLogger {
//!     fn target(&self) -> &'static str { "console" }
//! }
//!
//! impl Logger for FileLogger {
//!     fn target(&self) -> &'static str { "file" }
//! }
//!
//! let locator = ServiceLocator::new();
//!
//! locator.register_arc::<dyn Logger>(Arc::new(ConsoleLogger));
//! assert_eq!(locator.resolve::<dyn Logger>().unwrap().target(), "console");
//!
//! locator.register_arc::<dyn Logger>(Arc::new(FileLogger));
//! assert_eq!(locator.resolve::<dyn Logger>().unwrap().target(), "file");
//!
//! locator.reset();
//! assert!(locator.resolve::<dyn Logger>().is_none());
//! ```
//!
//! ## Surfaces
//!
//! - [`ServiceLocator`] - an explicitly constructed locator to pass around
//! - [`global`] - the process-wide locator and its free functions
//! - [`LocatorApi`] - the operations both share, implementable over any [`LocatorStorage`]
//!
//! ## Logging
//!
//! Operations are recorded through `tracing` (`debug` for register and reset,
//! `trace` for lookups). Installing a subscriber is left to the application.
//! A per-locator observer can additionally be set with
//! [`LocatorApi::set_trace_callback`].

pub mod global;
mod locator;
mod locator_error;
mod locator_event;
mod locator_trait;
mod storage;

pub use locator::ServiceLocator;
pub use locator_error::{LocatorError, Result};
pub use locator_event::LocatorEvent;
pub use locator_trait::LocatorApi;
pub use storage::{LocatorStorage, TraceCallback};
