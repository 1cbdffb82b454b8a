use std::fmt;

/// Events emitted by a locator during operations.
///
/// These are passed to the observer installed with
/// [`set_trace_callback`](crate::LocatorApi::set_trace_callback). They are
/// independent of the `tracing` records the locator writes.
///
/// # Examples
///
/// ```rust
/// use service_locator::LocatorEvent;
///
/// let event = LocatorEvent::Resolve { type_name: "i32", found: false };
/// assert_eq!(event.to_string(), "resolve { type_name: i32, found: false }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorEvent {
    /// A service was registered.
    Register {
        /// Name of the type the service is keyed under.
        type_name: &'static str,
        /// Whether an earlier service for the same type was replaced.
        replaced: bool,
    },

    /// A service was requested.
    Resolve {
        type_name: &'static str,
        found: bool,
    },

    /// A registration check was performed.
    Contains {
        type_name: &'static str,
        found: bool,
    },

    /// Every service was removed.
    Reset {
        /// Number of entries dropped by the reset.
        removed: usize,
    },
}

impl fmt::Display for LocatorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocatorEvent::Register {
                type_name,
                replaced,
            } => write!(
                f,
                "register {{ type_name: {type_name}, replaced: {replaced} }}"
            ),
            LocatorEvent::Resolve { type_name, found } => {
                write!(f, "resolve {{ type_name: {type_name}, found: {found} }}")
            }
            LocatorEvent::Contains { type_name, found } => {
                write!(f, "contains {{ type_name: {type_name}, found: {found} }}")
            }
            LocatorEvent::Reset { removed } => write!(f, "reset {{ removed: {removed} }}"),
        }
    }
}
