use std::any::type_name;

/// Errors surfaced by the checked resolve path.
///
/// The plain [`resolve`](crate::LocatorApi::resolve) path never returns these;
/// a miss there is simply `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocatorError {
    /// No service is registered under the requested type.
    #[error("service not registered: {type_name}")]
    NotRegistered { type_name: &'static str },

    /// The stored service could not be downcast to the requested type.
    #[error("service type mismatch: {type_name}")]
    TypeMismatch { type_name: &'static str },
}

impl LocatorError {
    pub(crate) fn not_registered<T: ?Sized + 'static>() -> Self {
        LocatorError::NotRegistered {
            type_name: type_name::<T>(),
        }
    }

    pub(crate) fn type_mismatch<T: ?Sized + 'static>() -> Self {
        LocatorError::TypeMismatch {
            type_name: type_name::<T>(),
        }
    }

    /// The name of the service type the failed lookup asked for.
    pub fn type_name(&self) -> &'static str {
        match self {
            LocatorError::NotRegistered { type_name } | LocatorError::TypeMismatch { type_name } => {
                *type_name
            }
        }
    }
}

/// Result type for checked locator operations.
pub type Result<T, E = LocatorError> = std::result::Result<T, E>;
