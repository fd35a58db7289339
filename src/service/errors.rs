//! Service error types

use thiserror::Error;

use crate::store::StoreError;
use crate::validation::Violation;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Typed outcomes a caller must handle besides success.
///
/// Not-found is expressed as `Ok(None)` / `Ok(false)`, not as an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The DTO broke one or more constraints; nothing was written
    #[error("Validation failed: {} violation(s)", .0.len())]
    ValidationFailed(Vec<Violation>),

    /// The store could not complete the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Violations carried by a validation failure, if any.
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            Self::ValidationFailed(v) => Some(v),
            Self::Store(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = ServiceError::ValidationFailed(vec![
            Violation::new("beerName", "must not be blank"),
            Violation::new("price", "must not be null"),
        ]);
        assert_eq!(err.to_string(), "Validation failed: 2 violation(s)");
        assert_eq!(err.violations().map(<[Violation]>::len), Some(2));
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err = ServiceError::from(StoreError::unavailable("down"));
        assert_eq!(err.to_string(), "Store unavailable: down");
        assert!(err.violations().is_none());
    }
}
