use crate::resource::FieldViolation;

/// Error taxonomy shared by every component. The api crate owns the
/// translation into HTTP statuses and JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum TravelsError {
    /// Field-level validation failures, surfaced as an array body.
    #[error("validation failed on {} field(s)", .0.len())]
    ValidationFailures(Vec<FieldViolation>),

    /// Request-level failure with a single human-readable message, such as
    /// a search body with no criteria.
    #[error("{0}")]
    RequestShape(String),

    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: i32 },

    #[error("{0}")]
    AlreadyExists(String),

    /// Repository failure, propagated unchanged from the store.
    #[error("repository error: {0}")]
    Repository(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// Programmer error: input that the validator should have rejected
    /// reached a component that assumes well-formed data.
    #[error("internal error: {0}")]
    Internal(String),
}
