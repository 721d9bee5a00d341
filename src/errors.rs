use sea_orm::error::DbErr;

/// Errors surfaced by the model layer.
///
/// Finder misses are not errors: queries that match nothing return an empty
/// result or `None`. Everything here propagates unchanged to the caller so an
/// outer layer can decide the user-visible response.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The backing store rejected a statement (constraint or connectivity
    /// failure). Propagated, never retried, at this layer.
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    /// An update or delete named a row that no longer exists.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A field failed validation, a serialized record was malformed, or a
    /// lifecycle transition was illegal (create on a persisted product,
    /// update on a transient one).
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}
