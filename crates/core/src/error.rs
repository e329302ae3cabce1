#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request conflicts with the entity's current state.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<crate::validation::ValidationError> for CoreError {
    fn from(err: crate::validation::ValidationError) -> Self {
        CoreError::Validation(err.message().to_string())
    }
}
