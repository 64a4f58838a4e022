use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A request body failed schema validation. `field` names the first
    /// offending field, or is `None` when the body itself has the wrong shape.
    #[error("Validation failed: {message}")]
    Validation {
        field: Option<String>,
        message: String,
    },
}

impl CoreError {
    /// Build a validation error for a named field.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field: Some(field.to_string()),
            message: message.into(),
        }
    }
}
