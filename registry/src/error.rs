//! Shape error types.

use thiserror::Error;

/// Result type for descriptor computation.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Errors that can occur while computing a type descriptor.
#[derive(Debug, Clone, Error)]
pub enum ShapeError {
    #[error("Cannot classify field {field} of type {type_name}: {message}")]
    Classifier {
        type_name: String,
        field: String,
        message: String,
    },
}

impl ShapeError {
    pub fn classifier(
        type_name: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Classifier {
            type_name: type_name.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}
