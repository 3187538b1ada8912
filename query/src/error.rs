//! Query error types.

use docshape_registry::ShapeError;
use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while rendering queries or validating orderings.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Cannot render query: {message}")]
    Render { message: String },

    #[error("Invalid order field: {field}")]
    InvalidOrderFields { field: String },

    #[error("Order field {field} was found twice")]
    FieldTwice { field: String },

    #[error("Order token {token:?} must start with '+' (ascending) or '-' (descending)")]
    InvalidOrderToken { token: String },
}

impl QueryError {
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    pub fn invalid_order_fields(field: impl Into<String>) -> Self {
        Self::InvalidOrderFields {
            field: field.into(),
        }
    }

    pub fn field_twice(field: impl Into<String>) -> Self {
        Self::FieldTwice {
            field: field.into(),
        }
    }

    pub fn invalid_order_token(token: impl Into<String>) -> Self {
        Self::InvalidOrderToken {
            token: token.into(),
        }
    }
}
