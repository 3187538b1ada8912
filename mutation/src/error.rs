//! Mutation error types.

use docshape_core::NumberKind;
use docshape_registry::ShapeError;
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur while applying or rendering a mutation.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Field {field} is not available in target of type {type_name}")]
    UnknownTargetField { type_name: String, field: String },

    #[error("Mutation {kind} is not registered (field {field})")]
    UnknownMutationKind { kind: String, field: String },

    #[error("Registered mutation {kind} cannot {capability} (field {field})")]
    MissingCapability {
        kind: String,
        field: String,
        capability: String,
    },

    #[error("Field {field} of type {type_name} is excluded from mutation")]
    SkippedTargetField { type_name: String, field: String },

    #[error("Wire field {field} of type {type_name} is targeted by more than one mutation field")]
    ConflictingWireField { type_name: String, field: String },

    #[error("Mutation {kind} on field {field} needs numbers, got {actual}")]
    NotNumeric {
        kind: String,
        field: String,
        actual: String,
    },

    #[error("Numbers in mutation and field {field} have different kinds: {target} and {value}")]
    NumericKindMismatch {
        field: String,
        target: NumberKind,
        value: NumberKind,
    },

    #[error("Numeric overflow on field {field} ({type_name})")]
    NumericOverflow { field: String, type_name: String },

    #[error("Mutation {kind} target field {field} is not a sequence: {actual}")]
    NotSequence {
        kind: String,
        field: String,
        actual: String,
    },

    #[error("Element of type {actual} is not compatible with sequence of {expected} (field {field})")]
    IncompatibleElement {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid value type for field {field}: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Cannot render value for field {field}: {source}")]
    Serialization {
        field: String,
        #[source]
        source: serde_json::Error,
    },
}

impl MutationError {
    pub fn unknown_target_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownTargetField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    pub fn unknown_mutation_kind(kind: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownMutationKind {
            kind: kind.into(),
            field: field.into(),
        }
    }

    pub fn missing_capability(
        kind: impl Into<String>,
        field: impl Into<String>,
        capability: impl Into<String>,
    ) -> Self {
        Self::MissingCapability {
            kind: kind.into(),
            field: field.into(),
            capability: capability.into(),
        }
    }

    pub fn skipped_target_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::SkippedTargetField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    pub fn conflicting_wire_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ConflictingWireField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    pub fn not_numeric(
        kind: impl Into<String>,
        field: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::NotNumeric {
            kind: kind.into(),
            field: field.into(),
            actual: actual.into(),
        }
    }

    pub fn numeric_kind_mismatch(
        field: impl Into<String>,
        target: NumberKind,
        value: NumberKind,
    ) -> Self {
        Self::NumericKindMismatch {
            field: field.into(),
            target,
            value,
        }
    }

    pub fn numeric_overflow(field: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::NumericOverflow {
            field: field.into(),
            type_name: type_name.into(),
        }
    }

    pub fn not_sequence(
        kind: impl Into<String>,
        field: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::NotSequence {
            kind: kind.into(),
            field: field.into(),
            actual: actual.into(),
        }
    }

    pub fn incompatible_element(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::IncompatibleElement {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn serialization(field: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            field: field.into(),
            source,
        }
    }
}
