//! Mutation kind capabilities.
//!
//! A mutation kind is a named, stateless behavior. It may know how to apply
//! itself to a target field in memory, how to render itself as a fragment
//! of an update document, or both.

use docshape_core::{FieldValue, ValueType, WireValue};

use crate::error::MutationResult;
use crate::meta::MutationArgs;

/// Input handed to a mutation kind for one mutation field.
#[derive(Debug, Clone, Copy)]
pub struct MutationData<'a> {
    /// Value read from the mutation field.
    pub value: &'a dyn FieldValue,
    pub args: &'a MutationArgs,
    /// Logical name of the target field.
    pub field_name: &'a str,
    /// Name the kind was registered under.
    pub kind_name: &'a str,
}

/// [`MutationData`] plus what is known of the target field without a
/// target value.
#[derive(Debug, Clone, Copy)]
pub struct RenderData<'a> {
    pub data: MutationData<'a>,
    pub wire_name: &'a str,
    pub target_type: ValueType,
}

/// One `wire_field: value` entry of an operator document.
#[derive(Debug, Clone, PartialEq)]
pub struct WireFragment {
    pub key: String,
    pub value: WireValue,
}

impl WireFragment {
    pub fn new(key: impl Into<String>, value: WireValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Applies a mutation to a live target field.
pub trait ApplyMutation: Send + Sync {
    fn apply(&self, target: &mut dyn FieldValue, data: &MutationData<'_>) -> MutationResult<()>;
}

/// Renders a mutation as an update document fragment.
pub trait RenderMutation: Send + Sync {
    /// Update operator the fragment is grouped under, e.g. `$set`.
    fn operator(&self) -> &str;

    fn render(&self, data: &RenderData<'_>) -> MutationResult<WireFragment>;
}

/// A registered mutation kind and the capabilities it supports.
pub trait MutationKind: Send + Sync {
    fn applier(&self) -> Option<&dyn ApplyMutation> {
        None
    }

    fn renderer(&self) -> Option<&dyn RenderMutation> {
        None
    }
}
