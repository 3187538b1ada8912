//! set - overwrites the target field.

use docshape_core::FieldValue;

use crate::error::{MutationError, MutationResult};
use crate::kind::{ApplyMutation, MutationData, MutationKind, RenderData, RenderMutation, WireFragment};

/// Assigns the mutation value. Both sides must have the same type.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetMutation;

impl MutationKind for SetMutation {
    fn applier(&self) -> Option<&dyn ApplyMutation> {
        Some(self)
    }

    fn renderer(&self) -> Option<&dyn RenderMutation> {
        Some(self)
    }
}

impl ApplyMutation for SetMutation {
    fn apply(&self, target: &mut dyn FieldValue, data: &MutationData<'_>) -> MutationResult<()> {
        if target.assign_from(data.value) {
            return Ok(());
        }
        Err(MutationError::type_mismatch(
            data.field_name,
            target.type_label(),
            data.value.type_label(),
        ))
    }
}

impl RenderMutation for SetMutation {
    fn operator(&self) -> &str {
        "$set"
    }

    fn render(&self, data: &RenderData<'_>) -> MutationResult<WireFragment> {
        Ok(WireFragment::new(data.wire_name, super::wire_value(&data.data)?))
    }
}
