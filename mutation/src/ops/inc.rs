//! inc - adds a number to a numeric target field.

use docshape_core::FieldValue;

use crate::error::{MutationError, MutationResult};
use crate::kind::{ApplyMutation, MutationData, MutationKind, RenderData, RenderMutation, WireFragment};

/// Increments a numeric field.
///
/// Target and value must be numbers of the same kind (signed, unsigned or
/// float); the widths may differ. Integer sums that overflow or do not fit
/// the target type are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncMutation;

impl MutationKind for IncMutation {
    fn applier(&self) -> Option<&dyn ApplyMutation> {
        Some(self)
    }

    fn renderer(&self) -> Option<&dyn RenderMutation> {
        Some(self)
    }
}

impl ApplyMutation for IncMutation {
    fn apply(&self, target: &mut dyn FieldValue, data: &MutationData<'_>) -> MutationResult<()> {
        let current = target.number().ok_or_else(|| {
            MutationError::not_numeric(data.kind_name, data.field_name, target.type_label())
        })?;
        let delta = data.value.number().ok_or_else(|| {
            MutationError::not_numeric(data.kind_name, data.field_name, data.value.type_label())
        })?;

        if current.kind() != delta.kind() {
            return Err(MutationError::numeric_kind_mismatch(
                data.field_name,
                current.kind(),
                delta.kind(),
            ));
        }

        let target_label = target.type_label();
        let overflow = || MutationError::numeric_overflow(data.field_name, target_label);
        let sum = current.checked_add(delta).ok_or_else(overflow)?;
        if !target.store_number(sum) {
            return Err(overflow());
        }
        Ok(())
    }
}

impl RenderMutation for IncMutation {
    fn operator(&self) -> &str {
        "$inc"
    }

    fn render(&self, data: &RenderData<'_>) -> MutationResult<WireFragment> {
        Ok(WireFragment::new(data.wire_name, super::wire_value(&data.data)?))
    }
}
