//! push - appends to a sequence target field.

use docshape_core::{FieldValue, WireValue};
use serde_json::Map;

use crate::error::{MutationError, MutationResult};
use crate::kind::{ApplyMutation, MutationData, MutationKind, RenderData, RenderMutation, WireFragment};

/// Appends one element, or every element of a sequence or fixed array of the
/// element type.
///
/// Rendered fragments always use the batch form `{"$each": [...]}`. Whether
/// the value is one element or a batch of them is decided against the target
/// field's element type, the same way apply decides it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PushMutation;

impl MutationKind for PushMutation {
    fn applier(&self) -> Option<&dyn ApplyMutation> {
        Some(self)
    }

    fn renderer(&self) -> Option<&dyn RenderMutation> {
        Some(self)
    }
}

impl ApplyMutation for PushMutation {
    fn apply(&self, target: &mut dyn FieldValue, data: &MutationData<'_>) -> MutationResult<()> {
        let target_label = target.type_label();
        let sequence = target.sequence_mut().ok_or_else(|| {
            MutationError::not_sequence(data.kind_name, data.field_name, target_label)
        })?;

        if data.value.value_type() == sequence.element_type() {
            sequence.append(data.value);
            return Ok(());
        }

        if let Some(elements) = data.value.elements() {
            if elements.element_type() == sequence.element_type() {
                for item in elements.items() {
                    sequence.append(*item);
                }
                return Ok(());
            }
        }

        Err(MutationError::incompatible_element(
            data.field_name,
            sequence.element_label(),
            data.value.type_label(),
        ))
    }
}

impl RenderMutation for PushMutation {
    fn operator(&self) -> &str {
        "$push"
    }

    fn render(&self, data: &RenderData<'_>) -> MutationResult<WireFragment> {
        let mutation = &data.data;
        let element = data.target_type.element.ok_or_else(|| {
            MutationError::not_sequence(
                mutation.kind_name,
                mutation.field_name,
                data.target_type.label,
            )
        })?;

        let each = if mutation.value.value_type() == element.id {
            WireValue::Array(vec![super::wire_value(mutation)?])
        } else {
            match mutation.value.elements() {
                Some(elements) if elements.element_type() == element.id => {
                    super::wire_value(mutation)?
                }
                _ => {
                    return Err(MutationError::incompatible_element(
                        mutation.field_name,
                        element.label,
                        mutation.value.type_label(),
                    ))
                }
            }
        };

        let mut batch = Map::new();
        batch.insert("$each".to_string(), each);
        Ok(WireFragment::new(data.wire_name, WireValue::Object(batch)))
    }
}
