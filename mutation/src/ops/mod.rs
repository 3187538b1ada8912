//! Built-in mutation kinds.
//!
//! Each kind (set, inc, push) is implemented in its own module.

mod inc;
mod push;
mod set;

pub use inc::IncMutation;
pub use push::PushMutation;
pub use set::SetMutation;

use docshape_core::WireValue;

use crate::error::{MutationError, MutationResult};
use crate::kind::MutationData;

/// Render the mutation value for the wire.
fn wire_value(data: &MutationData<'_>) -> MutationResult<WireValue> {
    data.value
        .to_wire()
        .map_err(|e| MutationError::serialization(data.field_name, e))
}
