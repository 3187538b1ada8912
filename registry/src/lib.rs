//! docshape Registry
//!
//! Runtime type descriptors. A descriptor maps the logical field names of one
//! `Shape` to field accessors plus metadata produced by a field classifier.
//! Descriptors are computed once per type and cached by the owning
//! `DescriptorComputer`.

mod error;
mod registry;
mod types;

pub use error::{ShapeError, ShapeResult};
pub use registry::DescriptorComputer;
pub use types::*;
