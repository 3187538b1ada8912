//! docshape Core Types
//!
//! This crate provides the foundational types used throughout docshape:
//! - Field values (the `FieldValue` capability trait, numbers, sequences)
//! - Struct shapes (the `Shape` trait, `FieldSpec` accessors, the `shape!` macro)
//! - Struct tags and the wire tag convention

mod shape;
mod tags;
mod value;

pub use shape::*;
pub use tags::*;
pub use value::*;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
