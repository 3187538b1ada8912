//! docshape Mutation
//!
//! Apply declarative mutation structs to targets, or render them as
//! partial-update documents for a document store.
//!
//! Responsibilities:
//! - Parse mutation and target field tags
//! - Resolve each mutation field to a target field and a mutation kind
//! - Apply kinds in memory or render them per update operator
//!
//! # Module Structure
//!
//! - `engine` - MutationEngine and its builder; the shared dispatch loop
//! - `kind` - Mutation kind capability traits
//! - `registry` - Name to mutation kind mapping
//! - `ops/` - Built-in kinds (set, inc, push)
//! - `meta` - Mutation and target field metadata
//! - `document` - Update document produced by rendering
//! - `config` - Engine configuration
//! - `error` - Error types for mutation failures

mod config;
mod document;
mod engine;
mod error;
mod kind;
mod meta;
mod ops;
mod registry;

pub use config::EngineConfig;
pub use document::UpdateDocument;
pub use engine::{MutationEngine, MutationEngineBuilder};
pub use error::{MutationError, MutationResult};
pub use kind::{ApplyMutation, MutationData, MutationKind, RenderData, RenderMutation, WireFragment};
pub use meta::{MutationArgs, MutationMeta, TargetMeta};
pub use ops::{IncMutation, PushMutation, SetMutation};
pub use registry::{MutationRegistry, INC, PUSH, SET};
