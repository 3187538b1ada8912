//! docshape integration test framework.
//!
//! Scenarios run mutation structs against a live target step by step and
//! check the target snapshot, the rendered update document, or the error of
//! each step.
//!
//! ```ignore
//! use docshape_tests::prelude::*;
//!
//! Scenario::new("inc", Data { number: 31, ..Default::default() })
//!     .apply_and_render("inc_number", IncNumber { number: 11 }, |a| {
//!         a.field("number", json!(42))
//!             .document(json!({"$inc": {"number": 11}}))
//!     })
//!     .run()
//!     .unwrap();
//! ```

mod error;
pub mod fixtures;

pub use assertion::{Assertion, AssertionBuilder, StepOutcome};
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{Scenario, Step};

/// Install a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::{init_tracing, AssertionBuilder, Scenario, ScenarioError, StepOutcome};
    pub use docshape_core::{field_value, shape, FieldValue, Shape};
    pub use docshape_mutation::{
        EngineConfig, MutationEngine, MutationError, MutationKind, UpdateDocument,
    };
    pub use serde_json::json;
}
