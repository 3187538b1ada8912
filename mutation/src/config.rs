//! Engine configuration.

use serde::Deserialize;

/// Configuration of a [`MutationEngine`](crate::MutationEngine).
///
/// Deserializable so hosts can load it alongside their own settings; missing
/// keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tag key read for target field metadata.
    pub target_tag: String,
    /// Tag key read for mutation field metadata.
    pub mutation_tag: String,
    /// Mutation argument that skips zero values.
    pub omit_empty_arg: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_tag: docshape_core::WIRE_TAG.to_string(),
            mutation_tag: "mutation".to_string(),
            omit_empty_arg: "omitempty".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_tag(mut self, tag: impl Into<String>) -> Self {
        self.target_tag = tag.into();
        self
    }

    pub fn with_mutation_tag(mut self, tag: impl Into<String>) -> Self {
        self.mutation_tag = tag.into();
        self
    }

    pub fn with_omit_empty_arg(mut self, arg: impl Into<String>) -> Self {
        self.omit_empty_arg = arg.into();
        self
    }
}
