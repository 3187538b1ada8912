//! Field metadata for mutation and target descriptors.
//!
//! Mutation fields are tagged `targetField,kind,arg1[:val1],arg2[:val2],...`;
//! any prefix may be omitted. Target fields follow the wire tag convention
//! (see [`WireMeta`]).

use std::collections::HashMap;

use docshape_core::WireMeta;
use docshape_registry::{FieldOptions, PendingField, ShapeResult};

use crate::config::EngineConfig;

/// Metadata of a target descriptor field.
pub type TargetMeta = WireMeta;

/// Multi-valued mutation arguments. A key that is absent is "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationArgs {
    values: HashMap<String, Vec<String>>,
}

impl MutationArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// First value of `key`, or `""` when not set.
    pub fn first(&self, key: &str) -> &str {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All values of `key` in tag order.
    pub fn values(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Metadata of a mutation descriptor field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationMeta {
    /// Logical name of the target field this field mutates.
    pub target_field: String,
    /// Registered mutation kind; empty means `set`.
    pub kind: String,
    pub args: MutationArgs,
}

impl MutationMeta {
    /// Parse a mutation tag. Never fails; missing segments stay empty.
    pub fn parse(tag: &str) -> Self {
        let mut segments = tag.split(',');
        let target_field = segments.next().unwrap_or("").to_string();
        let kind = segments.next().unwrap_or("").to_string();

        let mut args = MutationArgs::new();
        for segment in segments {
            match segment.split_once(':') {
                Some((key, value)) => args.add(key, value),
                None => args.add(segment, ""),
            }
        }

        Self {
            target_field,
            kind,
            args,
        }
    }

    /// Tag names a target field or a kind explicitly.
    pub fn is_explicit(&self) -> bool {
        !self.target_field.is_empty() || !self.kind.is_empty()
    }
}

/// Classifier for mutation types.
///
/// A field tagged with target `-` is skipped. Anonymous struct fields whose
/// tag names neither a target nor a kind are embedded.
pub(crate) fn classify_mutation(
    config: &EngineConfig,
    field: &PendingField,
) -> ShapeResult<FieldOptions<MutationMeta>> {
    let mut meta = MutationMeta::parse(field.tags.get(&config.mutation_tag).unwrap_or(""));
    let skip = meta.target_field == "-";
    let embed = field.is_embeddable() && !meta.is_explicit();

    if meta.target_field.is_empty() {
        meta.target_field = field.name.to_string();
    }

    Ok(FieldOptions::new(field.name, meta).skip(skip).embed(embed && !skip))
}

/// Classifier for target types.
///
/// Skipped fields stay registered so a mutation addressing them is reported
/// rather than silently dropped.
pub(crate) fn classify_target(
    config: &EngineConfig,
    field: &PendingField,
) -> ShapeResult<FieldOptions<TargetMeta>> {
    let meta = TargetMeta::parse(field.tags.get(&config.target_tag), field.name);
    let embed = field.is_embeddable() && !meta.explicit && !meta.skip;

    Ok(FieldOptions::new(field.name, meta).embed(embed))
}
