//! Struct tags.
//!
//! Every declared field may carry a set of `key = "value"` tags, the Rust
//! counterpart of Go-style struct tags. Tags are opaque strings here; each
//! consumer parses the keys it owns.

/// Tag key holding the wire (serialized) field name.
pub const WIRE_TAG: &str = "wire";

/// Ordered tag set of one declared field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    entries: Vec<(&'static str, &'static str)>,
}

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag. A repeated key shadows the earlier one.
    pub fn insert(&mut self, key: &'static str, value: &'static str) {
        self.entries.push((key, value));
    }

    /// Get the raw tag for `key`, or `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Wire name used when a field carries no wire tag.
pub fn default_wire_name(declared: &str) -> String {
    declared.to_lowercase()
}

/// Field metadata following the wire tag convention.
///
/// `name` or `name,opts...` sets the wire name; an empty name or `-` marks
/// the field as skipped; an absent tag derives the name from the declared one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireMeta {
    /// Name of the field once rendered for the document store.
    pub wire_name: String,
    /// Field is excluded from mutation and rendering.
    pub skip: bool,
    /// Wire name was given explicitly by the tag.
    pub explicit: bool,
}

impl WireMeta {
    pub fn parse(tag: Option<&str>, declared: &str) -> Self {
        let Some(tag) = tag else {
            return Self {
                wire_name: default_wire_name(declared),
                skip: false,
                explicit: false,
            };
        };

        let name = tag.split(',').next().unwrap_or("").trim();
        if name.is_empty() || name == "-" {
            return Self {
                wire_name: String::new(),
                skip: true,
                explicit: false,
            };
        }

        Self {
            wire_name: name.to_string(),
            skip: false,
            explicit: true,
        }
    }
}
