//! Update documents.

use std::collections::BTreeMap;

use docshape_core::WireValue;
use serde::Serialize;
use serde_json::Map;

use crate::kind::WireFragment;

/// Partial-update document grouped by operator:
/// `{operator: {wire_field: value, ...}, ...}`.
///
/// Fields within an operator keep render order. Operator order carries no
/// meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UpdateDocument {
    operators: BTreeMap<String, Map<String, WireValue>>,
}

impl UpdateDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment to the document of `operator`.
    pub fn insert(&mut self, operator: &str, fragment: WireFragment) {
        self.operators
            .entry(operator.to_string())
            .or_default()
            .insert(fragment.key, fragment.value);
    }

    /// Fields rendered under `operator`.
    pub fn operator(&self, operator: &str) -> Option<&Map<String, WireValue>> {
        self.operators.get(operator)
    }

    pub fn operators(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn into_value(self) -> WireValue {
        WireValue::Object(
            self.operators
                .into_iter()
                .map(|(operator, fields)| (operator, WireValue::Object(fields)))
                .collect(),
        )
    }
}

impl From<UpdateDocument> for WireValue {
    fn from(document: UpdateDocument) -> Self {
        document.into_value()
    }
}
