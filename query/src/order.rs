//! Ordering value objects.
//!
//! Text form is a space separated list of tokens, `+name` ascending and
//! `-name` descending, read and written the same way.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::error::QueryError;
use docshape_core::WireValue;

/// One field of an ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderField {
    pub name: String,
    pub descending: bool,
}

impl OrderField {
    pub fn asc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descending: false,
        }
    }

    pub fn desc(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descending: true,
        }
    }
}

impl FromStr for OrderField {
    type Err = QueryError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let Some(name) = token.strip_prefix('+') {
            return Ok(OrderField::asc(name));
        }
        if let Some(name) = token.strip_prefix('-') {
            return Ok(OrderField::desc(name));
        }
        Err(QueryError::invalid_order_token(token))
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.descending { '-' } else { '+' };
        write!(f, "{}{}", sign, self.name)
    }
}

/// An ordering: fields in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderFields(pub Vec<OrderField>);

impl OrderFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: OrderField) {
        self.0.push(field);
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderField> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sort document `{name: 1 | -1, ...}` in ordering priority.
    pub fn sort_document(&self) -> WireValue {
        let mut document = Map::new();
        for field in &self.0 {
            let direction = if field.descending { -1 } else { 1 };
            document.insert(field.name.clone(), WireValue::from(direction));
        }
        WireValue::Object(document)
    }
}

impl FromStr for OrderFields {
    type Err = QueryError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.split_whitespace().map(OrderField::from_str).collect()
    }
}

impl fmt::Display for OrderFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}

impl From<Vec<OrderField>> for OrderFields {
    fn from(fields: Vec<OrderField>) -> Self {
        Self(fields)
    }
}

impl FromIterator<OrderField> for OrderFields {
    fn from_iter<I: IntoIterator<Item = OrderField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for OrderFields {
    type Item = OrderField;
    type IntoIter = std::vec::IntoIter<OrderField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderFields {
    type Item = &'a OrderField;
    type IntoIter = std::slice::Iter<'a, OrderField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
