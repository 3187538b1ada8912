//! Query tree.

use std::fmt;
use std::sync::Arc;

use docshape_core::WireValue;

use crate::error::QueryResult;

/// A `field` compared against a `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub value: WireValue,
}

impl Condition {
    pub fn new(field: impl Into<String>, value: impl Into<WireValue>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A node that renders itself into a filter document.
pub trait RenderQuery: Send + Sync + fmt::Debug {
    /// Rendered filter, or `None` when the node imposes no constraint.
    fn render(&self) -> QueryResult<Option<WireValue>>;
}

/// Boolean and comparison query nodes.
#[derive(Debug, Clone)]
pub enum Query {
    And(Vec<Query>),
    Or(Vec<Query>),
    Not(Box<Query>),
    Eq(Condition),
    Ne(Condition),
    Lt(Condition),
    Lte(Condition),
    Gt(Condition),
    Gte(Condition),
    /// Escape hatch for nodes outside the closed set.
    Custom(Arc<dyn RenderQuery>),
}

impl Query {
    pub fn and(queries: impl IntoIterator<Item = Query>) -> Self {
        Query::And(queries.into_iter().collect())
    }

    pub fn or(queries: impl IntoIterator<Item = Query>) -> Self {
        Query::Or(queries.into_iter().collect())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(query: Query) -> Self {
        Query::Not(Box::new(query))
    }

    pub fn eq(field: impl Into<String>, value: impl Into<WireValue>) -> Self {
        Query::Eq(Condition::new(field, value))
    }

    pub fn ne(field: impl Into<String>, value: impl Into<WireValue>) -> Self {
        Query::Ne(Condition::new(field, value))
    }

    pub fn lt(field: impl Into<String>, value: impl Into<WireValue>) -> Self {
        Query::Lt(Condition::new(field, value))
    }

    pub fn lte(field: impl Into<String>, value: impl Into<WireValue>) -> Self {
        Query::Lte(Condition::new(field, value))
    }

    pub fn gt(field: impl Into<String>, value: impl Into<WireValue>) -> Self {
        Query::Gt(Condition::new(field, value))
    }

    pub fn gte(field: impl Into<String>, value: impl Into<WireValue>) -> Self {
        Query::Gte(Condition::new(field, value))
    }

    pub fn custom(node: impl RenderQuery + 'static) -> Self {
        Query::Custom(Arc::new(node))
    }

    /// Comparison operator and condition, for comparison nodes.
    pub fn comparison(&self) -> Option<(&'static str, &Condition)> {
        match self {
            Query::Eq(c) => Some(("$eq", c)),
            Query::Ne(c) => Some(("$ne", c)),
            Query::Lt(c) => Some(("$lt", c)),
            Query::Lte(c) => Some(("$lte", c)),
            Query::Gt(c) => Some(("$gt", c)),
            Query::Gte(c) => Some(("$gte", c)),
            _ => None,
        }
    }
}
