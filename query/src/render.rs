//! Query renderer - turns a query tree into a filter document.

use docshape_core::WireValue;
use serde_json::{json, Map};
use tracing::trace;

use crate::error::{QueryError, QueryResult};
use crate::query::Query;

/// Renders [`Query`] trees by structural recursion.
///
/// Comparisons render as `{field: {"$op": value}}`, negation as
/// `{"$nor": [child]}`. Children that render to nothing are dropped from
/// conjunctions and disjunctions.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryRenderer;

impl QueryRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a filter document. A query imposing no constraint renders as
    /// the empty document.
    pub fn render(&self, query: &Query) -> QueryResult<WireValue> {
        Ok(self
            .render_node(query)?
            .unwrap_or_else(|| WireValue::Object(Map::new())))
    }

    /// Render one node, `None` when it imposes no constraint.
    pub fn render_node(&self, query: &Query) -> QueryResult<Option<WireValue>> {
        match query {
            Query::And(children) => {
                let rendered = self.render_children(children)?;
                if rendered.is_empty() {
                    trace!("empty conjunction dropped");
                    return Ok(None);
                }
                Ok(Some(json!({ "$and": rendered })))
            }
            Query::Or(children) => {
                let rendered = self.render_children(children)?;
                if rendered.is_empty() {
                    return Err(QueryError::render("disjunction has no renderable branch"));
                }
                Ok(Some(json!({ "$or": rendered })))
            }
            Query::Not(child) => match self.render_node(child)? {
                Some(rendered) => Ok(Some(json!({ "$nor": [rendered] }))),
                None => Err(QueryError::render("negated query imposes no constraint")),
            },
            Query::Custom(node) => node.render(),
            comparison => match comparison.comparison() {
                Some((op, condition)) => {
                    let mut inner = Map::new();
                    inner.insert(op.to_string(), condition.value.clone());
                    let mut outer = Map::new();
                    outer.insert(condition.field.clone(), WireValue::Object(inner));
                    Ok(Some(WireValue::Object(outer)))
                }
                None => Err(QueryError::render(format!("unsupported query node {comparison:?}"))),
            },
        }
    }

    fn render_children(&self, children: &[Query]) -> QueryResult<Vec<WireValue>> {
        let mut rendered = Vec::with_capacity(children.len());
        for child in children {
            if let Some(value) = self.render_node(child)? {
                rendered.push(value);
            }
        }
        Ok(rendered)
    }
}
