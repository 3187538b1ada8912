//! docshape Query
//!
//! Build read-side documents for a document store.
//!
//! Responsibilities:
//! - Render boolean/comparison query trees into filter documents
//! - Validate caller orderings against alias schemas and map them to storage
//!   names
//! - Clamp pagination

mod error;
mod order;
mod pagination;
mod query;
mod render;
mod schema;

pub use error::{QueryError, QueryResult};
pub use order::{OrderField, OrderFields};
pub use pagination::{Pagination, PaginationConfig};
pub use query::{Condition, Query, RenderQuery};
pub use render::QueryRenderer;
pub use schema::{OrderSchema, OrderSchemaFactory, ORDER_TAG};
