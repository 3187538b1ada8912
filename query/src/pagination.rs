//! Pagination.

use serde::{Deserialize, Serialize};

/// Offset/limit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: u32,
    pub limit: u32,
}

impl Pagination {
    /// Everything from the start.
    pub const NO_LIMIT: Pagination = Pagination {
        offset: 0,
        limit: u32::MAX,
    };

    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// Copy with the limit lowered to at most `max_limit`.
    pub fn with_max_limit(self, max_limit: u32) -> Self {
        Self {
            limit: self.limit.min(max_limit),
            ..self
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.limit == u32::MAX
    }
}

/// Pagination ceiling applied to caller supplied pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { max_limit: 100 }
    }
}

impl PaginationConfig {
    pub fn with_max_limit(max_limit: u32) -> Self {
        Self { max_limit }
    }

    pub fn clamp(&self, pagination: Pagination) -> Pagination {
        pagination.with_max_limit(self.max_limit)
    }
}
