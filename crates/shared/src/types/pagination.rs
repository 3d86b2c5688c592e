//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size when the client does not pass `limit`.
pub const DEFAULT_LIMIT: u64 = 10;

/// Upper bound on `limit` unless configured otherwise.
pub const MAX_LIMIT: u64 = 1000;

/// Largest offset handed to the database, `i64::MAX`.
pub const MAX_OFFSET: u64 = i64::MAX.unsigned_abs();

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageRequest {
    /// Creates a request, clamping `page` to at least 1 and `limit` to `1..=max_limit`.
    #[must_use]
    pub fn new(page: u64, limit: u64, max_limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, max_limit.max(1)),
        }
    }

    /// Calculates the offset for database queries.
    ///
    /// Capped at [`MAX_OFFSET`], so pages past the end stay representable as
    /// a SQL `OFFSET`.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(MAX_OFFSET)
    }
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Current page number.
    pub current_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Items per page.
    pub items_per_page: u64,
}

impl PageMeta {
    /// Builds pagination metadata for a request and a total item count.
    #[must_use]
    pub fn new(request: PageRequest, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(request.limit.max(1))
        };

        Self {
            current_page: request.page,
            total_pages,
            total_items,
            items_per_page: request.limit,
        }
    }
}
