//! Chart series derived from transactions.
//!
//! Everything here sums in memory over the full transaction set. Nothing is
//! persisted.

pub mod service;
pub mod types;

pub use service::{AggregationService, DEFAULT_WINDOW_SIZE};
pub use types::{CategoryTotal, MonthlyTotal, MonthlyWindow};
