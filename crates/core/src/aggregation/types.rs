//! Aggregation result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::month::Month;

/// Total spend in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Month.
    pub month: Month,
    /// Sum of transaction totals dated in the month.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// A fixed-size page over the ascending monthly series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyWindow {
    /// Months in this window, oldest first.
    pub data: Vec<MonthlyTotal>,
    /// 1-based page number.
    pub page: u64,
    /// Months per page.
    pub size: u64,
    /// Length of the full series.
    pub total_months: u64,
    /// True if an older page exists.
    pub has_previous: bool,
    /// True if a newer page exists.
    pub has_next: bool,
}

/// Total spend in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category.
    pub category: Category,
    /// Sum of transaction totals.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}
