//! Aggregation service.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use super::types::{CategoryTotal, MonthlyTotal, MonthlyWindow};
use crate::category::Category;
use crate::month::Month;
use crate::transaction::Transaction;

/// Months per chart page when the caller does not say.
pub const DEFAULT_WINDOW_SIZE: u64 = 6;

/// Aggregation service for chart series.
pub struct AggregationService;

impl AggregationService {
    /// Groups transactions by month and sums their totals.
    ///
    /// The result is sorted ascending by month and covers only months that
    /// have at least one transaction. Totals saturate at `Decimal::MAX`.
    #[must_use]
    pub fn aggregate_by_month(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
        let mut totals: BTreeMap<Month, Decimal> = BTreeMap::new();
        for tx in transactions {
            let total = totals.entry(Month::of(tx.date)).or_default();
            *total = total.saturating_add(tx.total_amount());
        }

        totals
            .into_iter()
            .map(|(month, total)| MonthlyTotal { month, total })
            .collect()
    }

    /// Slices `series` into pages of `size` months, oldest page first.
    ///
    /// `page` is 1-based. Zero values for `page` or `size` are raised to 1.
    /// A page past the end yields empty `data`.
    #[must_use]
    pub fn window(series: &[MonthlyTotal], page: u64, size: u64) -> MonthlyWindow {
        let page = page.max(1);
        let size = size.max(1);
        let total_months = series.len() as u64;

        let start = (page - 1).saturating_mul(size);
        let end = start.saturating_add(size);
        let data = series
            .iter()
            .skip(usize::try_from(start).unwrap_or(usize::MAX))
            .take(usize::try_from(size).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        MonthlyWindow {
            data,
            page,
            size,
            total_months,
            has_previous: page > 1,
            has_next: end < total_months,
        }
    }

    /// Sums spend per category for `month`.
    ///
    /// Only categories with spend appear, in declaration order.
    #[must_use]
    pub fn category_breakdown(transactions: &[Transaction], month: Month) -> Vec<CategoryTotal> {
        let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();
        for tx in transactions.iter().filter(|tx| month.contains(tx.date)) {
            let total = totals.entry(tx.category).or_default();
            *total = total.saturating_add(tx.total_amount());
        }

        Category::ALL
            .iter()
            .filter_map(|category| {
                totals.get(category).map(|total| CategoryTotal {
                    category: *category,
                    total: *total,
                })
            })
            .collect()
    }

    /// Distinct months that have transactions, newest first.
    #[must_use]
    pub fn available_months(transactions: &[Transaction]) -> Vec<Month> {
        let months: BTreeSet<Month> = transactions.iter().map(|tx| Month::of(tx.date)).collect();
        months.into_iter().rev().collect()
    }
}
