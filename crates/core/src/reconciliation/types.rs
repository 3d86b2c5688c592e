//! Reconciliation result types. Derived on request, never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::month::Month;

/// Budget vs actual for one category in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparison {
    /// Budgeted category.
    pub category: Category,
    /// Budgeted amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    /// Sum of transaction totals in the category and month.
    #[serde(with = "rust_decimal::serde::float")]
    pub actual: Decimal,
    /// `actual - budget`; positive means overspent.
    #[serde(with = "rust_decimal::serde::float")]
    pub difference: Decimal,
    /// `actual / budget * 100` to two places, or 0 for a zero budget.
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage: Decimal,
}

/// A category paired with an amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAmount {
    /// Category.
    pub category: Category,
    /// Amount (always non-negative).
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Month-level summary over a set of comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingInsight {
    /// Sum of budgets.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_budget: Decimal,
    /// Sum of actual spend.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    /// Categories with `difference > 0`, in comparison order.
    pub over_budget_categories: Vec<Category>,
    /// Categories with `difference < 0`, in comparison order.
    pub under_budget_categories: Vec<Category>,
    /// Largest positive difference.
    pub biggest_overspend: Option<CategoryAmount>,
    /// Most negative difference, as a magnitude.
    pub biggest_underspend: Option<CategoryAmount>,
}

/// Comparisons and insights for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReconciliation {
    /// Target month.
    pub month: Month,
    /// Per-category rows.
    pub comparisons: Vec<BudgetComparison>,
    /// Summary over `comparisons`.
    pub insights: SpendingInsight,
}
