//! Reconciliation service: budget vs actual per category and month.

use rust_decimal::Decimal;

use super::types::{BudgetComparison, CategoryAmount, MonthlyReconciliation, SpendingInsight};
use crate::budget::Budget;
use crate::month::Month;
use crate::transaction::Transaction;

/// Spend as a percentage of budget, rounded to two places.
///
/// A zero budget yields 0 rather than dividing by zero. Results too large to
/// represent saturate at `Decimal::MAX`.
#[must_use]
pub fn utilization_percent(actual: Decimal, budget: Decimal) -> Decimal {
    if budget.is_zero() {
        return Decimal::ZERO;
    }
    actual
        .checked_div(budget)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map_or(Decimal::MAX, |pct| pct.round_dp(2))
}

/// Reconciliation service for business logic.
pub struct ReconciliationService;

impl ReconciliationService {
    /// Compares each of `month`'s budgets against the month's transactions.
    ///
    /// `transactions` is the full set; filtering by month happens here.
    /// Budgets for other months are skipped. Categories without a budget row
    /// do not appear. Output follows the order of `budgets`.
    #[must_use]
    pub fn compute_comparisons(
        transactions: &[Transaction],
        budgets: &[Budget],
        month: Month,
    ) -> Vec<BudgetComparison> {
        budgets
            .iter()
            .filter(|budget| budget.month == month)
            .map(|budget| {
                let actual = transactions
                    .iter()
                    .filter(|tx| tx.category == budget.category && month.contains(tx.date))
                    .map(Transaction::total_amount)
                    .fold(Decimal::ZERO, Decimal::saturating_add);

                BudgetComparison {
                    category: budget.category,
                    budget: budget.budget_amount,
                    actual,
                    difference: actual.saturating_sub(budget.budget_amount),
                    percentage: utilization_percent(actual, budget.budget_amount),
                }
            })
            .collect()
    }

    /// Summarizes comparisons into totals, over/under lists and extremes.
    ///
    /// Ties for the biggest over- or underspend go to the first row.
    #[must_use]
    pub fn compute_insights(comparisons: &[BudgetComparison]) -> SpendingInsight {
        let mut insight = SpendingInsight::default();
        let mut biggest_over: Option<&BudgetComparison> = None;
        let mut biggest_under: Option<&BudgetComparison> = None;

        for row in comparisons {
            insight.total_budget = insight.total_budget.saturating_add(row.budget);
            insight.total_spent = insight.total_spent.saturating_add(row.actual);

            if row.difference > Decimal::ZERO {
                insight.over_budget_categories.push(row.category);
                if biggest_over.is_none_or(|best| row.difference > best.difference) {
                    biggest_over = Some(row);
                }
            } else if row.difference < Decimal::ZERO {
                insight.under_budget_categories.push(row.category);
                if biggest_under.is_none_or(|best| row.difference < best.difference) {
                    biggest_under = Some(row);
                }
            }
        }

        insight.biggest_overspend = biggest_over.map(|row| CategoryAmount {
            category: row.category,
            amount: row.difference,
        });
        insight.biggest_underspend = biggest_under.map(|row| CategoryAmount {
            category: row.category,
            amount: row.difference.abs(),
        });

        insight
    }

    /// Runs both steps for `month`.
    #[must_use]
    pub fn reconcile(
        transactions: &[Transaction],
        budgets: &[Budget],
        month: Month,
    ) -> MonthlyReconciliation {
        let comparisons = Self::compute_comparisons(transactions, budgets, month);
        let insights = Self::compute_insights(&comparisons);
        MonthlyReconciliation {
            month,
            comparisons,
            insights,
        }
    }
}
