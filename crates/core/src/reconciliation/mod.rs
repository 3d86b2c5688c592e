//! Budget vs actual reconciliation and spending insights.

pub mod service;
pub mod types;


pub use service::{ReconciliationService, utilization_percent};
pub use types::{BudgetComparison, CategoryAmount, MonthlyReconciliation, SpendingInsight};
