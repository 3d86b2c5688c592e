//! Field validation for budgets.

use rust_decimal::Decimal;

use super::error::BudgetValidationError;
use super::types::BudgetDraft;
use crate::transaction::validation::{MAX_AMOUNT, MINOR_UNIT_SCALE};

/// Validates a budget draft.
///
/// Zero is a valid amount; it reconciles with a percentage of 0.
///
/// # Errors
///
/// Returns `NegativeAmount`, `AmountTooLarge` or `AmountTooPrecise`.
pub fn validate_budget(draft: BudgetDraft) -> Result<BudgetDraft, BudgetValidationError> {
    if draft.budget_amount < Decimal::ZERO {
        return Err(BudgetValidationError::NegativeAmount);
    }
    if draft.budget_amount > MAX_AMOUNT {
        return Err(BudgetValidationError::AmountTooLarge);
    }
    if draft.budget_amount.normalize().scale() > MINOR_UNIT_SCALE {
        return Err(BudgetValidationError::AmountTooPrecise);
    }
    Ok(draft)
}
