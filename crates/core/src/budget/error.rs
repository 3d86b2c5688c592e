//! Budget error types.

use finviz_shared::AppError;
use thiserror::Error;

use crate::category::CategoryParseError;
use crate::month::MonthParseError;

/// Field-level validation failures for a budget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetValidationError {
    /// A required field is absent.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Month is not `YYYY-MM`.
    #[error(transparent)]
    InvalidMonth(#[from] MonthParseError),

    /// Category outside the closed set.
    #[error(transparent)]
    InvalidCategory(#[from] CategoryParseError),

    /// Amount cannot be negative.
    #[error("Budget amount cannot be negative")]
    NegativeAmount,

    /// Amount above the largest storable value.
    #[error("Budget amount must be at most 999999999999.99")]
    AmountTooLarge,

    /// Amount finer than currency minor units.
    #[error("Budget amount must have at most 2 decimal places")]
    AmountTooPrecise,
}

impl From<BudgetValidationError> for AppError {
    fn from(err: BudgetValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
