//! Transaction validation errors.

use finviz_shared::AppError;
use thiserror::Error;

use crate::category::CategoryParseError;

/// Field-level validation failures for a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionValidationError {
    /// A required field is absent.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Description is blank after trimming.
    #[error("Description must not be empty")]
    EmptyDescription,

    /// Description exceeds the length limit.
    #[error("Description must be at most {max} characters")]
    DescriptionTooLong {
        /// Maximum character count.
        max: usize,
    },

    /// Quantity below the minimum.
    #[error("Quantity must be at least 0.01")]
    QuantityTooSmall,

    /// Quantity above the largest storable value.
    #[error("Quantity must be at most 9999999999.9999")]
    QuantityTooLarge,

    /// Quantity has more fractional digits than the store keeps.
    #[error("Quantity must have at most {max} decimal places")]
    QuantityTooPrecise {
        /// Maximum fractional digits.
        max: u32,
    },

    /// Price per unit below the minimum.
    #[error("Price per unit must be at least 0.01")]
    PriceTooSmall,

    /// Price per unit above the largest storable value.
    #[error("Price per unit must be at most 999999999999.99")]
    PriceTooLarge,

    /// Price per unit finer than currency minor units.
    #[error("Price per unit must have at most 2 decimal places")]
    PriceTooPrecise,

    /// Date is not `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[error("Invalid date '{0}'. Expected format YYYY-MM-DD")]
    InvalidDate(String),

    /// Category outside the closed set.
    #[error(transparent)]
    InvalidCategory(#[from] CategoryParseError),
}

impl From<TransactionValidationError> for AppError {
    fn from(err: TransactionValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
