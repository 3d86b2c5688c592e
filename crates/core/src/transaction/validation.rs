//! Field validation for transactions.

use chrono::{DateTime, Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::error::TransactionValidationError;
use super::types::TransactionDraft;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Smallest accepted quantity and price per unit (0.01).
pub const MIN_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest accepted quantity, the `decimal(14,4)` column maximum.
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 4);

/// Largest accepted price per unit or budget amount, the `decimal(14,2)`
/// column maximum.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

/// Fractional digits of the currency's minor unit.
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Fractional digits kept for quantities.
pub const QUANTITY_SCALE: u32 = 4;

/// Validates a draft, returning it with its description trimmed.
///
/// # Errors
///
/// Returns the first field constraint the draft violates.
pub fn validate_transaction(
    mut draft: TransactionDraft,
) -> Result<TransactionDraft, TransactionValidationError> {
    let trimmed = draft.description.trim();
    if trimmed.is_empty() {
        return Err(TransactionValidationError::EmptyDescription);
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(TransactionValidationError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LEN,
        });
    }
    if trimmed.len() != draft.description.len() {
        draft.description = trimmed.to_string();
    }

    if draft.quantity < MIN_AMOUNT {
        return Err(TransactionValidationError::QuantityTooSmall);
    }
    if draft.quantity > MAX_QUANTITY {
        return Err(TransactionValidationError::QuantityTooLarge);
    }
    if draft.quantity.normalize().scale() > QUANTITY_SCALE {
        return Err(TransactionValidationError::QuantityTooPrecise {
            max: QUANTITY_SCALE,
        });
    }
    if draft.price_per_unit < MIN_AMOUNT {
        return Err(TransactionValidationError::PriceTooSmall);
    }
    if draft.price_per_unit > MAX_AMOUNT {
        return Err(TransactionValidationError::PriceTooLarge);
    }
    if draft.price_per_unit.normalize().scale() > MINOR_UNIT_SCALE {
        return Err(TransactionValidationError::PriceTooPrecise);
    }

    Ok(draft)
}

/// Parses a transaction date from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps keep the calendar date of their own offset.
///
/// # Errors
///
/// Returns `InvalidDate` when neither form matches or the year is outside
/// 0-9999.
pub fn parse_date(raw: &str) -> Result<NaiveDate, TransactionValidationError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|ts| ts.date_naive()))
        .ok()
        .filter(|date| (0..=9999).contains(&date.year()))
        .ok_or_else(|| TransactionValidationError::InvalidDate(raw.to_string()))
}
