//! Transaction data types.

use chrono::{DateTime, NaiveDate, Utc};
use finviz_shared::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::TransactionValidationError;
use super::validation::{parse_date, validate_transaction};
use crate::category::Category;

/// Derived amount of a transaction: `quantity × price_per_unit`.
///
/// Always recomputed from the stored fields; never persisted. Saturates at
/// `Decimal::MAX` rather than panicking for rows that bypassed validation.
#[must_use]
pub fn total_amount(quantity: Decimal, price_per_unit: Decimal) -> Decimal {
    quantity.saturating_mul(price_per_unit)
}

/// A stored transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// What was bought.
    pub description: String,
    /// Number of units.
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    /// Price of one unit.
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_unit: Decimal,
    /// Calendar date of the purchase.
    pub date: NaiveDate,
    /// Spending category.
    pub category: Category,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Returns `quantity × price_per_unit`.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        total_amount(self.quantity, self.price_per_unit)
    }
}

/// A validated set of writable transaction fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    /// Trimmed description.
    pub description: String,
    /// Number of units.
    pub quantity: Decimal,
    /// Price of one unit.
    pub price_per_unit: Decimal,
    /// Calendar date of the purchase.
    pub date: NaiveDate,
    /// Spending category.
    pub category: Category,
}

impl TransactionDraft {
    /// Returns `quantity × price_per_unit`.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        total_amount(self.quantity, self.price_per_unit)
    }

    /// Checks field constraints; see [`validate_transaction`].
    ///
    /// # Errors
    ///
    /// Returns the first constraint the draft violates.
    pub fn validate(self) -> Result<Self, TransactionValidationError> {
        validate_transaction(self)
    }
}

/// Client-supplied transaction fields, any of which may be absent.
///
/// Used as the body of both create and update requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPatch {
    /// Description.
    pub description: Option<String>,
    /// Number of units.
    pub quantity: Option<Decimal>,
    /// Price of one unit.
    pub price_per_unit: Option<Decimal>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: Option<String>,
    /// Category name.
    pub category: Option<String>,
}

impl TransactionPatch {
    /// Builds a new transaction from the patch.
    ///
    /// Every field except `date` is required; a missing date means `today`.
    pub fn into_draft(self, today: NaiveDate) -> Result<TransactionDraft, TransactionValidationError> {
        let description = self
            .description
            .ok_or(TransactionValidationError::MissingField("description"))?;
        let quantity = self
            .quantity
            .ok_or(TransactionValidationError::MissingField("quantity"))?;
        let price_per_unit = self
            .price_per_unit
            .ok_or(TransactionValidationError::MissingField("pricePerUnit"))?;
        let category = self
            .category
            .ok_or(TransactionValidationError::MissingField("category"))?
            .parse()?;
        let date = match self.date {
            Some(raw) => parse_date(&raw)?,
            None => today,
        };

        validate_transaction(TransactionDraft {
            description,
            quantity,
            price_per_unit,
            date,
            category,
        })
    }

    /// Merges the patch over `existing` and validates the result as a whole.
    pub fn apply_to(self, existing: &Transaction) -> Result<TransactionDraft, TransactionValidationError> {
        let category = match self.category {
            Some(raw) => raw.parse()?,
            None => existing.category,
        };
        let date = match self.date {
            Some(raw) => parse_date(&raw)?,
            None => existing.date,
        };

        validate_transaction(TransactionDraft {
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            quantity: self.quantity.unwrap_or(existing.quantity),
            price_per_unit: self.price_per_unit.unwrap_or(existing.price_per_unit),
            date,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    fn stored() -> Transaction {
        Transaction {
            id: TransactionId::new(),
            description: "Milk".to_string(),
            quantity: dec!(2),
            price_per_unit: dec!(50),
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            category: Category::Groceries,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_total_amount_is_quantity_times_price() {
        assert_eq!(total_amount(dec!(2), dec!(50)), dec!(100));
        assert_eq!(total_amount(dec!(1.5), dec!(0.99)), dec!(1.485));
        assert_eq!(stored().total_amount(), dec!(100));
    }

    #[test]
    fn test_into_draft_complete() {
        let patch = TransactionPatch {
            description: Some("  Electricity bill ".to_string()),
            quantity: Some(dec!(1)),
            price_per_unit: Some(dec!(1200.50)),
            date: Some("2025-01-20".to_string()),
            category: Some("Utilities".to_string()),
        };

        let draft = patch.into_draft(today()).unwrap();
        assert_eq!(draft.description, "Electricity bill");
        assert_eq!(draft.category, Category::Utilities);
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
        assert_eq!(draft.total_amount(), dec!(1200.50));
    }

    #[test]
    fn test_into_draft_defaults_date_to_today() {
        let patch = TransactionPatch {
            description: Some("Bus".to_string()),
            quantity: Some(dec!(2)),
            price_per_unit: Some(dec!(15)),
            date: None,
            category: Some("Transport".to_string()),
        };

        assert_eq!(patch.into_draft(today()).unwrap().date, today());
    }

    #[test]
    fn test_into_draft_reports_first_missing_field() {
        let patch = TransactionPatch {
            description: Some("Bus".to_string()),
            ..TransactionPatch::default()
        };

        assert_eq!(
            patch.into_draft(today()),
            Err(TransactionValidationError::MissingField("quantity"))
        );
    }

    #[test]
    fn test_into_draft_rejects_unknown_category() {
        let patch = TransactionPatch {
            description: Some("Bus".to_string()),
            quantity: Some(dec!(1)),
            price_per_unit: Some(dec!(1)),
            date: None,
            category: Some("Travel".to_string()),
        };

        assert!(matches!(
            patch.into_draft(today()),
            Err(TransactionValidationError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_apply_to_merges_over_existing() {
        let existing = stored();
        let patch = TransactionPatch {
            quantity: Some(dec!(3)),
            category: Some("Other".to_string()),
            ..TransactionPatch::default()
        };

        let draft = patch.apply_to(&existing).unwrap();
        assert_eq!(draft.description, "Milk");
        assert_eq!(draft.quantity, dec!(3));
        assert_eq!(draft.price_per_unit, dec!(50));
        assert_eq!(draft.date, existing.date);
        assert_eq!(draft.category, Category::Other);
    }

    #[test]
    fn test_apply_to_validates_merged_record() {
        let patch = TransactionPatch {
            price_per_unit: Some(dec!(0)),
            ..TransactionPatch::default()
        };

        assert_eq!(
            patch.apply_to(&stored()),
            Err(TransactionValidationError::PriceTooSmall)
        );
    }

    #[test]
    fn test_patch_accepts_numbers_and_numeric_strings() {
        let patch: TransactionPatch = serde_json::from_str(
            r#"{"description":"Tea","quantity":2,"pricePerUnit":"12.50","category":"Groceries"}"#,
        )
        .unwrap();

        assert_eq!(patch.quantity, Some(dec!(2)));
        assert_eq!(patch.price_per_unit, Some(dec!(12.50)));
    }

    #[test]
    fn test_transaction_serializes_camel_case_numbers() {
        let json = serde_json::to_value(stored()).unwrap();
        assert_eq!(json["description"], "Milk");
        assert_eq!(json["pricePerUnit"], serde_json::json!(50.0));
        assert_eq!(json["date"], "2025-01-05");
        assert_eq!(json["category"], "Groceries");
    }
}
