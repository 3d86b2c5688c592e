//! Budget data types.

use chrono::{DateTime, Utc};
use finviz_shared::BudgetId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BudgetValidationError;
use super::validation::validate_budget;
use crate::category::Category;
use crate::month::Month;

/// A budget record: one amount per (month, category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Month the budget applies to.
    pub month: Month,
    /// Budgeted category.
    pub category: Category,
    /// Planned spend for the month.
    #[serde(with = "rust_decimal::serde::float")]
    pub budget_amount: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A validated set of writable budget fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetDraft {
    /// Month the budget applies to.
    pub month: Month,
    /// Budgeted category.
    pub category: Category,
    /// Planned spend for the month.
    pub budget_amount: Decimal,
}

impl BudgetDraft {
    /// Checks field constraints; see [`validate_budget`].
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount`, `AmountTooLarge` or `AmountTooPrecise`.
    pub fn validate(self) -> Result<Self, BudgetValidationError> {
        validate_budget(self)
    }
}

/// Client-supplied budget fields, any of which may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPatch {
    /// Month in `YYYY-MM` form.
    pub month: Option<String>,
    /// Category name.
    pub category: Option<String>,
    /// Planned spend.
    pub budget_amount: Option<Decimal>,
}

impl BudgetPatch {
    /// Builds a new budget from the patch; every field is required.
    pub fn into_draft(self) -> Result<BudgetDraft, BudgetValidationError> {
        let month = self
            .month
            .ok_or(BudgetValidationError::MissingField("month"))?
            .parse()?;
        let category = self
            .category
            .ok_or(BudgetValidationError::MissingField("category"))?
            .parse()?;
        let budget_amount = self
            .budget_amount
            .ok_or(BudgetValidationError::MissingField("budgetAmount"))?;

        validate_budget(BudgetDraft {
            month,
            category,
            budget_amount,
        })
    }

    /// Merges the patch over `existing` and validates the result.
    pub fn apply_to(self, existing: &Budget) -> Result<BudgetDraft, BudgetValidationError> {
        let month = match self.month {
            Some(raw) => raw.parse()?,
            None => existing.month,
        };
        let category = match self.category {
            Some(raw) => raw.parse()?,
            None => existing.category,
        };

        validate_budget(BudgetDraft {
            month,
            category,
            budget_amount: self.budget_amount.unwrap_or(existing.budget_amount),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stored() -> Budget {
        Budget {
            id: BudgetId::new(),
            month: "2025-01".parse().unwrap(),
            category: Category::Health,
            budget_amount: dec!(100),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_into_draft_complete() {
        let patch: BudgetPatch =
            serde_json::from_str(r#"{"month":"2025-02","category":"Groceries","budgetAmount":150}"#)
                .unwrap();

        let draft = patch.into_draft().unwrap();
        assert_eq!(draft.month.to_string(), "2025-02");
        assert_eq!(draft.category, Category::Groceries);
        assert_eq!(draft.budget_amount, dec!(150));
    }

    #[test]
    fn test_into_draft_missing_amount() {
        let patch = BudgetPatch {
            month: Some("2025-02".to_string()),
            category: Some("Groceries".to_string()),
            budget_amount: None,
        };
        assert_eq!(
            patch.into_draft(),
            Err(BudgetValidationError::MissingField("budgetAmount"))
        );
    }

    #[test]
    fn test_into_draft_bad_month() {
        let patch = BudgetPatch {
            month: Some("Jan 2025".to_string()),
            category: Some("Groceries".to_string()),
            budget_amount: Some(dec!(1)),
        };
        let err = patch.into_draft().unwrap_err();
        assert!(matches!(err, BudgetValidationError::InvalidMonth(_)));
        assert_eq!(err.to_string(), "Invalid month 'Jan 2025'. Expected format YYYY-MM");
    }

    #[test]
    fn test_apply_to_replaces_only_given_fields() {
        let existing = stored();
        let patch = BudgetPatch {
            budget_amount: Some(dec!(250)),
            ..BudgetPatch::default()
        };

        let draft = patch.apply_to(&existing).unwrap();
        assert_eq!(draft.month, existing.month);
        assert_eq!(draft.category, Category::Health);
        assert_eq!(draft.budget_amount, dec!(250));
    }

    #[test]
    fn test_apply_to_rejects_negative_amount() {
        let patch = BudgetPatch {
            budget_amount: Some(dec!(-1)),
            ..BudgetPatch::default()
        };
        assert_eq!(
            patch.apply_to(&stored()),
            Err(BudgetValidationError::NegativeAmount)
        );
    }
}
