//! Spending categories.
//!
//! The category set is closed: validation, storage, and the HTTP surface all
//! go through [`Category`] so the list is declared exactly once.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A spending category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Food and household supplies.
    Groceries,
    /// Electricity, water, internet, phone.
    Utilities,
    /// Fuel, fares, vehicle costs.
    Transport,
    /// Leisure and subscriptions.
    Entertainment,
    /// Medical and pharmacy.
    Health,
    /// Anything else.
    Other,
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid category '{0}'. Must be one of: Groceries, Utilities, Transport, Entertainment, Health, Other")]
pub struct CategoryParseError(pub String);

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Groceries,
        Self::Utilities,
        Self::Transport,
        Self::Entertainment,
        Self::Health,
        Self::Other,
    ];

    /// Returns the canonical name, as stored and serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Utilities => "Utilities",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_every_category_round_trips_through_its_name() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[rstest]
    #[case("")]
    #[case("Food")]
    #[case("groceries")]
    #[case(" Health")]
    fn test_unknown_names_are_rejected(#[case] input: &str) {
        let err = Category::from_str(input).unwrap_err();
        assert_eq!(err.0, input);
        assert!(err.to_string().contains("Must be one of"));
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"Entertainment\"");

        let parsed: Category = serde_json::from_str("\"Utilities\"").unwrap();
        assert_eq!(parsed, Category::Utilities);
    }
}
