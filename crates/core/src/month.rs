//! Calendar months.

use chrono::{Datelike, NaiveDate, Utc};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

/// A calendar month, rendered as `YYYY-MM`.
///
/// Field order makes the derived `Ord` chronological, which matches the
/// lexicographic order of the rendered form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct Month {
    year: i32,
    month: u32,
}

/// Error returned for strings that are not `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid month '{0}'. Expected format YYYY-MM")]
pub struct MonthParseError(pub String);

impl Month {
    /// Creates a month, returning `None` outside years 0-9999 or months 1-12.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        ((0..=9999).contains(&year) && (1..=12).contains(&month)).then_some(Self { year, month })
    }

    /// The month containing `date`.
    ///
    /// Callers pass dates within years 0-9999; `parse_date` rejects anything
    /// wider, so the four-digit rendering holds.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        debug_assert!(
            (0..=9999).contains(&date.year()),
            "year {} outside 0-9999",
            date.year()
        );
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in UTC.
    #[must_use]
    pub fn current() -> Self {
        Self::of(Utc::now().date_naive())
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Returns true if `date` falls in this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        Self::of(date) == self
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MonthParseError(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(err)?;
        if year.len() != 4
            || month.len() != 2
            || !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }

        let year = year.parse().map_err(|_| err())?;
        let month = month.parse().map_err(|_| err())?;
        Self::new(year, month).ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("2025-01", 2025, 1)]
    #[case("1999-12", 1999, 12)]
    #[case("0001-06", 1, 6)]
    fn test_parse_valid(#[case] input: &str, #[case] year: i32, #[case] month: u32) {
        let parsed = Month::from_str(input).unwrap();
        assert_eq!(parsed.year(), year);
        assert_eq!(parsed.month(), month);
        assert_eq!(parsed.to_string(), input);
    }

    #[rstest]
    #[case("")]
    #[case("2025")]
    #[case("2025-1")]
    #[case("2025-13")]
    #[case("2025-00")]
    #[case("25-01")]
    #[case("2025/01")]
    #[case("2025-01-05")]
    #[case("+025-01")]
    #[case("2025-+1")]
    fn test_parse_invalid(#[case] input: &str) {
        assert_eq!(Month::from_str(input), Err(MonthParseError(input.to_string())));
    }

    #[test]
    fn test_of_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let month = Month::of(date);
        assert_eq!(month.to_string(), "2025-03");
        assert!(month.contains(date));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
    }

    #[test]
    fn test_of_date_at_year_bounds() {
        let first = Month::of(NaiveDate::from_ymd_opt(0, 1, 1).unwrap());
        let last = Month::of(NaiveDate::from_ymd_opt(9999, 12, 31).unwrap());
        assert_eq!(first.to_string(), "0000-01");
        assert_eq!(last.to_string(), "9999-12");
        assert_eq!("9999-12".parse::<Month>(), Ok(last));
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut months: Vec<Month> = ["2025-02", "2024-12", "2025-10", "2025-01"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        months.sort();

        let rendered: Vec<String> = months.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["2024-12", "2025-01", "2025-02", "2025-10"]);
    }

    #[test]
    fn test_serde_as_string() {
        let month = Month::new(2025, 7).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2025-07\"");
        assert_eq!(serde_json::from_str::<Month>("\"2025-07\"").unwrap(), month);
        assert!(serde_json::from_str::<Month>("\"July\"").is_err());
    }
}
