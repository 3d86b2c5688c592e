//! Core business logic for Finviz.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `category` - The closed set of spending categories
//! - `month` - Calendar months in `YYYY-MM` form
//! - `transaction` - Transaction records, validation, and derived totals
//! - `budget` - Monthly category budgets and their validation
//! - `reconciliation` - Budget vs actual comparisons and spending insights
//! - `aggregation` - Chart series (monthly totals, category breakdown)

pub mod aggregation;
pub mod budget;
pub mod category;
pub mod month;
pub mod reconciliation;
pub mod transaction;

pub use category::{Category, CategoryParseError};
pub use month::{Month, MonthParseError};
