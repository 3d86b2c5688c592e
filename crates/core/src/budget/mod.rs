//! Monthly category budgets.

pub mod error;
pub mod types;
pub mod validation;

pub use error::BudgetValidationError;
pub use types::{Budget, BudgetDraft, BudgetPatch};
pub use validation::validate_budget;
