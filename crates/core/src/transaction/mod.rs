//! Transaction records, validation, and derived totals.

pub mod error;
pub mod types;
pub mod validation;

pub use error::TransactionValidationError;
pub use types::{Transaction, TransactionDraft, TransactionPatch, total_amount};
pub use validation::{parse_date, validate_transaction};
