//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! They speak in `finviz_core` domain types.

pub mod budget;
pub mod transaction;

pub use budget::{BudgetError, BudgetRepository};
pub use transaction::{TransactionError, TransactionRepository};
