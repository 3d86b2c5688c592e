//! `SeaORM` entities.

pub mod budgets;
pub mod transactions;
