//! Shared types, errors, and configuration for Finviz.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe record references
//! - Pagination types for list endpoints
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DatabaseConfig, LoggingConfig, PaginationConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use types::{BudgetId, PageMeta, PageRequest, TransactionId};
