//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Message returned to clients for every server-side failure.
pub const GENERIC_SERVER_ERROR: &str = "Server Error";

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input failed field constraints.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Identifier does not resolve to a record.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Write collides with an existing record (e.g., duplicate budget key).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Store connectivity or query failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for logs and metrics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the message that is safe to show to a client.
    ///
    /// Server-side failures collapse to [`GENERIC_SERVER_ERROR`] so no store
    /// detail leaks out.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Conflict(msg) => msg.clone(),
            Self::Database(_) | Self::Internal(_) => GENERIC_SERVER_ERROR.to_string(),
        }
    }

    /// Returns true for failures that are the server's fault.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}
