//! Response envelope and error mapping.
//!
//! Every response body is `{success, data?, error?, pagination?}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use finviz_core::{
    MonthParseError, budget::BudgetValidationError, transaction::TransactionValidationError,
};
use finviz_db::{BudgetError, TransactionError};
use finviz_shared::{AppError, PageMeta};
use serde::Serialize;
use tracing::{error, warn};

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON envelope shared by all endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// True for 2xx responses.
    pub success: bool,
    /// Payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Paging metadata for list endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            pagination: None,
        }
    }

    /// Successful list response with paging metadata.
    pub fn paginated(data: T, pagination: PageMeta) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::ok(data)
        }
    }
}

impl ApiResponse<()> {
    /// Failure response carrying only a message.
    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            pagination: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Handler error: an [`AppError`] rendered in the envelope.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if err.is_server_error() {
            error!(error = %err, code = err.error_code(), "Request failed");
        } else {
            warn!(error = %err, code = err.error_code(), "Request rejected");
        }

        (status, Json(ApiResponse::failure(err.public_message()))).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<TransactionValidationError> for ApiError {
    fn from(err: TransactionValidationError) -> Self {
        Self(err.into())
    }
}

impl From<BudgetValidationError> for ApiError {
    fn from(err: BudgetValidationError) -> Self {
        Self(err.into())
    }
}

impl From<MonthParseError> for ApiError {
    fn from(err: MonthParseError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<TransactionError> for ApiError {
    fn from(err: TransactionError) -> Self {
        Self(match err {
            TransactionError::InvalidRecord { .. } => AppError::Internal(err.to_string()),
            TransactionError::Database(e) => AppError::Database(e.to_string()),
        })
    }
}

impl From<BudgetError> for ApiError {
    fn from(err: BudgetError) -> Self {
        Self(match err {
            BudgetError::Conflict { .. } => AppError::Conflict(err.to_string()),
            BudgetError::InvalidRecord { .. } => AppError::Internal(err.to_string()),
            BudgetError::Database(e) => AppError::Database(e.to_string()),
        })
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = ApiError(err).into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[rstest]
    #[case(AppError::Validation("Quantity must be at least 0.01".into()), 400, "Quantity must be at least 0.01")]
    #[case(AppError::NotFound("Transaction not found".into()), 404, "Transaction not found")]
    #[case(AppError::Conflict("taken".into()), 409, "taken")]
    #[case(AppError::Database("connection refused".into()), 500, "Server Error")]
    #[case(AppError::Internal("boom".into()), 500, "Server Error")]
    #[tokio::test]
    async fn test_error_envelope(
        #[case] err: AppError,
        #[case] status: u16,
        #[case] message: &str,
    ) {
        let (code, body) = render(err).await;

        assert_eq!(code.as_u16(), status);
        assert_eq!(body, serde_json::json!({"success": false, "error": message}));
    }

    #[test]
    fn test_success_envelope_omits_empty_fields() {
        let json = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": [1, 2]}));
    }

    #[test]
    fn test_budget_conflict_maps_to_conflict() {
        let err: ApiError = BudgetError::Conflict {
            month: "2025-01".parse().unwrap(),
            category: finviz_core::Category::Groceries,
        }
        .into();
        assert_eq!(err.0.status_code(), 409);
    }
}
