//! Transaction CRUD routes.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use finviz_core::transaction::{Transaction, TransactionPatch};
use finviz_db::TransactionRepository;
use finviz_shared::{AppError, PageMeta, PageRequest, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::AppState;
use crate::extractors::{ApiJson, ApiQuery, parse_id};
use crate::response::{ApiResponse, ApiResult};

/// Number of transactions in the recent feed.
pub const RECENT_LIMIT: u64 = 3;

const NOT_FOUND: &str = "Transaction not found";

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route("/transactions/recent", get(recent_transactions))
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing transactions.
#[derive(Debug, Default, Deserialize)]
pub struct ListTransactionsQuery {
    /// Page number (1-indexed).
    pub page: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
}

/// A transaction with its derived total.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// Stored fields.
    #[serde(flatten)]
    pub transaction: Transaction,
    /// `quantity × pricePerUnit`.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_amount: Decimal,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            total_amount: transaction.total_amount(),
            transaction,
        }
    }
}

fn to_responses(transactions: Vec<Transaction>) -> Vec<TransactionResponse> {
    transactions.into_iter().map(Into::into).collect()
}

fn clamp_to_u64(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/transactions` - List transactions, newest first.
async fn list_transactions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListTransactionsQuery>,
) -> ApiResult<impl IntoResponse> {
    let page = PageRequest::new(
        query.page.map_or(1, clamp_to_u64),
        query
            .limit
            .map_or(state.pagination.default_limit, clamp_to_u64),
        state.pagination.max_limit,
    );

    let repo = TransactionRepository::new((*state.db).clone());
    let (items, total) = repo.list_page(page).await?;

    Ok(ApiResponse::paginated(
        to_responses(items),
        PageMeta::new(page, total),
    ))
}

/// GET `/transactions/recent` - The newest transactions by date.
async fn recent_transactions(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let repo = TransactionRepository::new((*state.db).clone());
    let items = repo.recent(RECENT_LIMIT).await?;
    Ok(ApiResponse::ok(to_responses(items)))
}

/// POST `/transactions` - Create a transaction.
async fn create_transaction(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<TransactionPatch>,
) -> ApiResult<impl IntoResponse> {
    let draft = payload.into_draft(Utc::now().date_naive())?;

    let repo = TransactionRepository::new((*state.db).clone());
    let transaction = repo.create(draft).await?;

    info!(transaction_id = %transaction.id, category = %transaction.category, "Transaction created");
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok(TransactionResponse::from(transaction)),
    ))
}

/// GET `/transactions/{id}` - Fetch one transaction.
async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id: TransactionId = parse_id(&id, NOT_FOUND)?;

    let repo = TransactionRepository::new((*state.db).clone());
    let transaction = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(ApiResponse::ok(TransactionResponse::from(transaction)))
}

/// PUT `/transactions/{id}` - Merge the given fields over the stored record.
async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<TransactionPatch>,
) -> ApiResult<impl IntoResponse> {
    let id: TransactionId = parse_id(&id, NOT_FOUND)?;

    let repo = TransactionRepository::new((*state.db).clone());
    let existing = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    let draft = payload.apply_to(&existing)?;
    let transaction = repo
        .replace(id, draft)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    info!(transaction_id = %id, "Transaction updated");
    Ok(ApiResponse::ok(TransactionResponse::from(transaction)))
}

/// DELETE `/transactions/{id}` - Delete a transaction.
async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id: TransactionId = parse_id(&id, NOT_FOUND)?;

    let repo = TransactionRepository::new((*state.db).clone());
    if !repo.delete(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()).into());
    }

    info!(transaction_id = %id, "Transaction deleted");
    Ok(ApiResponse::ok(json!({})))
}
