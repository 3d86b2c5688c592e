//! Budget CRUD routes.
//!
//! `POST /budgets` is an upsert keyed on (month, category).

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use finviz_core::Month;
use finviz_core::budget::BudgetPatch;
use finviz_db::BudgetRepository;
use finviz_shared::{AppError, BudgetId};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::AppState;
use crate::extractors::{ApiJson, ApiQuery, parse_id};
use crate::response::{ApiResponse, ApiResult};

const NOT_FOUND: &str = "Budget not found";

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budgets).post(upsert_budget))
        .route(
            "/budgets/{id}",
            get(get_budget).put(update_budget).delete(delete_budget),
        )
}

/// Query parameters for listing budgets.
#[derive(Debug, Deserialize)]
pub struct ListBudgetsQuery {
    /// Restrict to one month (`YYYY-MM`).
    pub month: Option<String>,
}

/// GET `/budgets` - List budgets, optionally for one month.
async fn list_budgets(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListBudgetsQuery>,
) -> ApiResult<impl IntoResponse> {
    let month = query
        .month
        .as_deref()
        .map(str::parse::<Month>)
        .transpose()?;

    let repo = BudgetRepository::new((*state.db).clone());
    Ok(ApiResponse::ok(repo.list(month).await?))
}

/// POST `/budgets` - Create a budget or overwrite the amount for its key.
async fn upsert_budget(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BudgetPatch>,
) -> ApiResult<impl IntoResponse> {
    let draft = payload.into_draft()?;

    let repo = BudgetRepository::new((*state.db).clone());
    let budget = repo.upsert(draft).await?;

    info!(
        budget_id = %budget.id,
        month = %budget.month,
        category = %budget.category,
        "Budget saved"
    );
    Ok((StatusCode::CREATED, ApiResponse::ok(budget)))
}

/// GET `/budgets/{id}` - Fetch one budget.
async fn get_budget(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id: BudgetId = parse_id(&id, NOT_FOUND)?;

    let repo = BudgetRepository::new((*state.db).clone());
    let budget = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(ApiResponse::ok(budget))
}

/// PUT `/budgets/{id}` - Merge the given fields over the stored budget.
async fn update_budget(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<BudgetPatch>,
) -> ApiResult<impl IntoResponse> {
    let id: BudgetId = parse_id(&id, NOT_FOUND)?;

    let repo = BudgetRepository::new((*state.db).clone());
    let existing = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    let draft = payload.apply_to(&existing)?;
    let budget = repo
        .replace(id, draft)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    info!(budget_id = %id, "Budget updated");
    Ok(ApiResponse::ok(budget))
}

/// DELETE `/budgets/{id}` - Delete a budget.
async fn delete_budget(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id: BudgetId = parse_id(&id, NOT_FOUND)?;

    let repo = BudgetRepository::new((*state.db).clone());
    if !repo.delete(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()).into());
    }

    info!(budget_id = %id, "Budget deleted");
    Ok(ApiResponse::ok(json!({})))
}
