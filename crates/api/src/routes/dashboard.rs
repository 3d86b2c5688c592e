//! Dashboard feed routes.
//!
//! All series are derived on request from the full transaction set.

use axum::{
    Router,
    extract::State,
    response::IntoResponse,
    routing::get,
};
use finviz_core::Month;
use finviz_core::aggregation::{
    AggregationService, CategoryTotal, DEFAULT_WINDOW_SIZE, MonthlyTotal,
};
use finviz_core::reconciliation::{BudgetComparison, ReconciliationService, SpendingInsight};
use finviz_db::{BudgetRepository, TransactionRepository};
use serde::{Deserialize, Serialize};

use super::transactions::{RECENT_LIMIT, TransactionResponse};
use crate::AppState;
use crate::extractors::ApiQuery;
use crate::response::{ApiResponse, ApiResult};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/budget-comparison", get(get_budget_comparison))
        .route("/dashboard/monthly-expenses", get(get_monthly_expenses))
        .route("/dashboard/category-breakdown", get(get_category_breakdown))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameter selecting the target month.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    /// `YYYY-MM`; defaults to the current month.
    pub month: Option<String>,
}

impl MonthQuery {
    fn resolve(&self) -> Result<Month, finviz_core::MonthParseError> {
        self.month
            .as_deref()
            .map_or_else(|| Ok(Month::current()), str::parse::<Month>)
    }
}

/// Paging for the monthly expense series.
#[derive(Debug, Deserialize)]
pub struct MonthlyExpensesQuery {
    /// Page number (1-indexed).
    pub page: Option<u64>,
    /// Months per page.
    pub size: Option<u64>,
}

/// Everything the dashboard needs in one response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Target month.
    pub month: Month,
    /// Budget vs actual for the target month.
    pub comparisons: Vec<BudgetComparison>,
    /// Summary over `comparisons`.
    pub insights: SpendingInsight,
    /// Full monthly series, oldest first.
    pub monthly_expenses: Vec<MonthlyTotal>,
    /// Spend per category in the target month.
    pub category_breakdown: Vec<CategoryTotal>,
    /// Months that have transactions, newest first.
    pub available_months: Vec<Month>,
    /// Newest transactions by date.
    pub recent_transactions: Vec<TransactionResponse>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/dashboard` - Combined dashboard feed.
async fn get_dashboard(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<impl IntoResponse> {
    let month = query.resolve()?;

    let tx_repo = TransactionRepository::new((*state.db).clone());
    let budget_repo = BudgetRepository::new((*state.db).clone());

    let transactions = tx_repo.list_all().await?;
    let budgets = budget_repo.list(Some(month)).await?;
    let recent = tx_repo.recent(RECENT_LIMIT).await?;

    let reconciliation = ReconciliationService::reconcile(&transactions, &budgets, month);

    Ok(ApiResponse::ok(DashboardResponse {
        month,
        comparisons: reconciliation.comparisons,
        insights: reconciliation.insights,
        monthly_expenses: AggregationService::aggregate_by_month(&transactions),
        category_breakdown: AggregationService::category_breakdown(&transactions, month),
        available_months: AggregationService::available_months(&transactions),
        recent_transactions: recent.into_iter().map(Into::into).collect(),
    }))
}

/// GET `/dashboard/budget-comparison` - Comparisons and insights for a month.
async fn get_budget_comparison(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<impl IntoResponse> {
    let month = query.resolve()?;

    let transactions = TransactionRepository::new((*state.db).clone())
        .list_all()
        .await?;
    let budgets = BudgetRepository::new((*state.db).clone())
        .list(Some(month))
        .await?;

    Ok(ApiResponse::ok(ReconciliationService::reconcile(
        &transactions,
        &budgets,
        month,
    )))
}

/// GET `/dashboard/monthly-expenses` - One page of the monthly series.
async fn get_monthly_expenses(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MonthlyExpensesQuery>,
) -> ApiResult<impl IntoResponse> {
    let transactions = TransactionRepository::new((*state.db).clone())
        .list_all()
        .await?;
    let series = AggregationService::aggregate_by_month(&transactions);

    Ok(ApiResponse::ok(AggregationService::window(
        &series,
        query.page.unwrap_or(1),
        query.size.unwrap_or(DEFAULT_WINDOW_SIZE),
    )))
}

/// GET `/dashboard/category-breakdown` - Spend per category for a month.
async fn get_category_breakdown(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<impl IntoResponse> {
    let month = query.resolve()?;

    let transactions = TransactionRepository::new((*state.db).clone())
        .list_all()
        .await?;

    Ok(ApiResponse::ok(AggregationService::category_breakdown(
        &transactions,
        month,
    )))
}
