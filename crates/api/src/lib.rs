//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for transactions, budgets, and the dashboard feed
//! - Request extractors that report rejections in the JSON envelope
//! - Response types

pub mod extractors;
pub mod response;
pub mod routes;

#[cfg(test)]
mod test_support;

use axum::Router;
use finviz_shared::{AppError, PaginationConfig};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::response::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Paging limits for list endpoints.
    pub pagination: PaginationConfig,
}

impl AppState {
    /// Creates the state from an open connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection, pagination: PaginationConfig) -> Self {
        Self {
            db: Arc::new(db),
            pagination,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    AppError::NotFound("Route not found".to_string()).into()
}
