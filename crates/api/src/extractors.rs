//! Request extractors.
//!
//! Thin wrappers over axum's `Json` and `Query` whose rejections render as
//! 400 responses in the JSON envelope.

use std::str::FromStr;

use axum::extract::{FromRequest, FromRequestParts};
use finviz_shared::AppError;

use crate::response::ApiError;

/// JSON body extractor.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Parses a path identifier; anything unparseable is reported as not found.
pub fn parse_id<T: FromStr>(raw: &str, not_found: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(not_found.to_string()).into())
}
