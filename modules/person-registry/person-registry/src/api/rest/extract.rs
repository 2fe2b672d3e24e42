//! Extractors whose rejections go through [`ApiError`], so malformed input
//! gets the same error body as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use super::error::ApiError;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Typed path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathParams<T>(pub T);
