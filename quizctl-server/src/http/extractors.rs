//! Custom Axum extractors
//!
//! Thin wrappers over axum's `Json`, `Path`, and `Query` whose rejections
//! become [`ApiError::Unprocessable`], so coercion failures share the
//! `{"detail": ...}` body shape.

use axum::extract::{FromRequest, FromRequestParts};

use super::error::ApiError;

/// JSON body extractor
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Query string extractor
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
