//! Error types and axum `IntoResponse` implementation.

use std::path::PathBuf;

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an HTTP handler. Always rendered as
/// `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("store not initialized")]
  Unavailable,

  #[error(transparent)]
  Ingest(#[from] sportseed_core::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
      ApiError::Ingest(_) | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
      tracing::error!("request failed: {self}");
    }
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}

/// Failure to obtain store credentials at startup.
#[derive(Debug, Error)]
pub enum CredentialsError {
  #[error("failed to read credentials file {path:?}: {source}")]
  Read {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid credentials json: {0}")]
  Parse(#[from] serde_json::Error),
}
