//! HTTP layer for sportseed.
//!
//! Exposes an axum [`Router`] with the collector trigger and read-only views
//! of the stored sports, backed by any [`SportStore`] and [`SportSource`].

pub mod config;
pub mod credentials;
pub mod error;
pub mod handlers;

pub use crate::config::ServerConfig;
pub use error::ApiError;

use std::{any::Any, sync::Arc};

use axum::{
  Json, Router,
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::get,
};
use serde_json::json;
use sportseed_core::{ingest::IngestEngine, source::SportSource, store::SportStore};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use handlers::{collector, sports};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S, F> {
  pub engine: Arc<IngestEngine<S>>,
  pub source: Arc<F>,
}

impl<S, F> AppState<S, F> {
  pub fn new(engine: IngestEngine<S>, source: F) -> Self {
    Self { engine: Arc::new(engine), source: Arc::new(source) }
  }
}

impl<S, F> Clone for AppState<S, F> {
  fn clone(&self) -> Self {
    Self { engine: self.engine.clone(), source: self.source.clone() }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the collector service.
pub fn router<S, F>(state: AppState<S, F>) -> Router
where
  S: SportStore + 'static,
  F: SportSource + 'static,
{
  Router::new()
    .route("/api/collector",           get(collector::handler::<S, F>))
    .route("/api/sports",              get(sports::list::<S, F>))
    .route("/api/sports/{id}/leagues", get(sports::leagues::<S, F>))
    .layer(TraceLayer::new_for_http())
    .layer(CatchPanicLayer::custom(panic_response))
    .with_state(state)
}

/// Render a handler panic the same way as any other uncaught failure.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
  let detail = if let Some(s) = err.downcast_ref::<String>() {
    s.clone()
  } else if let Some(s) = err.downcast_ref::<&str>() {
    (*s).to_string()
  } else {
    "unknown panic".to_string()
  };
  tracing::error!("handler panicked: {detail}");

  (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": detail }))).into_response()
}

// ─── Integration tests ────────────────────────────────────────────────────────
