//! Read-only handlers for the stored collections.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/api/sports` | Ordered by name |
//! | `GET`  | `/api/sports/{id}/leagues` | 400 on a malformed id, 404 if the sport is unknown |
//!
//! Both answer 503 while the store is not initialized.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::PathRejection},
};
use sportseed_core::{
  source::SportSource,
  sport::{League, Sport},
  store::SportStore,
};
use uuid::Uuid;

use crate::{AppState, error::ApiError};

fn store<S, F>(state: &AppState<S, F>) -> Result<&Arc<S>, ApiError>
where
  S: SportStore,
{
  state.engine.store().ok_or(ApiError::Unavailable)
}

/// `GET /api/sports`
pub async fn list<S, F>(
  State(state): State<AppState<S, F>>,
) -> Result<Json<Vec<Sport>>, ApiError>
where
  S: SportStore + 'static,
  F: SportSource + 'static,
{
  let sports = store(&state)?
    .list_sports()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(sports))
}

/// `GET /api/sports/{id}/leagues`
pub async fn leagues<S, F>(
  State(state): State<AppState<S, F>>,
  id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<League>>, ApiError>
where
  S: SportStore + 'static,
  F: SportSource + 'static,
{
  let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let store = store(&state)?;

  store
    .get_sport(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("sport {id} not found")))?;

  let leagues = store
    .list_leagues(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(leagues))
}
