//! Handler for `GET /api/collector`: one ingest run per request.

use std::collections::BTreeSet;

use axum::{Json, extract::State};
use sportseed_core::{
  ingest::IngestReport, source::SportSource, store::SportStore,
};

use crate::{AppState, error::ApiError};

/// Fetch, then ingest. A failed fetch counts as an empty one.
///
/// Shared by the HTTP handler and the binary's `--once` mode.
pub async fn run<S, F>(state: &AppState<S, F>) -> sportseed_core::Result<IngestReport>
where
  S: SportStore,
  F: SportSource,
{
  let sports = match state.source.fetch_sports().await {
    Ok(sports) => sports,
    Err(e) => {
      tracing::warn!("error fetching sports: {e}");
      BTreeSet::new()
    }
  };

  if sports.is_empty() {
    tracing::info!("scraping returned no sports; nothing to ingest");
    return Ok(IngestReport::nothing_scraped());
  }

  state.engine.ingest(&sports).await
}

/// `GET /api/collector`
pub async fn handler<S, F>(
  State(state): State<AppState<S, F>>,
) -> Result<Json<IngestReport>, ApiError>
where
  S: SportStore + 'static,
  F: SportSource + 'static,
{
  Ok(Json(run(&state).await?))
}
