//! The ingest engine: reconcile scraped sport names against the store.
//!
//! A run reads the existing names once, then inserts every missing sport
//! followed by its resolved leagues. Failures are isolated per sport: each
//! one is recorded as a [`SportOutcome::Failed`] and the loop moves on.

use std::{collections::BTreeSet, sync::Arc};

use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
  Error, Result,
  leagues::LeagueResolver,
  sport::{NewLeague, NewSport, Sport},
  store::SportStore,
};

pub const NOT_INITIALIZED: &str = "Store not initialized.";
pub const NOTHING_SCRAPED: &str = "Scraping returned no sports to add.";

// ─── Outcomes ────────────────────────────────────────────────────────────────

/// What happened to one candidate sport during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SportOutcome {
  /// The sport and all of its leagues were written.
  Inserted { sport: Sport, leagues_added: usize },
  /// A write failed. `sport_id` is set when the sport itself was written and
  /// a league insert failed afterwards; `leagues_added` counts the leagues
  /// written before the failure.
  Failed {
    name:          String,
    sport_id:      Option<Uuid>,
    leagues_added: usize,
    error:         String,
  },
}

impl SportOutcome {
  pub fn sport_added(&self) -> bool {
    match self {
      SportOutcome::Inserted { .. } => true,
      SportOutcome::Failed { sport_id, .. } => sport_id.is_some(),
    }
  }

  pub fn leagues_added(&self) -> usize {
    match self {
      SportOutcome::Inserted { leagues_added, .. }
      | SportOutcome::Failed { leagues_added, .. } => *leagues_added,
    }
  }

  pub fn is_failed(&self) -> bool { matches!(self, SportOutcome::Failed { .. }) }
}

/// Summary of one ingest run. Serialises to the trigger endpoint's body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
  pub sports_added:  usize,
  pub leagues_added: usize,
  pub message:       String,
  #[serde(skip)]
  pub outcomes:      Vec<SportOutcome>,
}

impl IngestReport {
  fn empty(message: &str) -> Self {
    Self {
      sports_added:  0,
      leagues_added: 0,
      message:       message.to_owned(),
      outcomes:      Vec::new(),
    }
  }

  /// Soft result for a run attempted without a store.
  pub fn not_initialized() -> Self { Self::empty(NOT_INITIALIZED) }

  /// Result for a run whose fetch produced nothing.
  pub fn nothing_scraped() -> Self { Self::empty(NOTHING_SCRAPED) }

  pub fn from_outcomes(outcomes: Vec<SportOutcome>) -> Self {
    let sports_added = outcomes.iter().filter(|o| o.sport_added()).count();
    let leagues_added = outcomes.iter().map(SportOutcome::leagues_added).sum();
    Self {
      sports_added,
      leagues_added,
      message: format!(
        "Finished. Added {sports_added} new sports and {leagues_added} new \
         leagues to the store."
      ),
      outcomes,
    }
  }

  pub fn failures(&self) -> impl Iterator<Item = &SportOutcome> {
    self.outcomes.iter().filter(|o| o.is_failed())
  }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Stateless between runs apart from the store it writes to.
///
/// Runs are serialised: two overlapping calls to [`IngestEngine::ingest`]
/// never read the same existing-names snapshot.
pub struct IngestEngine<S> {
  store:    Option<Arc<S>>,
  resolver: Box<dyn LeagueResolver>,
  run_lock: Mutex<()>,
}

impl<S: SportStore> IngestEngine<S> {
  /// `store` is `None` when initialisation failed; runs then short-circuit
  /// with [`IngestReport::not_initialized`].
  pub fn new(store: Option<Arc<S>>, resolver: impl LeagueResolver + 'static) -> Self {
    Self {
      store,
      resolver: Box::new(resolver),
      run_lock: Mutex::new(()),
    }
  }

  pub fn store(&self) -> Option<&Arc<S>> { self.store.as_ref() }

  /// Insert every name in `sport_names` that the store does not have yet,
  /// together with its leagues.
  ///
  /// Only a failure to read the existing names is returned as an error.
  pub async fn ingest(&self, sport_names: &BTreeSet<String>) -> Result<IngestReport> {
    let Some(store) = self.store.as_deref() else {
      tracing::warn!("store is not initialized; cannot populate data");
      return Ok(IngestReport::not_initialized());
    };

    let _run = self.run_lock.lock().await;

    let existing = store
      .sport_names()
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    tracing::info!(
      "{} sports scraped, {} already stored",
      sport_names.len(),
      existing.len()
    );

    let mut outcomes = Vec::new();
    for name in sport_names.iter().filter(|n| !existing.contains(n.as_str())) {
      outcomes.push(self.ingest_one(store, name).await);
    }

    let report = IngestReport::from_outcomes(outcomes);
    tracing::info!("{}", report.message);
    Ok(report)
  }

  async fn ingest_one(&self, store: &S, name: &str) -> SportOutcome {
    let sport = match store.add_sport(NewSport::scraped(name)).await {
      Ok(sport) => sport,
      Err(e) => {
        tracing::error!("error adding sport {name:?}: {e}");
        return SportOutcome::Failed {
          name:          name.to_owned(),
          sport_id:      None,
          leagues_added: 0,
          error:         e.to_string(),
        };
      }
    };
    tracing::info!("added {name:?} (id {})", sport.sport_id);

    let mut leagues_added = 0;
    for league in self.resolver.leagues_for(name) {
      match store.add_league(NewLeague::for_sport(sport.sport_id, &league)).await {
        Ok(_) => {
          tracing::debug!("added league {league:?} to {name:?}");
          leagues_added += 1;
        }
        Err(e) => {
          tracing::error!("error adding league {league:?} to {name:?}: {e}");
          return SportOutcome::Failed {
            name: name.to_owned(),
            sport_id: Some(sport.sport_id),
            leagues_added,
            error: e.to_string(),
          };
        }
      }
    }

    SportOutcome::Inserted { sport, leagues_added }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
