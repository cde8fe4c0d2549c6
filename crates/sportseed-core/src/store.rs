//! The `SportStore` trait.
//!
//! Implemented by storage backends (e.g. `sportseed-store-sqlite`). The ingest
//! engine and the HTTP layer depend on this abstraction, not on any concrete
//! backend. A store instance is bound to one namespace
//! (`artifacts/{app_id}/public/data`); every method operates inside it.

use std::{collections::HashSet, future::Future};

use uuid::Uuid;

use crate::sport::{League, NewLeague, NewSport, Sport};

/// Namespace path under which an application's collections live.
pub fn data_path(app_id: &str) -> String {
  format!("artifacts/{app_id}/public/data")
}

/// Abstraction over a sportseed store backend.
///
/// Writes are append-only. All methods return `Send` futures so the trait can
/// be used behind `axum`.
pub trait SportStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Sports ────────────────────────────────────────────────────────────

  /// Names of every sport in the namespace. One unbounded read.
  fn sport_names(
    &self,
  ) -> impl Future<Output = Result<HashSet<String>, Self::Error>> + Send + '_;

  /// Persist a new sport and return it with its assigned id.
  fn add_sport(
    &self,
    input: NewSport,
  ) -> impl Future<Output = Result<Sport, Self::Error>> + Send + '_;

  /// Retrieve a sport by id. Returns `None` if not found.
  fn get_sport(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Sport>, Self::Error>> + Send + '_;

  /// All sports in the namespace, ordered by name.
  fn list_sports(
    &self,
  ) -> impl Future<Output = Result<Vec<Sport>, Self::Error>> + Send + '_;

  // ── Leagues ───────────────────────────────────────────────────────────

  /// Persist a new league and return it with its assigned id.
  fn add_league(
    &self,
    input: NewLeague,
  ) -> impl Future<Output = Result<League, Self::Error>> + Send + '_;

  /// Leagues referencing `sport_id`, in insertion order.
  fn list_leagues(
    &self,
    sport_id: Uuid,
  ) -> impl Future<Output = Result<Vec<League>, Self::Error>> + Send + '_;
}
