//! Integration tests for `SqliteStore` against an in-memory database.

use std::{collections::BTreeSet, sync::Arc};

use sportseed_core::{
  ingest::IngestEngine,
  leagues::StaticLeagues,
  sport::{NewLeague, NewSport},
  store::{SportStore, data_path},
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory(&data_path("test-app"))
    .await
    .expect("in-memory store")
}

// ─── Sports ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_sport() {
  let s = store().await;

  let sport = s.add_sport(NewSport::scraped("Hurling")).await.unwrap();
  assert_eq!(sport.name, "Hurling");

  let fetched = s.get_sport(sport.sport_id).await.unwrap().unwrap();
  assert_eq!(fetched.sport_id, sport.sport_id);
  assert_eq!(fetched.description, "The sport of Hurling.");
  assert_eq!(fetched.icon_url, "");
  assert_eq!(fetched.created_at, sport.created_at);
}

#[tokio::test]
async fn get_sport_missing_returns_none() {
  let s = store().await;
  assert!(s.get_sport(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn sport_names_reads_every_sport() {
  let s = store().await;
  assert!(s.sport_names().await.unwrap().is_empty());

  s.add_sport(NewSport::scraped("Chess")).await.unwrap();
  s.add_sport(NewSport::scraped("Polo")).await.unwrap();

  let names = s.sport_names().await.unwrap();
  assert_eq!(names.len(), 2);
  assert!(names.contains("Chess"));
  assert!(names.contains("Polo"));
}

#[tokio::test]
async fn list_sports_is_ordered_by_name() {
  let s = store().await;
  s.add_sport(NewSport::scraped("Rowing")).await.unwrap();
  s.add_sport(NewSport::scraped("Archery")).await.unwrap();
  s.add_sport(NewSport::scraped("Judo")).await.unwrap();

  let names: Vec<_> = s
    .list_sports()
    .await
    .unwrap()
    .into_iter()
    .map(|sp| sp.name)
    .collect();
  assert_eq!(names, ["Archery", "Judo", "Rowing"]);
}

#[tokio::test]
async fn duplicate_sport_name_is_rejected() {
  let s = store().await;
  s.add_sport(NewSport::scraped("Chess")).await.unwrap();

  assert!(s.add_sport(NewSport::scraped("Chess")).await.is_err());
  assert_eq!(s.list_sports().await.unwrap().len(), 1);
}

// ─── Namespaces ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn namespaces_are_isolated() {
  let a = store().await;
  let b = a.with_namespace(&data_path("other-app"));
  assert_eq!(b.namespace(), "artifacts/other-app/public/data");

  let sport = a.add_sport(NewSport::scraped("Chess")).await.unwrap();

  assert!(b.sport_names().await.unwrap().is_empty());
  assert!(b.get_sport(sport.sport_id).await.unwrap().is_none());

  // The same name may exist once per namespace.
  b.add_sport(NewSport::scraped("Chess")).await.unwrap();
  assert_eq!(a.list_sports().await.unwrap().len(), 1);
  assert_eq!(b.list_sports().await.unwrap().len(), 1);
}

// ─── Leagues ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn leagues_are_listed_in_insertion_order() {
  let s = store().await;
  let sport = s.add_sport(NewSport::scraped("Cricket")).await.unwrap();

  for name in ["The Ashes", "Big Bash League", "Indian Premier League (IPL)"] {
    s.add_league(NewLeague::for_sport(sport.sport_id, name)).await.unwrap();
  }

  let leagues = s.list_leagues(sport.sport_id).await.unwrap();
  let names: Vec<_> = leagues.iter().map(|l| l.name.as_str()).collect();
  assert_eq!(names, ["The Ashes", "Big Bash League", "Indian Premier League (IPL)"]);
  assert!(leagues.iter().all(|l| l.sport_id == sport.sport_id));
  assert!(leagues.iter().all(|l| l.country.is_empty() && l.logo_url.is_empty()));
}

#[tokio::test]
async fn leagues_are_not_deduplicated() {
  let s = store().await;
  let sport = s.add_sport(NewSport::scraped("Baseball")).await.unwrap();

  s.add_league(NewLeague::for_sport(sport.sport_id, "MLB")).await.unwrap();
  s.add_league(NewLeague::for_sport(sport.sport_id, "MLB")).await.unwrap();

  assert_eq!(s.list_leagues(sport.sport_id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn league_for_unknown_sport_is_rejected() {
  let s = store().await;
  let result = s.add_league(NewLeague::for_sport(Uuid::new_v4(), "Orphan")).await;
  assert!(result.is_err());
}

// ─── Ingest against SQLite ───────────────────────────────────────────────────

#[tokio::test]
async fn ingest_is_idempotent_against_sqlite() {
  let s = Arc::new(store().await);
  s.add_sport(NewSport::scraped("Chess")).await.unwrap();
  let engine = IngestEngine::new(Some(s.clone()), StaticLeagues);

  let input: BTreeSet<String> =
    ["Basketball", "Chess"].into_iter().map(String::from).collect();

  let first = engine.ingest(&input).await.unwrap();
  assert_eq!(first.sports_added, 1);
  assert_eq!(first.leagues_added, 3);

  let second = engine.ingest(&input).await.unwrap();
  assert_eq!(second.sports_added, 0);
  assert_eq!(second.leagues_added, 0);

  let sports = s.list_sports().await.unwrap();
  assert_eq!(sports.len(), 2);
  let basketball = sports.iter().find(|sp| sp.name == "Basketball").unwrap();
  assert_eq!(s.list_leagues(basketball.sport_id).await.unwrap().len(), 3);
}
