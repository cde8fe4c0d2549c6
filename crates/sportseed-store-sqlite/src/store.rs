//! [`SqliteStore`]: the SQLite implementation of [`SportStore`].

use std::{collections::HashSet, path::Path, sync::Arc};

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use sportseed_core::{
  sport::{League, NewLeague, NewSport, Sport},
  store::SportStore,
};

use crate::{
  Result,
  encode::{RawLeague, RawSport, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A sportseed store backed by a single SQLite file, scoped to one namespace.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn:      tokio_rusqlite::Connection,
  namespace: Arc<str>,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>, namespace: &str) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn, namespace: namespace.into() };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory(namespace: &str) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn, namespace: namespace.into() };
    store.init_schema().await?;
    Ok(store)
  }

  /// A handle on the same database scoped to another namespace.
  pub fn with_namespace(&self, namespace: &str) -> Self {
    Self { conn: self.conn.clone(), namespace: namespace.into() }
  }

  pub fn namespace(&self) -> &str { &self.namespace }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SportStore impl ─────────────────────────────────────────────────────────

impl SportStore for SqliteStore {
  type Error = crate::Error;

  // ── Sports ────────────────────────────────────────────────────────────────

  async fn sport_names(&self) -> Result<HashSet<String>> {
    let namespace = self.namespace.to_string();

    let names = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare("SELECT name FROM sports WHERE namespace = ?1")?;
        let names = stmt
          .query_map(rusqlite::params![namespace], |row| row.get(0))?
          .collect::<rusqlite::Result<HashSet<String>>>()?;
        Ok(names)
      })
      .await?;

    Ok(names)
  }

  async fn add_sport(&self, input: NewSport) -> Result<Sport> {
    let sport = Sport {
      sport_id:    Uuid::new_v4(),
      name:        input.name,
      description: input.description,
      icon_url:    input.icon_url,
      created_at:  Utc::now(),
    };

    let id_str      = encode_uuid(sport.sport_id);
    let namespace   = self.namespace.to_string();
    let name        = sport.name.clone();
    let description = sport.description.clone();
    let icon_url    = sport.icon_url.clone();
    let at_str      = encode_dt(sport.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO sports (sport_id, namespace, name, description, icon_url, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, namespace, name, description, icon_url, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(sport)
  }

  async fn get_sport(&self, id: Uuid) -> Result<Option<Sport>> {
    let id_str    = encode_uuid(id);
    let namespace = self.namespace.to_string();

    let raw: Option<RawSport> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "SELECT {} FROM sports WHERE sport_id = ?1 AND namespace = ?2",
              RawSport::COLUMNS
            ),
            rusqlite::params![id_str, namespace],
            RawSport::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawSport::into_sport).transpose()
  }

  async fn list_sports(&self) -> Result<Vec<Sport>> {
    let namespace = self.namespace.to_string();

    let raws: Vec<RawSport> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {} FROM sports WHERE namespace = ?1 ORDER BY name",
          RawSport::COLUMNS
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![namespace], RawSport::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSport::into_sport).collect()
  }

  // ── Leagues ───────────────────────────────────────────────────────────────

  async fn add_league(&self, input: NewLeague) -> Result<League> {
    let league = League {
      league_id:  Uuid::new_v4(),
      sport_id:   input.sport_id,
      name:       input.name,
      country:    input.country,
      logo_url:   input.logo_url,
      created_at: Utc::now(),
    };

    let id_str       = encode_uuid(league.league_id);
    let namespace    = self.namespace.to_string();
    let sport_id_str = encode_uuid(league.sport_id);
    let name         = league.name.clone();
    let country      = league.country.clone();
    let logo_url     = league.logo_url.clone();
    let at_str       = encode_dt(league.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO leagues (league_id, namespace, sport_id, name, country, logo_url, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            id_str,
            namespace,
            sport_id_str,
            name,
            country,
            logo_url,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(league)
  }

  async fn list_leagues(&self, sport_id: Uuid) -> Result<Vec<League>> {
    let sport_id_str = encode_uuid(sport_id);
    let namespace    = self.namespace.to_string();

    let raws: Vec<RawLeague> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {} FROM leagues WHERE sport_id = ?1 AND namespace = ?2 ORDER BY rowid",
          RawLeague::COLUMNS
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![sport_id_str, namespace], RawLeague::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawLeague::into_league).collect()
  }
}
