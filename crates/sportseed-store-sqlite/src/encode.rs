//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings. UUIDs are stored as hyphenated
//! lowercase strings.

use chrono::{DateTime, Utc};
use sportseed_core::sport::{League, Sport};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Raw rows ─────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `sports` row.
pub struct RawSport {
  pub sport_id:    String,
  pub name:        String,
  pub description: String,
  pub icon_url:    String,
  pub created_at:  String,
}

impl RawSport {
  pub const COLUMNS: &'static str =
    "sport_id, name, description, icon_url, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      sport_id:    row.get(0)?,
      name:        row.get(1)?,
      description: row.get(2)?,
      icon_url:    row.get(3)?,
      created_at:  row.get(4)?,
    })
  }

  pub fn into_sport(self) -> Result<Sport> {
    Ok(Sport {
      sport_id:    decode_uuid(&self.sport_id)?,
      name:        self.name,
      description: self.description,
      icon_url:    self.icon_url,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `leagues` row.
pub struct RawLeague {
  pub league_id:  String,
  pub sport_id:   String,
  pub name:       String,
  pub country:    String,
  pub logo_url:   String,
  pub created_at: String,
}

impl RawLeague {
  pub const COLUMNS: &'static str =
    "league_id, sport_id, name, country, logo_url, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      league_id:  row.get(0)?,
      sport_id:   row.get(1)?,
      name:       row.get(2)?,
      country:    row.get(3)?,
      logo_url:   row.get(4)?,
      created_at: row.get(5)?,
    })
  }

  pub fn into_league(self) -> Result<League> {
    Ok(League {
      league_id:  decode_uuid(&self.league_id)?,
      sport_id:   decode_uuid(&self.sport_id)?,
      name:       self.name,
      country:    self.country,
      logo_url:   self.logo_url,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
