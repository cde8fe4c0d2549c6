//! Sport and league records.
//!
//! A sport is keyed by its name within a namespace. Leagues hang off exactly
//! one sport and are only ever created alongside it. Neither is updated or
//! deleted once stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Sport ───────────────────────────────────────────────────────────────────

/// A persisted sport. `sport_id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sport {
  pub sport_id:    Uuid,
  pub name:        String,
  pub description: String,
  pub icon_url:    String,
  pub created_at:  DateTime<Utc>,
}

/// Input to [`SportStore::add_sport`](crate::store::SportStore::add_sport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSport {
  pub name:        String,
  pub description: String,
  pub icon_url:    String,
}

impl NewSport {
  /// A sport discovered by scraping: derived description, no icon yet.
  pub fn scraped(name: impl Into<String>) -> Self {
    let name = name.into();
    Self {
      description: format!("The sport of {name}."),
      icon_url: String::new(),
      name,
    }
  }
}

// ─── League ──────────────────────────────────────────────────────────────────

/// A persisted league belonging to one [`Sport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
  pub league_id:  Uuid,
  pub sport_id:   Uuid,
  pub name:       String,
  pub country:    String,
  pub logo_url:   String,
  pub created_at: DateTime<Utc>,
}

/// Input to [`SportStore::add_league`](crate::store::SportStore::add_league).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLeague {
  pub sport_id: Uuid,
  pub name:     String,
  pub country:  String,
  pub logo_url: String,
}

impl NewLeague {
  /// A league resolved for `sport_id`, with country and logo left blank.
  pub fn for_sport(sport_id: Uuid, name: impl Into<String>) -> Self {
    Self {
      sport_id,
      name: name.into(),
      country: String::new(),
      logo_url: String::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn scraped_sport_derives_description() {
    let s = NewSport::scraped("Hurling");
    assert_eq!(s.name, "Hurling");
    assert_eq!(s.description, "The sport of Hurling.");
    assert!(s.icon_url.is_empty());
  }

  #[test]
  fn sport_serializes_with_camel_case_fields() {
    let sport = Sport {
      sport_id:    Uuid::nil(),
      name:        "Chess".into(),
      description: "The sport of Chess.".into(),
      icon_url:    String::new(),
      created_at:  Utc::now(),
    };
    let json = serde_json::to_value(&sport).unwrap();
    assert!(json.get("iconUrl").is_some());
    assert!(json.get("sportId").is_some());
    assert!(json.get("icon_url").is_none());
  }
}
