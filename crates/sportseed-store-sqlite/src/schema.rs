//! SQL schema for the sportseed SQLite store.
//!
//! Executed once at connection startup. There are no migrations; the
//! `user_version` pragma only records which layout created the file.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- One row per sport document. `namespace` is the collection root,
-- e.g. 'artifacts/default-app-id/public/data'.
CREATE TABLE IF NOT EXISTS sports (
    sport_id    TEXT PRIMARY KEY,
    namespace   TEXT NOT NULL,
    name        TEXT NOT NULL,
    description TEXT NOT NULL,
    icon_url    TEXT NOT NULL DEFAULT '',
    created_at  TEXT NOT NULL,
    UNIQUE (namespace, name)
);

-- Leagues are append-only and never deduplicated.
CREATE TABLE IF NOT EXISTS leagues (
    league_id   TEXT PRIMARY KEY,
    namespace   TEXT NOT NULL,
    sport_id    TEXT NOT NULL REFERENCES sports(sport_id),
    name        TEXT NOT NULL,
    country     TEXT NOT NULL DEFAULT '',
    logo_url    TEXT NOT NULL DEFAULT '',
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS leagues_sport_idx ON leagues(sport_id);

PRAGMA user_version = 1;
";
