//! Store credentials.
//!
//! Supplied either inline as JSON in `STORE_CREDENTIALS_JSON` or, failing
//! that, as a JSON file on disk. For the SQLite backend the only credential
//! is the database location.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CredentialsError;

pub const CREDENTIALS_ENV: &str = "STORE_CREDENTIALS_JSON";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreCredentials {
  pub database_path: PathBuf,
}

impl StoreCredentials {
  /// Read from the environment, falling back to `fallback_path`.
  pub fn load(fallback_path: &Path) -> Result<Self, CredentialsError> {
    let inline = std::env::var(CREDENTIALS_ENV).ok();
    Self::resolve(inline.as_deref(), fallback_path)
  }

  /// Inline JSON wins over the file.
  pub fn resolve(inline: Option<&str>, fallback_path: &Path) -> Result<Self, CredentialsError> {
    let json = match inline {
      Some(json) => json.to_owned(),
      None => std::fs::read_to_string(fallback_path).map_err(|source| {
        CredentialsError::Read { path: fallback_path.to_path_buf(), source }
      })?,
    };
    Ok(serde_json::from_str(&json)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scratch_file(contents: &str) -> PathBuf {
    let path = std::env::temp_dir()
      .join(format!("sportseed-creds-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).unwrap();
    path
  }

  #[test]
  fn inline_json_wins_over_file() {
    let file = scratch_file(r#"{"database_path":"from-file.db"}"#);

    let creds =
      StoreCredentials::resolve(Some(r#"{"database_path":"inline.db"}"#), &file).unwrap();
    assert_eq!(creds.database_path, PathBuf::from("inline.db"));

    std::fs::remove_file(file).unwrap();
  }

  #[test]
  fn falls_back_to_file() {
    let file = scratch_file(r#"{"database_path":"/var/lib/sportseed.db"}"#);

    let creds = StoreCredentials::resolve(None, &file).unwrap();
    assert_eq!(creds.database_path, PathBuf::from("/var/lib/sportseed.db"));

    std::fs::remove_file(file).unwrap();
  }

  #[test]
  fn missing_file_is_an_error() {
    let missing = std::env::temp_dir().join("sportseed-creds-does-not-exist.json");
    let err = StoreCredentials::resolve(None, &missing).unwrap_err();
    assert!(matches!(err, CredentialsError::Read { .. }));
  }

  #[test]
  fn malformed_json_is_an_error() {
    let err = StoreCredentials::resolve(Some("{not json"), Path::new("unused")).unwrap_err();
    assert!(matches!(err, CredentialsError::Parse(_)));
  }
}
