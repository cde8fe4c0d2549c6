//! Error types for `sportseed-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The existing-names snapshot could not be read, so no ingest was
  /// attempted.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
