//! Runtime server configuration.
//!
//! Layered the usual way: an optional TOML file, then `SPORTSEED_*`
//! environment variables, then the bare `APP_ID` variable on top.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, builder::DefaultState};
use serde::Deserialize;
use sportseed_core::store::data_path;

pub const DEFAULT_APP_ID: &str = "default-app-id";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  /// Namespaces the store collections as `artifacts/{app_id}/public/data`.
  pub app_id:           String,
  pub source_url:       String,
  /// Fallback location of the store credentials when
  /// `STORE_CREDENTIALS_JSON` is unset.
  pub credentials_path: PathBuf,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:             "0.0.0.0".to_string(),
      port:             3000,
      app_id:           DEFAULT_APP_ID.to_string(),
      source_url:       sportseed_source::DEFAULT_URL.to_string(),
      credentials_path: PathBuf::from("store_credentials.json"),
    }
  }
}

impl ServerConfig {
  /// Load from `path` (which may be absent) plus the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_builder(
      Config::builder().add_source(config::File::from(path).required(false)),
      Environment::with_prefix("SPORTSEED"),
      std::env::var("APP_ID").ok(),
    )
  }

  /// Layer `env` over `builder`, then `app_id` over both.
  fn from_builder(
    builder: config::ConfigBuilder<DefaultState>,
    env: Environment,
    app_id: Option<String>,
  ) -> Result<Self, ConfigError> {
    builder
      .add_source(env)
      .set_override_option("app_id", app_id)?
      .build()?
      .try_deserialize()
  }

  pub fn namespace(&self) -> String { data_path(&self.app_id) }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}
