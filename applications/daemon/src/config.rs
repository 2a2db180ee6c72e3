/// Daemon configuration
use crate::error::{DaemonError, Result};
use cloudscope_api::ApiConfig;
use cloudscope_scope::ScopeSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "cloudscope.toml";

/// Prefix of environment overrides, e.g. `CLOUDSCOPE_API__CLIENT_ID`
pub const ENV_PREFIX: &str = "CLOUDSCOPE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DaemonConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub scope: ScopeSettings,

    #[serde(default)]
    pub accounts: AccountSettings,
}

/// Credentials handed to the session at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccountSettings {
    /// Token delivered through the credential watcher before searching
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default = "default_account_id")]
    pub account_id: String,

    /// How long to wait for the first delivery to land
    #[serde(default = "default_settle_timeout_ms")]
    pub settle_timeout_ms: u64,
}

impl AccountSettings {
    pub fn settle_timeout(&self) -> Duration {
        Duration::from_millis(self.settle_timeout_ms)
    }
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            access_token: None,
            account_id: default_account_id(),
            settle_timeout_ms: default_settle_timeout_ms(),
        }
    }
}

impl DaemonConfig {
    /// Load configuration from file and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, environment())
    }

    /// Load with an explicit environment source
    pub fn load_with(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(DaemonError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        let config = settings.add_source(env).build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.client_id.is_empty() {
            return Err(DaemonError::Config(
                "client id is required (set CLOUDSCOPE_API__CLIENT_ID)".to_string(),
            ));
        }

        if self.accounts.account_id.is_empty() {
            return Err(DaemonError::Config("account id must not be empty".to_string()));
        }

        Ok(())
    }

    /// Scope settings, inheriting the API client id when none is set
    pub fn scope_settings(&self) -> ScopeSettings {
        let mut scope = self.scope.clone();
        if scope.client_id.is_empty() {
            scope.client_id = self.api.client_id.clone();
        }
        scope
    }
}

/// `CLOUDSCOPE_` environment overrides, `__` between nested keys
pub fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn default_account_id() -> String {
    "default".to_string()
}

fn default_settle_timeout_ms() -> u64 {
    2000
}
