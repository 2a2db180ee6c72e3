/// Scope settings
use cloudscope_core::AccountProvider;
use serde::{Deserialize, Serialize};

/// Whether the scope integrates with linked accounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountMode {
    /// Empty queries show the linked account's favorites, or a login prompt
    #[default]
    Linked,
    /// Legacy behaviour: never read the session, never prompt for login
    Anonymous,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScopeSettings {
    /// Client credential appended to playable stream URLs
    #[serde(default)]
    pub client_id: String,

    #[serde(default)]
    pub provider: AccountProvider,

    #[serde(default)]
    pub account_mode: AccountMode,

    /// When false, searches return nothing and never hit the network
    #[serde(default = "default_remote_content")]
    pub remote_content: bool,
}

impl ScopeSettings {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    pub fn with_account_mode(mut self, mode: AccountMode) -> Self {
        self.account_mode = mode;
        self
    }
}

impl Default for ScopeSettings {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            provider: AccountProvider::default(),
            account_mode: AccountMode::default(),
            remote_content: default_remote_content(),
        }
    }
}

fn default_remote_content() -> bool {
    true
}
