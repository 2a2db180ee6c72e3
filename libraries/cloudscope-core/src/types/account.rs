/// Account-linking types: login prompt, session state, delivered credentials
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the host should do after a login attempt finishes.
///
/// Serialized as the host's integer enum values (1, 2, 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LoginAction {
    /// Leave the current results in place
    DoNothing,
    /// Drop the current results and re-run the search
    InvalidateResults,
    /// Carry on with the activation that triggered the login
    ContinueActivation,
}

impl From<LoginAction> for u8 {
    fn from(action: LoginAction) -> Self {
        match action {
            LoginAction::DoNothing => 1,
            LoginAction::InvalidateResults => 2,
            LoginAction::ContinueActivation => 3,
        }
    }
}

impl TryFrom<u8> for LoginAction {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::DoNothing),
            2 => Ok(Self::InvalidateResults),
            3 => Ok(Self::ContinueActivation),
            other => Err(format!("unknown login action: {}", other)),
        }
    }
}

/// The account provider a scope links against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProvider {
    pub service_name: String,
    pub service_type: String,
    pub provider_name: String,
}

impl AccountProvider {
    pub fn new(
        service_name: impl Into<String>,
        service_type: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            service_type: service_type.into(),
            provider_name: provider_name.into(),
        }
    }

    /// The SoundCloud sharing provider
    pub fn soundcloud() -> Self {
        Self::new("soundcloud", "sharing", "soundcloud")
    }
}

impl Default for AccountProvider {
    fn default() -> Self {
        Self::soundcloud()
    }
}

/// Account-linking metadata attached to a login prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetails {
    pub service_name: String,
    pub service_type: String,
    pub provider_name: String,
    pub login_passed_action: LoginAction,
    pub login_failed_action: LoginAction,
}

/// Synthetic result asking the user to link an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPrompt {
    pub uri: String,
    pub title: String,
    #[serde(rename = "online_account_details")]
    pub details: AccountDetails,
}

/// Snapshot of one enabled account service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceState {
    pub account_id: String,
    pub access_token: String,
    /// Set while the service is in an error state
    pub error: Option<String>,
}

impl ServiceState {
    /// A healthy service holding `access_token`
    pub fn active(account_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            access_token: access_token.into(),
            error: None,
        }
    }

    /// A service in an error state
    pub fn failed(account_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            access_token: String::new(),
            error: Some(error.into()),
        }
    }

    /// The access token, if the service is error-free and holds one
    pub fn usable_token(&self) -> Option<&str> {
        if self.error.is_some() || self.access_token.is_empty() {
            None
        } else {
            Some(&self.access_token)
        }
    }
}

/// Credentials delivered by the native account subsystem
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthData {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub access_token: Option<String>,
}

/// Opaque key identifying one credential watch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchHandle(u64);

impl WatchHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WatchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "watch-{}", self.0)
    }
}
