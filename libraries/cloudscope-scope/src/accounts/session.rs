//! In-memory account sessions

use cloudscope_core::{AccountSession, AuthData, ServiceState};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

/// Session backed by credentials the watcher has delivered.
///
/// Services keep insertion order; the first one is preferred by the router.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    services: Arc<RwLock<Vec<ServiceState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize delivered credentials for `account_id`.
    ///
    /// A delivery without an access token leaves the service in an error state.
    pub fn apply(&self, account_id: &str, data: AuthData) {
        let state = match data.access_token.filter(|token| !token.is_empty()) {
            Some(token) => ServiceState::active(account_id, token),
            None => ServiceState::failed(account_id, "no access token delivered"),
        };
        info!(account_id, healthy = state.error.is_none(), "Account credentials updated");
        self.upsert(state);
    }

    pub fn mark_failed(&self, account_id: &str, error: impl Into<String>) {
        self.upsert(ServiceState::failed(account_id, error));
    }

    /// Drop `account_id`, returning whether it was present
    pub fn remove(&self, account_id: &str) -> bool {
        let mut services = self.services.write().unwrap_or_else(PoisonError::into_inner);
        let before = services.len();
        services.retain(|s| s.account_id != account_id);
        services.len() != before
    }

    /// Wait for one delivery on `receiver` and apply it to `account_id`.
    ///
    /// Returns false when the watch was dropped without a delivery.
    pub async fn follow(&self, receiver: oneshot::Receiver<AuthData>, account_id: &str) -> bool {
        match receiver.await {
            Ok(data) => {
                self.apply(account_id, data);
                true
            }
            Err(_) => {
                debug!(account_id, "Credential watch closed without delivery");
                false
            }
        }
    }

    fn upsert(&self, state: ServiceState) {
        let mut services = self.services.write().unwrap_or_else(PoisonError::into_inner);
        match services.iter_mut().find(|s| s.account_id == state.account_id) {
            Some(existing) => *existing = state,
            None => services.push(state),
        }
    }

    fn get(&self, account_id: &str) -> Option<ServiceState> {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|s| s.account_id == account_id)
            .cloned()
    }
}

impl AccountSession for SessionStore {
    fn enabled_services(&self) -> Vec<ServiceState> {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Re-reads the latest materialized state; a delivery that arrived after
    /// the failure is what makes a refresh succeed.
    fn refresh(&self, account_id: &str, interactive: bool) -> ServiceState {
        debug!(account_id, interactive, "Refreshing account");
        self.get(account_id).unwrap_or_else(|| {
            warn!(account_id, "Refresh requested for unknown account");
            ServiceState::failed(account_id, "unknown account")
        })
    }
}

/// Session with no account subsystem behind it
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAccounts;

impl AccountSession for NoAccounts {
    fn enabled_services(&self) -> Vec<ServiceState> {
        Vec::new()
    }

    fn refresh(&self, account_id: &str, _interactive: bool) -> ServiceState {
        ServiceState::failed(account_id, "no account subsystem")
    }
}
