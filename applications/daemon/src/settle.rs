/// Startup credential settling
use crate::config::AccountSettings;
use cloudscope_core::{AccountProvider, AuthData};
use cloudscope_scope::accounts::{CredentialWatcher, SessionStore};
use tracing::{debug, info, warn};

/// Deliver the configured token through the watcher and wait, bounded by the
/// settle timeout, for it to land in `session`.
///
/// Returns whether the session holds the delivered credentials. Without a
/// configured token there is nothing to wait for and the session stays empty.
pub async fn settle_accounts(
    watcher: &CredentialWatcher,
    session: &SessionStore,
    provider: &AccountProvider,
    accounts: &AccountSettings,
) -> bool {
    let Some(token) = accounts.access_token.clone().filter(|t| !t.is_empty()) else {
        debug!("No access token configured, running logged out");
        return false;
    };

    let (registration, rx) = watcher.watch_for_service(&provider.service_name);
    let data = AuthData {
        access_token: Some(token),
        ..AuthData::default()
    };
    if !watcher.sink().deliver(registration.handle(), data) {
        warn!("Credential watcher is not running");
        return false;
    }

    match tokio::time::timeout(
        accounts.settle_timeout(),
        session.follow(rx, &accounts.account_id),
    )
    .await
    {
        Ok(settled) => {
            info!(account_id = %accounts.account_id, settled, "Accounts settled");
            settled
        }
        Err(_) => {
            warn!(
                timeout_ms = accounts.settle_timeout_ms,
                "Timed out waiting for credentials"
            );
            false
        }
    }
}
