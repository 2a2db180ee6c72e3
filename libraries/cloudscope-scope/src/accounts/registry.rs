//! Credential registry: watch handles to one-shot delivery channels

use cloudscope_core::{AuthData, WatchHandle};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Result of handing a credential to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    /// No watch is registered under the handle
    NoReceiver,
    /// The watch was registered but its receiver is gone
    ReceiverDropped,
}

/// Injectable map of pending credential watches.
///
/// Cloning shares the same map. Each handle receives at most one delivery;
/// delivering removes the entry.
#[derive(Debug, Clone, Default)]
pub struct CredentialRegistry {
    channels: Arc<Mutex<HashMap<WatchHandle, oneshot::Sender<AuthData>>>>,
    next_id: Arc<AtomicU64>,
}

impl CredentialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new watch.
    ///
    /// The returned guard deregisters the handle when dropped.
    pub fn register(&self) -> (Registration, oneshot::Receiver<AuthData>) {
        let handle = WatchHandle::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let (tx, rx) = oneshot::channel();
        self.lock().insert(handle, tx);
        debug!(handle = %handle, "Registered credential watch");

        let registration = Registration {
            handle,
            registry: self.clone(),
        };
        (registration, rx)
    }

    /// Route `data` to the watch registered under `handle`.
    pub fn deliver(&self, handle: WatchHandle, data: AuthData) -> DeliveryOutcome {
        let Some(sender) = self.lock().remove(&handle) else {
            warn!(handle = %handle, "No receiver for delivered credentials, dropping");
            return DeliveryOutcome::NoReceiver;
        };

        match sender.send(data) {
            Ok(()) => {
                debug!(handle = %handle, "Delivered credentials");
                DeliveryOutcome::Delivered
            }
            Err(_) => {
                warn!(handle = %handle, "Credential receiver dropped before delivery");
                DeliveryOutcome::ReceiverDropped
            }
        }
    }

    /// Remove `handle`, returning whether it was still pending
    pub fn deregister(&self, handle: WatchHandle) -> bool {
        self.lock().remove(&handle).is_some()
    }

    pub fn contains(&self, handle: WatchHandle) -> bool {
        self.lock().contains_key(&handle)
    }

    /// Number of pending watches
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned map is still structurally valid.
    fn lock(&self) -> MutexGuard<'_, HashMap<WatchHandle, oneshot::Sender<AuthData>>> {
        self.channels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Guard tying a watch handle to its registry
#[derive(Debug)]
pub struct Registration {
    handle: WatchHandle,
    registry: CredentialRegistry,
}

impl Registration {
    pub fn handle(&self) -> WatchHandle {
        self.handle
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        if self.registry.deregister(self.handle) {
            debug!(handle = %self.handle, "Deregistered pending credential watch");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str) -> AuthData {
        AuthData {
            access_token: Some(value.into()),
            ..AuthData::default()
        }
    }

    #[tokio::test]
    async fn delivers_to_registered_watch() {
        let registry = CredentialRegistry::new();
        let (registration, rx) = registry.register();

        let outcome = registry.deliver(registration.handle(), token("tok"));
        assert_eq!(outcome, DeliveryOutcome::Delivered);
        assert_eq!(rx.await.unwrap().access_token.as_deref(), Some("tok"));

        // one-shot: the entry is gone after delivery
        assert!(!registry.contains(registration.handle()));
    }

    #[test]
    fn unknown_handle_has_no_receiver() {
        let registry = CredentialRegistry::new();
        let outcome = registry.deliver(WatchHandle::new(42), token("tok"));
        assert_eq!(outcome, DeliveryOutcome::NoReceiver);
    }

    #[test]
    fn second_delivery_has_no_receiver() {
        let registry = CredentialRegistry::new();
        let (registration, _rx) = registry.register();

        assert_eq!(
            registry.deliver(registration.handle(), token("a")),
            DeliveryOutcome::Delivered
        );
        assert_eq!(
            registry.deliver(registration.handle(), token("b")),
            DeliveryOutcome::NoReceiver
        );
    }

    #[test]
    fn dropped_receiver_is_reported() {
        let registry = CredentialRegistry::new();
        let (registration, rx) = registry.register();
        drop(rx);

        assert_eq!(
            registry.deliver(registration.handle(), token("tok")),
            DeliveryOutcome::ReceiverDropped
        );
    }

    #[test]
    fn dropping_registration_deregisters() {
        let registry = CredentialRegistry::new();
        let (registration, _rx) = registry.register();
        let handle = registration.handle();
        assert_eq!(registry.len(), 1);

        drop(registration);
        assert!(registry.is_empty());
        assert_eq!(
            registry.deliver(handle, token("tok")),
            DeliveryOutcome::NoReceiver
        );
    }

    #[test]
    fn handles_are_unique_across_clones() {
        let registry = CredentialRegistry::new();
        let other = registry.clone();

        let (a, _rx_a) = registry.register();
        let (b, _rx_b) = other.register();
        assert_ne!(a.handle(), b.handle());
        assert_eq!(registry.len(), 2);
    }
}
