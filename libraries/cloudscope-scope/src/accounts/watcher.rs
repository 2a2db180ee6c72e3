//! Credential watcher lifecycle
//!
//! The native account subsystem hands credentials to a `DeliverySink`. A
//! single background task, started once at process init, drains the sink
//! into the `CredentialRegistry`. `shutdown` stops the task and waits for it.

use super::registry::{CredentialRegistry, Registration};
use cloudscope_core::{AuthData, WatchHandle};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// One credential set as delivered by the native side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeDelivery {
    pub handle: WatchHandle,
    pub data: AuthData,
}

/// Entry point the native side delivers credentials through
#[derive(Debug, Clone)]
pub struct DeliverySink {
    tx: mpsc::UnboundedSender<NativeDelivery>,
}

impl DeliverySink {
    /// Queue a delivery. Returns false once the watcher has shut down.
    pub fn deliver(&self, handle: WatchHandle, data: AuthData) -> bool {
        self.tx.send(NativeDelivery { handle, data }).is_ok()
    }
}

/// Owns the delivery loop
pub struct CredentialWatcher {
    registry: CredentialRegistry,
    sink: DeliverySink,
    shutdown: CancellationToken,
    task: JoinHandle<()>,
}

impl CredentialWatcher {
    /// Start the delivery loop on the current runtime.
    pub fn start(registry: CredentialRegistry) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        let task = tokio::spawn(run_delivery_loop(registry.clone(), rx, shutdown.clone()));
        info!("Credential watcher started");

        Self {
            registry,
            sink: DeliverySink { tx },
            shutdown,
            task,
        }
    }

    pub fn sink(&self) -> DeliverySink {
        self.sink.clone()
    }

    pub fn registry(&self) -> &CredentialRegistry {
        &self.registry
    }

    /// Register a watch for `service_name` credentials.
    pub fn watch_for_service(
        &self,
        service_name: &str,
    ) -> (Registration, oneshot::Receiver<AuthData>) {
        let (registration, rx) = self.registry.register();
        debug!(service = service_name, handle = %registration.handle(), "Watching for credentials");
        (registration, rx)
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the loop and wait for it to exit. Pending deliveries are dropped.
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        if let Err(e) = self.task.await {
            warn!(error = %e, "Credential watcher task failed");
        }
        info!("Credential watcher stopped");
    }
}

async fn run_delivery_loop(
    registry: CredentialRegistry,
    mut rx: mpsc::UnboundedReceiver<NativeDelivery>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            delivery = rx.recv() => match delivery {
                Some(NativeDelivery { handle, data }) => {
                    registry.deliver(handle, data);
                }
                None => break,
            },
        }
    }
}
