//! Account-side plumbing
//!
//! Credentials arrive asynchronously from the native account subsystem and
//! are materialized into a `SessionStore`. Searches only ever read the store;
//! they never wait on a delivery.

mod registry;
mod session;
mod watcher;

pub use registry::{CredentialRegistry, DeliveryOutcome, Registration};
pub use session::{NoAccounts, SessionStore};
pub use watcher::{CredentialWatcher, DeliverySink, NativeDelivery};
