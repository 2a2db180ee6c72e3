//! Cloudscope Scope
//!
//! The search-and-preview pipeline of the Cloudscope connector.
//!
//! # Architecture
//!
//! A search flows through two stateless components:
//! - **QueryRouter**: picks the upstream endpoint and parameters from the
//!   query text and the current account session
//! - **ResultMapper**: turns upstream tracks into host results, synthesizes
//!   the login prompt, and builds preview widgets
//!
//! `SoundCloudScope` composes them behind the `Scope` capability and owns
//! cancellation. The `accounts` module holds the account-side plumbing:
//! the credential registry, the watcher lifecycle and an in-memory session.
//!
//! # Example
//!
//! ```ignore
//! use cloudscope_scope::{ScopeSettings, SoundCloudScope};
//! use cloudscope_scope::accounts::SessionStore;
//!
//! let scope = SoundCloudScope::new(
//!     ScopeSettings::new("my-client-id"),
//!     Arc::new(api_client),
//!     Arc::new(SessionStore::new()),
//! );
//! scope.search(&SearchQuery::new("jazz"), &reply, &cancel).await?;
//! ```

pub mod accounts;
mod mapper;
mod router;
mod scope;
mod settings;

pub use mapper::{ResultMapper, LOGIN_TITLE, PROVIDER_ICON};
pub use router::{resolve_access_token, QueryRouter, RoutePlan, ORDER_HOTNESS, RESULT_LIMIT};
pub use scope::{SoundCloudScope, NAG_CATEGORY, TRACKS_CATEGORY, TRACKS_CATEGORY_TITLE};
pub use settings::{AccountMode, ScopeSettings};
