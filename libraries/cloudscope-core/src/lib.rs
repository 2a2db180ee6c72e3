//! Cloudscope Core
//!
//! Platform-agnostic types, collaborator traits and error handling for the
//! Cloudscope search connector.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Upstream Types**: `Track`, `User` as returned by the track-hosting API
//! - **Host Types**: `SearchResult`, `LoginPrompt`, `PreviewPayload`, `Category`
//! - **Collaborator Traits**: `TrackFeed`, `AccountSession`, `SearchReply`, `PreviewReply`, `Scope`
//! - **Error Handling**: Unified `ScopeError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cloudscope_core::types::{Endpoint, Route};
//!
//! let route = Route::new(Endpoint::Tracks)
//!     .with_param("q", "jazz")
//!     .with_param("limit", "30");
//!
//! assert_eq!(route.endpoint.path(), "/tracks");
//! assert_eq!(route.param("q"), Some("jazz"));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, ScopeError};
pub use traits::{AccountSession, PreviewReply, Scope, SearchReply, TrackFeed};

pub use types::{
    // Upstream records
    Track, User,
    // Host results
    CategorisedResult, Category, CategoryHandle, PushStatus, ResultItem, SearchQuery,
    SearchResult, TrackAttributes,
    // Accounts
    AccountDetails, AccountProvider, AuthData, LoginAction, LoginPrompt, ServiceState,
    WatchHandle,
    // Preview
    ActionInfo, PreviewPayload, PreviewWidget, TrackInfo, WidgetKind,
    // Routing
    Endpoint, Route,
    // Renderer templates and preview requirements
    LOGIN_NAG_TEMPLATE, REQUIRED_ATTRIBUTES, SEARCH_CATEGORY_TEMPLATE,
};
