/// Collaborator traits for Cloudscope
use crate::error::Result;
use crate::types::{
    CategorisedResult, Category, CategoryHandle, PreviewPayload, PushStatus, Route, SearchQuery,
    SearchResult, ServiceState, Track,
};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Upstream track source
///
/// Implementers perform the HTTP fetch described by a `Route` and decode the
/// response into tracks, preserving upstream order.
#[async_trait]
pub trait TrackFeed: Send + Sync {
    /// Fetch the tracks for `route`
    ///
    /// # Errors
    /// Transport, status and decode failures; nothing partial is returned.
    async fn fetch(&self, route: &Route) -> Result<Vec<Track>>;
}

/// Account subsystem collaborator
///
/// Supplies the enabled services of the watched provider. Both methods are
/// synchronous reads of already-materialized state; `refresh` may perform one
/// blocking round-trip to the account subsystem.
pub trait AccountSession: Send + Sync {
    /// Enabled services, first one preferred
    fn enabled_services(&self) -> Vec<ServiceState>;

    /// Ask the account subsystem to refresh `account_id` and return its new state
    fn refresh(&self, account_id: &str, interactive: bool) -> ServiceState;
}

/// Host-side sink for search results
#[async_trait]
pub trait SearchReply: Send + Sync {
    /// Register a category and get the handle results are pushed under
    fn register_category(&self, category: Category) -> CategoryHandle;

    /// Push one result
    ///
    /// Returns `PushStatus::Cancelled` once the host has lost interest in this query.
    async fn push(&self, result: CategorisedResult) -> Result<PushStatus>;
}

/// Host-side sink for preview widgets
#[async_trait]
pub trait PreviewReply: Send + Sync {
    /// Push the full widget set of one preview
    async fn push_widgets(&self, payload: PreviewPayload) -> Result<()>;
}

/// The capability a host runtime drives: one Search and one Preview entry point
///
/// Host schema versions are adapted onto this interface at the boundary.
#[async_trait]
pub trait Scope: Send + Sync {
    /// Run a search, pushing results into `reply`
    async fn search(
        &self,
        query: &SearchQuery,
        reply: &dyn SearchReply,
        cancel: &CancellationToken,
    ) -> Result<()>;

    /// Build and push the preview of `result`
    async fn preview(
        &self,
        result: &SearchResult,
        reply: &dyn PreviewReply,
        cancel: &CancellationToken,
    ) -> Result<()>;
}
