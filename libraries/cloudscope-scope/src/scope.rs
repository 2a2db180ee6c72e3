/// The SoundCloud scope: search and preview entry points
use crate::mapper::ResultMapper;
use crate::router::QueryRouter;
use crate::settings::ScopeSettings;
use async_trait::async_trait;
use cloudscope_core::{
    AccountSession, CategorisedResult, Category, PreviewReply, PushStatus, Result, Route, Scope,
    ScopeError, SearchQuery, SearchReply, SearchResult, Track, TrackFeed, LOGIN_NAG_TEMPLATE,
    SEARCH_CATEGORY_TEMPLATE,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Category holding the login prompt
pub const NAG_CATEGORY: &str = "nag";

/// Category holding track results
pub const TRACKS_CATEGORY: &str = "soundcloud";

pub const TRACKS_CATEGORY_TITLE: &str = "SoundCloud";

/// Search and preview over the upstream track API.
///
/// Holds no per-query state; concurrent searches share nothing but the
/// injected collaborators.
pub struct SoundCloudScope {
    feed: Arc<dyn TrackFeed>,
    session: Arc<dyn AccountSession>,
    router: QueryRouter,
    mapper: ResultMapper,
    settings: ScopeSettings,
}

impl SoundCloudScope {
    pub fn new(
        settings: ScopeSettings,
        feed: Arc<dyn TrackFeed>,
        session: Arc<dyn AccountSession>,
    ) -> Self {
        Self {
            feed,
            session,
            router: QueryRouter::new(settings.account_mode),
            mapper: ResultMapper::new(settings.client_id.clone()),
            settings,
        }
    }

    pub fn settings(&self) -> &ScopeSettings {
        &self.settings
    }

    pub fn mapper(&self) -> &ResultMapper {
        &self.mapper
    }

    /// Preview a result handed over as a host attribute bag.
    pub async fn preview_attributes(
        &self,
        attributes: &Map<String, Value>,
        reply: &dyn PreviewReply,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let result = SearchResult::from_attributes(attributes)?;
        self.preview(&result, reply, cancel).await
    }

    async fn fetch(&self, route: &Route, cancel: &CancellationToken) -> Result<Vec<Track>> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ScopeError::Cancelled),
            tracks = self.feed.fetch(route) => tracks,
        }
    }
}

#[async_trait]
impl Scope for SoundCloudScope {
    #[instrument(skip_all, fields(query = %query.text()))]
    async fn search(
        &self,
        query: &SearchQuery,
        reply: &dyn SearchReply,
        cancel: &CancellationToken,
    ) -> Result<()> {
        ensure_live(cancel)?;

        if !self.settings.remote_content {
            debug!("Remote content disabled, skipping search");
            return Ok(());
        }

        let plan = self.router.route(query.text(), self.session.as_ref());
        debug!(endpoint = %plan.route.endpoint, login_prompt = plan.login_prompt, "Routed query");

        let tracks = match self.fetch(&plan.route, cancel).await {
            Ok(tracks) => tracks,
            Err(ScopeError::Cancelled) => return Err(ScopeError::Cancelled),
            Err(e) => {
                warn!(error = %e, endpoint = %plan.route.endpoint, "Search failed");
                return Err(e);
            }
        };

        if plan.login_prompt {
            let nag = reply.register_category(Category::new(NAG_CATEGORY, "", LOGIN_NAG_TEMPLATE));
            let prompt = self.mapper.login_prompt(&self.settings.provider, query);
            push_checked(reply, CategorisedResult::login_prompt(&nag, prompt), cancel).await?;
        }

        let category = reply.register_category(Category::new(
            TRACKS_CATEGORY,
            TRACKS_CATEGORY_TITLE,
            SEARCH_CATEGORY_TEMPLATE,
        ));
        for result in self.mapper.map_tracks(&tracks) {
            push_checked(reply, CategorisedResult::track(&category, result), cancel).await?;
        }

        info!(results = tracks.len(), "Search complete");
        Ok(())
    }

    #[instrument(skip_all, fields(uri = %result.uri))]
    async fn preview(
        &self,
        result: &SearchResult,
        reply: &dyn PreviewReply,
        cancel: &CancellationToken,
    ) -> Result<()> {
        ensure_live(cancel)?;

        let payload = self.mapper.preview(result).map_err(|e| {
            warn!(error = %e, "Cannot build preview");
            e
        })?;

        ensure_live(cancel)?;
        reply.push_widgets(payload).await
    }
}

fn ensure_live(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(ScopeError::Cancelled);
    }
    Ok(())
}

/// Push one result, stopping as soon as either side has cancelled.
async fn push_checked(
    reply: &dyn SearchReply,
    result: CategorisedResult,
    cancel: &CancellationToken,
) -> Result<()> {
    ensure_live(cancel)?;
    match reply.push(result).await? {
        PushStatus::Accepted => Ok(()),
        PushStatus::Cancelled => {
            debug!("Host cancelled the query");
            Err(ScopeError::Cancelled)
        }
    }
}
