//! Search and preview behaviour of the scope against mocked collaborators.

mod common;

use async_trait::async_trait;
use cloudscope_core::{
    AccountSession, Endpoint, LoginAction, Route, Scope, ScopeError, SearchQuery, SearchResult,
    ServiceState, Track, TrackFeed, LOGIN_NAG_TEMPLATE, SEARCH_CATEGORY_TEMPLATE,
};
use cloudscope_scope::{
    AccountMode, ScopeSettings, SoundCloudScope, LOGIN_TITLE, NAG_CATEGORY, TRACKS_CATEGORY,
    TRACKS_CATEGORY_TITLE,
};
use common::{track, RecordingReply};
use mockall::mock;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

mock! {
    Feed {}

    #[async_trait]
    impl TrackFeed for Feed {
        async fn fetch(&self, route: &Route) -> cloudscope_core::Result<Vec<Track>>;
    }
}

mock! {
    Session {}

    impl AccountSession for Session {
        fn enabled_services(&self) -> Vec<ServiceState>;
        fn refresh(&self, account_id: &str, interactive: bool) -> ServiceState;
    }
}

fn scope_with(settings: ScopeSettings, feed: MockFeed, session: MockSession) -> SoundCloudScope {
    SoundCloudScope::new(settings, Arc::new(feed), Arc::new(session))
}

fn settings() -> ScopeSettings {
    ScopeSettings::new("cid")
}

fn feed_returning(tracks: Vec<Track>) -> MockFeed {
    let mut feed = MockFeed::new();
    feed.expect_fetch().times(1).return_once(move |_| Ok(tracks));
    feed
}

fn idle_session() -> MockSession {
    let mut session = MockSession::new();
    session.expect_enabled_services().never();
    session.expect_refresh().never();
    session
}

fn logged_out_session() -> MockSession {
    let mut session = MockSession::new();
    session.expect_enabled_services().return_const(Vec::new());
    session.expect_refresh().never();
    session
}

// =============================================================================
// Search
// =============================================================================

mod search {
    use super::*;

    #[tokio::test]
    async fn keyword_search_pushes_tracks_in_order() {
        let scope = scope_with(
            settings(),
            feed_returning(vec![track(2, "B"), track(1, "A"), track(3, "C")]),
            idle_session(),
        );
        let reply = RecordingReply::new();

        scope
            .search(&SearchQuery::new("jazz"), &reply, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(reply.track_titles(), ["B", "A", "C"]);

        let categories = reply.categories();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, TRACKS_CATEGORY);
        assert_eq!(categories[0].title, TRACKS_CATEGORY_TITLE);
        assert_eq!(categories[0].renderer, SEARCH_CATEGORY_TEMPLATE);
    }

    #[tokio::test]
    async fn keyword_search_requests_tracks_endpoint() {
        let mut feed = MockFeed::new();
        feed.expect_fetch()
            .withf(|route| {
                route.endpoint == Endpoint::Tracks
                    && route.param("q") == Some("jazz")
                    && route.param("limit") == Some("30")
                    && route.param("order") == Some("hotness")
            })
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let scope = scope_with(settings(), feed, idle_session());
        let reply = RecordingReply::new();

        scope
            .search(&SearchQuery::new("jazz"), &reply, &CancellationToken::new())
            .await
            .unwrap();
        assert!(reply.pushed().is_empty());
    }

    #[tokio::test]
    async fn empty_query_without_account_prompts_first() {
        let scope = scope_with(
            settings(),
            feed_returning(vec![track(1, "Trending")]),
            logged_out_session(),
        );
        let reply = RecordingReply::new();

        scope
            .search(&SearchQuery::home(), &reply, &CancellationToken::new())
            .await
            .unwrap();

        let pushed = reply.pushed();
        assert_eq!(pushed.len(), 2);

        let prompt = pushed[0].as_login_prompt().expect("login prompt first");
        assert_eq!(pushed[0].category.as_str(), NAG_CATEGORY);
        assert_eq!(prompt.title, LOGIN_TITLE);
        assert_eq!(prompt.uri, "scope://soundcloud?q=");
        assert_eq!(prompt.details.login_passed_action, LoginAction::InvalidateResults);
        assert_eq!(prompt.details.login_failed_action, LoginAction::DoNothing);

        assert_eq!(pushed[1].as_track().map(|t| t.title.as_str()), Some("Trending"));
        assert_eq!(pushed[1].category.as_str(), TRACKS_CATEGORY);

        let categories = reply.categories();
        assert_eq!(categories[0].id, NAG_CATEGORY);
        assert_eq!(categories[0].renderer, LOGIN_NAG_TEMPLATE);
        assert_eq!(categories[1].renderer, SEARCH_CATEGORY_TEMPLATE);
    }

    #[tokio::test]
    async fn empty_query_with_token_reads_favorites_without_prompt() {
        let mut session = MockSession::new();
        session
            .expect_enabled_services()
            .return_const(vec![ServiceState::active("acct-1", "tok")]);
        session.expect_refresh().never();

        let mut feed = MockFeed::new();
        feed.expect_fetch()
            .withf(|route| {
                route.endpoint == Endpoint::MyFavorites && route.param("oauth_token") == Some("tok")
            })
            .times(1)
            .returning(|_| Ok(vec![track(7, "Liked")]));

        let scope = scope_with(settings(), feed, session);
        let reply = RecordingReply::new();

        scope
            .search(&SearchQuery::home(), &reply, &CancellationToken::new())
            .await
            .unwrap();

        assert!(reply.pushed().iter().all(|r| r.as_login_prompt().is_none()));
        assert_eq!(reply.track_titles(), ["Liked"]);
    }

    #[tokio::test]
    async fn anonymous_mode_never_prompts() {
        let scope = scope_with(
            settings().with_account_mode(AccountMode::Anonymous),
            feed_returning(vec![track(1, "Trending")]),
            idle_session(),
        );
        let reply = RecordingReply::new();

        scope
            .search(&SearchQuery::home(), &reply, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(reply.pushed().len(), 1);
        assert!(reply.categories().iter().all(|c| c.id != NAG_CATEGORY));
    }

    #[tokio::test]
    async fn failed_fetch_pushes_nothing() {
        let mut feed = MockFeed::new();
        feed.expect_fetch()
            .times(1)
            .returning(|_| Err(ScopeError::transport("connection reset")));

        let scope = scope_with(settings(), feed, logged_out_session());
        let reply = RecordingReply::new();

        let result = scope
            .search(&SearchQuery::home(), &reply, &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(ScopeError::Transport(_))));
        assert!(reply.pushed().is_empty());
    }

    #[tokio::test]
    async fn remote_content_disabled_skips_fetch() {
        let mut feed = MockFeed::new();
        feed.expect_fetch().never();

        let mut settings = settings();
        settings.remote_content = false;

        let scope = scope_with(settings, feed, idle_session());
        let reply = RecordingReply::new();

        scope
            .search(&SearchQuery::new("jazz"), &reply, &CancellationToken::new())
            .await
            .unwrap();
        assert!(reply.pushed().is_empty());
        assert!(reply.categories().is_empty());
    }
}

// =============================================================================
// Cancellation
// =============================================================================

mod cancellation {
    use super::*;

    #[tokio::test]
    async fn cancelled_before_search_skips_fetch() {
        let mut feed = MockFeed::new();
        feed.expect_fetch().never();

        let scope = scope_with(settings(), feed, idle_session());
        let reply = RecordingReply::new();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = scope.search(&SearchQuery::new("jazz"), &reply, &cancel).await;
        assert!(matches!(result, Err(ScopeError::Cancelled)));
        assert!(reply.pushed().is_empty());
    }

    #[tokio::test]
    async fn host_cancellation_stops_pushing() {
        let scope = scope_with(
            settings(),
            feed_returning(vec![track(1, "A"), track(2, "B"), track(3, "C")]),
            idle_session(),
        );
        let reply = RecordingReply::cancel_after(1);

        let result = scope
            .search(&SearchQuery::new("jazz"), &reply, &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(ScopeError::Cancelled)));
        assert_eq!(reply.track_titles(), ["A"]);
    }

    #[tokio::test]
    async fn in_flight_fetch_is_abandoned() {
        struct StalledFeed;

        #[async_trait]
        impl TrackFeed for StalledFeed {
            async fn fetch(&self, _route: &Route) -> cloudscope_core::Result<Vec<Track>> {
                std::future::pending().await
            }
        }

        let scope = SoundCloudScope::new(settings(), Arc::new(StalledFeed), Arc::new(idle_session()));
        let reply = RecordingReply::new();
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            trigger.cancel();
        });

        let result = scope.search(&SearchQuery::new("jazz"), &reply, &cancel).await;
        assert!(matches!(result, Err(ScopeError::Cancelled)));
        assert!(reply.pushed().is_empty());
    }
}

// =============================================================================
// Preview
// =============================================================================

mod preview {
    use super::*;

    fn preview_scope() -> SoundCloudScope {
        let mut feed = MockFeed::new();
        feed.expect_fetch().never();
        scope_with(settings(), feed, idle_session())
    }

    #[tokio::test]
    async fn preview_pushes_widgets() {
        let scope = preview_scope();
        let result = scope.mapper().map_track(&track(300, "Take Five"));
        let reply = RecordingReply::new();

        scope
            .preview(&result, &reply, &CancellationToken::new())
            .await
            .unwrap();

        let previews = reply.previews();
        assert_eq!(previews.len(), 1);
        let tracks = previews[0].audio_tracks();
        assert_eq!(tracks[0].length, 300);
        assert_eq!(tracks[0].source, "http://s/300?client_id=cid");
    }

    #[tokio::test]
    async fn preview_without_stream_url_pushes_nothing() {
        let scope = preview_scope();
        let mut track = track(1, "Silent");
        track.stream_url = None;
        let result = scope.mapper().map_track(&track);
        let reply = RecordingReply::new();

        let outcome = scope
            .preview(&result, &reply, &CancellationToken::new())
            .await;

        assert!(matches!(outcome, Err(ScopeError::MissingAttribute(ref name)) if name == "stream-url"));
        assert!(reply.previews().is_empty());
    }

    #[tokio::test]
    async fn preview_from_host_attributes() {
        let scope = preview_scope();
        let mut track = track(5, "Bagged");
        track.video_url = Some("http://v/5".into());
        let attributes = scope.mapper().map_track(&track).to_attributes();
        let reply = RecordingReply::new();

        scope
            .preview_attributes(&attributes, &reply, &CancellationToken::new())
            .await
            .unwrap();

        let previews = reply.previews();
        let ids: Vec<&str> = previews[0]
            .action_buttons()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, ["play", "video"]);
    }

    #[tokio::test]
    async fn attributes_missing_title_are_rejected() {
        let scope = preview_scope();
        let mut attributes = scope.mapper().map_track(&track(5, "x")).to_attributes();
        attributes.remove("title");
        let reply = RecordingReply::new();

        let outcome = scope
            .preview_attributes(&attributes, &reply, &CancellationToken::new())
            .await;

        assert!(matches!(outcome, Err(ScopeError::MissingAttribute(ref name)) if name == "title"));
        assert!(reply.previews().is_empty());
    }

    #[tokio::test]
    async fn cancelled_preview_pushes_nothing() {
        let scope = preview_scope();
        let result: SearchResult = scope.mapper().map_track(&track(1, "A"));
        let reply = RecordingReply::new();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let outcome = scope.preview(&result, &reply, &cancel).await;
        assert!(matches!(outcome, Err(ScopeError::Cancelled)));
        assert!(reply.previews().is_empty());
    }
}
