/// Result mapping: upstream tracks to host results and preview widgets
use cloudscope_core::{
    AccountDetails, AccountProvider, ActionInfo, LoginAction, LoginPrompt, PreviewPayload,
    PreviewWidget, Result, SearchQuery, SearchResult, Track, TrackAttributes, TrackInfo,
    WidgetKind,
};

/// Icon shown on the play button
pub const PROVIDER_ICON: &str = "/usr/share/icons/unity-icon-theme/places/svg/service-soundcloud.svg";

/// Title of the login prompt card
pub const LOGIN_TITLE: &str = "Log in to SoundCloud";

/// Builds host results and previews. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct ResultMapper {
    client_id: String,
}

impl ResultMapper {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
        }
    }

    pub fn map_track(&self, track: &Track) -> SearchResult {
        SearchResult {
            uri: track.permalink_url.clone(),
            title: track.title.clone(),
            art: track.art_url().to_string(),
            attributes: TrackAttributes {
                duration: track.duration,
                username: track.user.username.clone(),
                label: track.label_name.clone().unwrap_or_default(),
                description: track.description.clone().unwrap_or_default(),
                stream_url: track.stream_url.clone().unwrap_or_default(),
                purchase_url: non_empty(track.purchase_url.as_deref()),
                video_url: non_empty(track.video_url.as_deref()),
            },
        }
    }

    /// One result per track, in upstream order.
    pub fn map_tracks(&self, tracks: &[Track]) -> Vec<SearchResult> {
        tracks.iter().map(|track| self.map_track(track)).collect()
    }

    /// Pseudo-result offering account linking.
    ///
    /// A successful login invalidates the anonymous results so the host
    /// re-runs `query`; a failed one leaves them in place.
    pub fn login_prompt(&self, provider: &AccountProvider, query: &SearchQuery) -> LoginPrompt {
        LoginPrompt {
            uri: query.to_uri(),
            title: LOGIN_TITLE.to_string(),
            details: AccountDetails {
                service_name: provider.service_name.clone(),
                service_type: provider.service_type.clone(),
                provider_name: provider.provider_name.clone(),
                login_passed_action: LoginAction::InvalidateResults,
                login_failed_action: LoginAction::DoNothing,
            },
        }
    }

    /// The five preview widgets for `result`.
    ///
    /// Fails with `MissingAttribute` when the result has no stream URL.
    pub fn preview(&self, result: &SearchResult) -> Result<PreviewPayload> {
        let stream_url = result.require_stream_url()?;

        let track = TrackInfo {
            title: result.title.clone(),
            length: result.attributes.duration / 1000,
            source: self.stream_source(stream_url),
        };

        let mut actions = vec![ActionInfo {
            id: "play".into(),
            label: "Play".into(),
            icon: Some(PROVIDER_ICON.into()),
            uri: None,
        }];
        if let Some(url) = result.purchase_url() {
            actions.push(ActionInfo {
                id: "buy".into(),
                label: "Buy".into(),
                icon: None,
                uri: Some(url.into()),
            });
        }
        if let Some(url) = result.video_url() {
            actions.push(ActionInfo {
                id: "video".into(),
                label: "Watch video".into(),
                icon: None,
                uri: Some(url.into()),
            });
        }

        Ok(PreviewPayload {
            header: PreviewWidget::new(
                "header",
                WidgetKind::Header {
                    title: "title".into(),
                    subtitle: "username".into(),
                },
            ),
            art: PreviewWidget::new(
                "art",
                WidgetKind::Image {
                    source: "art".into(),
                },
            ),
            tracks: PreviewWidget::new("tracks", WidgetKind::Audio { tracks: vec![track] }),
            actions: PreviewWidget::new("actions", WidgetKind::Actions { actions }),
            description: PreviewWidget::new(
                "description",
                WidgetKind::Text {
                    text: "description".into(),
                },
            ),
        })
    }

    /// Playable URL: the stream URL with the client credential appended.
    pub fn stream_source(&self, stream_url: &str) -> String {
        let separator = if stream_url.contains('?') { '&' } else { '?' };
        format!("{}{}client_id={}", stream_url, separator, self.client_id)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
