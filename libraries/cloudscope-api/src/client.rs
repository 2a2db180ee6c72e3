//! Upstream track API client.

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use async_trait::async_trait;
use cloudscope_core::{Route, Track, TrackFeed};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Query parameters whose values never reach the logs
const SECRET_PARAMS: [&str; 1] = ["oauth_token"];

/// Client for the SoundCloud-style REST API.
///
/// Every request carries the configured `client_id`; routes add their own
/// parameters after it.
///
/// # Example
///
/// ```ignore
/// use cloudscope_api::{ApiConfig, SoundCloudClient};
/// use cloudscope_core::{Endpoint, Route};
///
/// let client = SoundCloudClient::new(ApiConfig::new("my-client-id"))?;
/// let route = Route::new(Endpoint::Tracks).with_param("q", "jazz");
/// let tracks = client.fetch_tracks(&route).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SoundCloudClient {
    http: Client,
    base_url: String,
    client_id: String,
}

impl SoundCloudClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            http,
            base_url,
            client_id: config.client_id,
        })
    }

    /// Normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Full request URL for `route`: `{base}{path}.json?client_id=..&{params}`.
    pub fn build_url(&self, route: &Route) -> Result<Url> {
        let raw = format!("{}{}.json", self.base_url, route.endpoint.path());
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("client_id", &self.client_id);
            for (key, value) in &route.params {
                query.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Fetch and decode the track list behind `route`.
    ///
    /// The whole body is read before decoding, so a failure yields no tracks at all.
    pub async fn fetch_tracks(&self, route: &Route) -> Result<Vec<Track>> {
        let url = self.build_url(route)?;
        debug!(url = %redact(&url), "Fetching tracks");

        let response = self.http.get(url).send().await.map_err(classify)?;
        let status = response.status();
        let body = response.bytes().await.map_err(classify)?;

        if !status.is_success() {
            let message = error_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();
            warn!(status = %status, error = %message, endpoint = %route.endpoint, "Upstream request failed");
            return Err(ApiError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let tracks: Vec<Track> = serde_json::from_slice(&body).map_err(|e| {
            ApiError::ParseError(format!("Failed to parse track list: {}", e))
        })?;

        debug!(endpoint = %route.endpoint, results = tracks.len(), "Fetched tracks");
        Ok(tracks)
    }
}

#[async_trait]
impl TrackFeed for SoundCloudClient {
    async fn fetch(&self, route: &Route) -> cloudscope_core::Result<Vec<Track>> {
        self.fetch_tracks(route).await.map_err(Into::into)
    }
}

fn classify(e: reqwest::Error) -> ApiError {
    if e.is_connect() || e.is_timeout() {
        ApiError::Unreachable(e.to_string())
    } else {
        ApiError::Request(e)
    }
}

/// Error text from an upstream error body.
///
/// Understands `{"error": ".."}` and `{"errors": [{"error_message": ".."}]}`,
/// otherwise falls back to the raw body.
fn error_message(body: &[u8]) -> Option<String> {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Some(message.to_string());
        }
        if let Some(message) = value
            .get("errors")
            .and_then(|errors| errors.get(0))
            .and_then(|first| first.get("error_message"))
            .and_then(Value::as_str)
        {
            return Some(message.to_string());
        }
    }

    let text = String::from_utf8_lossy(body).trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Copy of `url` with secret query values masked.
fn redact(url: &Url) -> Url {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if SECRET_PARAMS.contains(&key.as_ref()) {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}
