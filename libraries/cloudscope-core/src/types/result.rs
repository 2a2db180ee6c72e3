/// Normalized search results handed to the host
use crate::error::{Result, ScopeError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attributes a preview cannot be built without.
pub const REQUIRED_ATTRIBUTES: [&str; 3] = ["title", "duration", "stream-url"];

/// A track result in the host's uniform schema.
///
/// Serializes to the flat attribute bag hosts store results as
/// (`uri`, `title`, `art`, `duration`, `username`, ..., `video-url`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Track permalink
    #[serde(default)]
    pub uri: String,

    pub title: String,

    /// Artwork, or the owner's avatar when the track has no artwork
    #[serde(default)]
    pub art: String,

    #[serde(flatten)]
    pub attributes: TrackAttributes,
}

/// Typed attribute bag carried by every track result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackAttributes {
    /// Duration in milliseconds
    pub duration: u64,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "stream-url")]
    pub stream_url: String,

    #[serde(
        rename = "purchase-url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub purchase_url: Option<String>,

    #[serde(rename = "video-url", default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl SearchResult {
    /// Flatten into the host attribute bag.
    pub fn to_attributes(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Rebuild a result from a host attribute bag.
    ///
    /// Fails with `MissingAttribute` naming the first required attribute that
    /// is absent (or null), and with `Decode` when an attribute has the wrong type.
    pub fn from_attributes(attributes: &Map<String, Value>) -> Result<Self> {
        if let Some(name) = REQUIRED_ATTRIBUTES
            .iter()
            .find(|name| attributes.get(**name).map_or(true, Value::is_null))
        {
            return Err(ScopeError::missing_attribute(*name));
        }

        let result: Self = serde_json::from_value(Value::Object(attributes.clone()))?;
        Ok(result)
    }

    /// Stream URL, or `MissingAttribute` when the result has none.
    pub fn require_stream_url(&self) -> Result<&str> {
        if self.attributes.stream_url.is_empty() {
            return Err(ScopeError::missing_attribute("stream-url"));
        }
        Ok(&self.attributes.stream_url)
    }

    /// Purchase URL when present and non-empty
    pub fn purchase_url(&self) -> Option<&str> {
        self.attributes
            .purchase_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }

    /// Video URL when present and non-empty
    pub fn video_url(&self) -> Option<&str> {
        self.attributes
            .video_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}
