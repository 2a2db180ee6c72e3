/// Upstream track and user records
use serde::{Deserialize, Deserializer, Serialize};

/// Track owner as embedded in a track record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    pub uri: Option<String>,
    pub avatar_url: Option<String>,
}

/// A track as returned by the upstream API
///
/// Nullable upstream fields are `Option`; absent fields fall back to their
/// defaults so that partially populated records still decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    pub created_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub user: User,
    #[serde(deserialize_with = "null_as_default")]
    pub streamable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub downloadable: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub permalink_url: String,
    pub purchase_url: Option<String>,
    pub artwork_url: Option<String>,
    pub stream_url: Option<String>,
    pub download_url: Option<String>,
    pub video_url: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub description: Option<String>,
    pub label_name: Option<String>,
    /// Duration in milliseconds
    #[serde(deserialize_with = "null_as_default")]
    pub duration: u64,
    pub license: Option<String>,
}

impl Track {
    /// Artwork URL, falling back to the owner's avatar when the track has none.
    ///
    /// Returns an empty string when neither is set.
    pub fn art_url(&self) -> &str {
        match self.artwork_url.as_deref() {
            Some(artwork) if !artwork.is_empty() => artwork,
            _ => self.user.avatar_url.as_deref().unwrap_or_default(),
        }
    }
}

/// Upstream sends explicit `null` for unset scalars; read those as the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
