/// Search query as issued by the host
use serde::{Deserialize, Serialize};

/// Scope identifier used in canned-query URIs
pub const SCOPE_ID: &str = "soundcloud";

/// Query text, possibly empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The empty "home feed" query
    pub fn home() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Canned-query URI that re-issues this query, e.g. `scope://soundcloud?q=jazz`
    pub fn to_uri(&self) -> String {
        let mut uri = format!("scope://{}?q=", SCOPE_ID);
        uri.extend(url::form_urlencoded::byte_serialize(self.text.as_bytes()));
        uri
    }
}
