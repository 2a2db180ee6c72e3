/// Result categories and the values pushed into them
use crate::types::{LoginPrompt, SearchResult};
use serde::{Deserialize, Serialize};

/// Renderer for track results: small-card grid, subtitle from `username`
pub const SEARCH_CATEGORY_TEMPLATE: &str = r#"{
  "schema-version": 1,
  "template": {
    "category-layout": "grid",
    "card-size": "small"
  },
  "components": {
    "title": "title",
    "art": "art",
    "subtitle": "username"
  }
}"#;

/// Renderer for the login nag: large card on the provider colour
pub const LOGIN_NAG_TEMPLATE: &str = r##"{
  "schema-version": 1,
  "template": {
    "category-layout": "grid",
    "card-size": "large",
    "card-background": "color:///#DD4814"
  },
  "components": {
    "title": "title",
    "background": "background",
    "art": {
      "aspect-ratio": 100.0
    }
  }
}"##;

/// A category registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub icon: String,
    /// Renderer template JSON
    pub renderer: String,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>, renderer: &str) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: String::new(),
            renderer: renderer.to_string(),
        }
    }
}

/// Handle returned by the host for a registered category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryHandle(String);

impl CategoryHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Either kind of result a search can push
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultItem {
    Track(SearchResult),
    LoginPrompt(LoginPrompt),
}

/// A result bound to the category it is pushed into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorisedResult {
    pub category: CategoryHandle,
    pub item: ResultItem,
}

impl CategorisedResult {
    pub fn track(category: &CategoryHandle, result: SearchResult) -> Self {
        Self {
            category: category.clone(),
            item: ResultItem::Track(result),
        }
    }

    pub fn login_prompt(category: &CategoryHandle, prompt: LoginPrompt) -> Self {
        Self {
            category: category.clone(),
            item: ResultItem::LoginPrompt(prompt),
        }
    }

    pub fn as_track(&self) -> Option<&SearchResult> {
        match &self.item {
            ResultItem::Track(result) => Some(result),
            ResultItem::LoginPrompt(_) => None,
        }
    }

    pub fn as_login_prompt(&self) -> Option<&LoginPrompt> {
        match &self.item {
            ResultItem::LoginPrompt(prompt) => Some(prompt),
            ResultItem::Track(_) => None,
        }
    }
}

/// Outcome of a single push to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushStatus {
    Accepted,
    /// The host no longer wants results for this query
    Cancelled,
}
