/// Upstream resource selection
use std::fmt;

/// Upstream resources the connector reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Public track search / trending feed
    Tracks,
    /// The linked account's favorites
    MyFavorites,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Tracks => "/tracks",
            Endpoint::MyFavorites => "/me/favorites",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// An endpoint plus its query parameters, in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub endpoint: Endpoint,
    pub params: Vec<(String, String)>,
}

impl Route {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Value of the first parameter named `key`
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
