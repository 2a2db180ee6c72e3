/// Query routing: which upstream resource answers a query
use crate::settings::AccountMode;
use cloudscope_core::{AccountSession, Endpoint, Route};
use tracing::{debug, warn};

/// Results requested per upstream call
pub const RESULT_LIMIT: u32 = 30;

/// Upstream ordering for every feed
pub const ORDER_HOTNESS: &str = "hotness";

/// A route plus whether the caller must emit a login prompt ahead of the results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    pub route: Route,
    pub login_prompt: bool,
}

/// Maps query text and session state to an upstream route
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryRouter {
    mode: AccountMode,
}

impl QueryRouter {
    pub fn new(mode: AccountMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> AccountMode {
        self.mode
    }

    /// Pick the upstream route for `query`.
    ///
    /// Keyword searches never consult the session. An empty query reads the
    /// session (linked mode only) and falls back to the public trending feed
    /// plus a login prompt when no token is usable.
    pub fn route(&self, query: &str, session: &dyn AccountSession) -> RoutePlan {
        if !query.is_empty() {
            return RoutePlan {
                route: with_feed_params(Route::new(Endpoint::Tracks).with_param("q", query)),
                login_prompt: false,
            };
        }

        if self.mode == AccountMode::Anonymous {
            return RoutePlan {
                route: with_feed_params(Route::new(Endpoint::Tracks)),
                login_prompt: false,
            };
        }

        match resolve_access_token(session) {
            Some(token) => RoutePlan {
                route: with_feed_params(Route::new(Endpoint::MyFavorites))
                    .with_param("oauth_token", token),
                login_prompt: false,
            },
            None => RoutePlan {
                route: with_feed_params(Route::new(Endpoint::Tracks)),
                login_prompt: true,
            },
        }
    }
}

/// Access token of the first enabled service.
///
/// A service in an error state gets exactly one non-interactive refresh; if
/// it is still failing afterwards there is no token.
pub fn resolve_access_token(session: &dyn AccountSession) -> Option<String> {
    let service = session.enabled_services().into_iter().next()?;

    let service = if service.error.is_some() {
        warn!(
            account_id = %service.account_id,
            error = ?service.error,
            "Account in error state, refreshing"
        );
        session.refresh(&service.account_id, false)
    } else {
        service
    };

    match service.usable_token() {
        Some(token) => Some(token.to_string()),
        None => {
            debug!(account_id = %service.account_id, "No usable access token");
            None
        }
    }
}

fn with_feed_params(route: Route) -> Route {
    route
        .with_param("limit", RESULT_LIMIT.to_string())
        .with_param("order", ORDER_HOTNESS)
}
