mod account;
mod category;
mod preview;
mod query;
mod result;
mod route;
mod track;

pub use account::{
    AccountDetails, AccountProvider, AuthData, LoginAction, LoginPrompt, ServiceState, WatchHandle,
};
pub use category::{
    CategorisedResult, Category, CategoryHandle, PushStatus, ResultItem, LOGIN_NAG_TEMPLATE,
    SEARCH_CATEGORY_TEMPLATE,
};
pub use preview::{ActionInfo, PreviewPayload, PreviewWidget, TrackInfo, WidgetKind};
pub use query::SearchQuery;
pub use result::{SearchResult, TrackAttributes, REQUIRED_ATTRIBUTES};
pub use route::{Endpoint, Route};
pub use track::{Track, User};
