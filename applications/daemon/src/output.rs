//! JSON-lines host reply
//!
//! Stands in for the host runtime: every registered category, pushed result
//! and preview becomes one JSON object on its own line.

use async_trait::async_trait;
use cloudscope_core::{
    CategorisedResult, Category, CategoryHandle, PreviewPayload, PreviewReply, PreviewWidget,
    PushStatus, Result, ScopeError, SearchReply, SearchResult,
};
use serde::Serialize;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum OutputEvent<'a> {
    Category(&'a Category),
    Result(&'a CategorisedResult),
    Preview { widgets: &'a [PreviewWidget] },
}

/// Writes host events to `W`, one JSON object per line.
///
/// Track results are also kept so a later preview can pick one by index.
pub struct JsonLinesReply<W> {
    out: Mutex<W>,
    tracks: Mutex<Vec<SearchResult>>,
}

impl<W: Write + Send> JsonLinesReply<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            tracks: Mutex::new(Vec::new()),
        }
    }

    /// Track results seen so far, in push order
    pub fn tracks(&self) -> Vec<SearchResult> {
        lock(&self.tracks).clone()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: &OutputEvent<'_>) -> Result<()> {
        let line = serde_json::to_string(event)?;
        let mut out = lock(&self.out);
        writeln!(out, "{}", line).map_err(|e| ScopeError::reply(e.to_string()))?;
        out.flush().map_err(|e| ScopeError::reply(e.to_string()))
    }
}

#[async_trait]
impl<W: Write + Send> SearchReply for JsonLinesReply<W> {
    fn register_category(&self, category: Category) -> CategoryHandle {
        if let Err(e) = self.emit(&OutputEvent::Category(&category)) {
            tracing::warn!(error = %e, category = %category.id, "Failed to write category");
        }
        CategoryHandle::new(category.id)
    }

    async fn push(&self, result: CategorisedResult) -> Result<PushStatus> {
        self.emit(&OutputEvent::Result(&result))?;
        if let Some(track) = result.as_track() {
            lock(&self.tracks).push(track.clone());
        }
        Ok(PushStatus::Accepted)
    }
}

#[async_trait]
impl<W: Write + Send> PreviewReply for JsonLinesReply<W> {
    async fn push_widgets(&self, payload: PreviewPayload) -> Result<()> {
        let widgets = payload.into_widgets();
        self.emit(&OutputEvent::Preview { widgets: &widgets })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudscope_core::{TrackAttributes, SEARCH_CATEGORY_TEMPLATE};

    fn result(title: &str) -> SearchResult {
        SearchResult {
            uri: format!("http://x/{}", title),
            title: title.into(),
            art: String::new(),
            attributes: TrackAttributes {
                duration: 1000,
                stream_url: "http://s/1".into(),
                ..TrackAttributes::default()
            },
        }
    }

    fn lines(reply: JsonLinesReply<Vec<u8>>) -> Vec<serde_json::Value> {
        let out = String::from_utf8(reply.into_inner()).unwrap();
        out.lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn writes_one_line_per_event() {
        let reply = JsonLinesReply::new(Vec::new());
        let handle =
            reply.register_category(Category::new("soundcloud", "SoundCloud", SEARCH_CATEGORY_TEMPLATE));
        reply
            .push(CategorisedResult::track(&handle, result("A")))
            .await
            .unwrap();

        let events = lines(reply);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "category");
        assert_eq!(events[0]["id"], "soundcloud");
        assert_eq!(events[1]["event"], "result");
        assert_eq!(events[1]["category"], "soundcloud");
        assert_eq!(events[1]["item"]["title"], "A");
        assert_eq!(events[1]["item"]["stream-url"], "http://s/1");
    }

    #[tokio::test]
    async fn keeps_tracks_for_preview_selection() {
        let reply = JsonLinesReply::new(Vec::new());
        let handle = CategoryHandle::new("soundcloud");
        reply.push(CategorisedResult::track(&handle, result("A"))).await.unwrap();
        reply.push(CategorisedResult::track(&handle, result("B"))).await.unwrap();

        let titles: Vec<String> = reply.tracks().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["A", "B"]);
    }
}
