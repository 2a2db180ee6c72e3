//! Shared test fixtures: a recording host reply and track builders

#![allow(dead_code)]

use async_trait::async_trait;
use cloudscope_core::{
    CategorisedResult, Category, CategoryHandle, PreviewPayload, PreviewReply, PushStatus, Result,
    SearchReply, Track, User,
};
use std::sync::Mutex;

/// Host reply that records everything pushed into it.
///
/// With `cancel_after(n)` the host reports `Cancelled` from push `n + 1` on.
#[derive(Default)]
pub struct RecordingReply {
    categories: Mutex<Vec<Category>>,
    pushed: Mutex<Vec<CategorisedResult>>,
    previews: Mutex<Vec<PreviewPayload>>,
    cancel_after: Option<usize>,
}

impl RecordingReply {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel_after(pushes: usize) -> Self {
        Self {
            cancel_after: Some(pushes),
            ..Self::default()
        }
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.lock().unwrap().clone()
    }

    pub fn pushed(&self) -> Vec<CategorisedResult> {
        self.pushed.lock().unwrap().clone()
    }

    pub fn previews(&self) -> Vec<PreviewPayload> {
        self.previews.lock().unwrap().clone()
    }

    pub fn track_titles(&self) -> Vec<String> {
        self.pushed()
            .iter()
            .filter_map(|r| r.as_track().map(|t| t.title.clone()))
            .collect()
    }
}

#[async_trait]
impl SearchReply for RecordingReply {
    fn register_category(&self, category: Category) -> CategoryHandle {
        let handle = CategoryHandle::new(category.id.clone());
        self.categories.lock().unwrap().push(category);
        handle
    }

    async fn push(&self, result: CategorisedResult) -> Result<PushStatus> {
        let mut pushed = self.pushed.lock().unwrap();
        if self.cancel_after.is_some_and(|limit| pushed.len() >= limit) {
            return Ok(PushStatus::Cancelled);
        }
        pushed.push(result);
        Ok(PushStatus::Accepted)
    }
}

#[async_trait]
impl PreviewReply for RecordingReply {
    async fn push_widgets(&self, payload: PreviewPayload) -> Result<()> {
        self.previews.lock().unwrap().push(payload);
        Ok(())
    }
}

pub fn track(id: u64, title: &str) -> Track {
    Track {
        id,
        title: title.to_string(),
        permalink_url: format!("http://x/{}", id),
        stream_url: Some(format!("http://s/{}", id)),
        duration: 1000 * id,
        user: User {
            username: "dave".into(),
            avatar_url: Some(format!("http://a/{}", id)),
            ..User::default()
        },
        ..Track::default()
    }
}
