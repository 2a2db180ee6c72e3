/// Preview widgets pushed for a selected result
use serde::{Deserialize, Serialize};

/// One playable entry in an audio widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub title: String,
    /// Length in whole seconds
    pub length: u64,
    pub source: String,
}

/// A button in the actions widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionInfo {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Widget body. Mapping widgets name the result attribute they display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WidgetKind {
    Header { title: String, subtitle: String },
    Image { source: String },
    Audio { tracks: Vec<TrackInfo> },
    Actions { actions: Vec<ActionInfo> },
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewWidget {
    pub id: String,
    #[serde(flatten)]
    pub kind: WidgetKind,
}

impl PreviewWidget {
    pub fn new(id: impl Into<String>, kind: WidgetKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// The five widgets of a track preview, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewPayload {
    pub header: PreviewWidget,
    pub art: PreviewWidget,
    pub tracks: PreviewWidget,
    pub actions: PreviewWidget,
    pub description: PreviewWidget,
}

impl PreviewPayload {
    /// Entries of the audio widget
    pub fn audio_tracks(&self) -> &[TrackInfo] {
        match &self.tracks.kind {
            WidgetKind::Audio { tracks } => tracks,
            _ => &[],
        }
    }

    /// Buttons of the actions widget
    pub fn action_buttons(&self) -> &[ActionInfo] {
        match &self.actions.kind {
            WidgetKind::Actions { actions } => actions,
            _ => &[],
        }
    }

    /// Widgets in the order the host lays them out
    pub fn into_widgets(self) -> [PreviewWidget; 5] {
        [
            self.header,
            self.art,
            self.tracks,
            self.actions,
            self.description,
        ]
    }
}
