//! Content schema - Module payloads served by a content provider

use serde::{Deserialize, Serialize};

use super::ModuleKind;

/// Video module payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoContent {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub filename: String,
}

/// Quiz module payload (embedded third-party quiz)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizContent {
    pub title: String,
    pub description: String,
    pub quiz_type: String,
    pub iframe_url: String,
    pub iframe_html: String,
    /// How the quiz reports completion, e.g. "manual"
    pub completion_method: String,
}

/// One page of a comic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicPage {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

/// Comic module payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicContent {
    pub title: String,
    pub pages: Vec<ComicPage>,
}

/// Payload for any module, tagged by `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ModuleContent {
    Video(VideoContent),
    Quiz(QuizContent),
    Comic(ComicContent),
}

impl ModuleContent {
    /// The module kind this payload belongs to
    pub fn kind(&self) -> ModuleKind {
        match self {
            ModuleContent::Video(_) => ModuleKind::Video,
            ModuleContent::Quiz(_) => ModuleKind::Quiz,
            ModuleContent::Comic(_) => ModuleKind::Comic,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ModuleContent::Video(c) => &c.title,
            ModuleContent::Quiz(c) => &c.title,
            ModuleContent::Comic(c) => &c.title,
        }
    }
}
