//! Video module handler

use crate::schemas::{ModuleId, ModuleKind, VideoContent};

use super::ModuleHandler;

/// Plays an animation; done once it has been watched to the end
#[derive(Debug, Clone)]
pub struct VideoHandler {
    module_id: ModuleId,
    content: VideoContent,
    playing: bool,
    watched: bool,
}

impl VideoHandler {
    pub fn new(module_id: ModuleId, content: VideoContent) -> Self {
        VideoHandler {
            module_id,
            content,
            playing: false,
            watched: false,
        }
    }

    pub fn content(&self) -> &VideoContent {
        &self.content
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// The player reached the end of the video
    pub fn ended(&mut self) {
        self.playing = false;
        self.watched = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn watched(&self) -> bool {
        self.watched
    }
}

impl ModuleHandler for VideoHandler {
    fn module_id(&self) -> ModuleId {
        self.module_id
    }

    fn kind(&self) -> ModuleKind {
        ModuleKind::Video
    }

    fn objective_met(&self) -> bool {
        self.watched
    }
}
