//! Quiz module handler

use crate::schemas::{ModuleId, ModuleKind, QuizContent};

use super::ModuleHandler;

/// Embedded quiz whose score is not visible to us; the user confirms
/// completion by hand
#[derive(Debug, Clone)]
pub struct QuizHandler {
    module_id: ModuleId,
    content: QuizContent,
    completed: bool,
}

impl QuizHandler {
    pub fn new(module_id: ModuleId, content: QuizContent) -> Self {
        QuizHandler {
            module_id,
            content,
            completed: false,
        }
    }

    pub fn content(&self) -> &QuizContent {
        &self.content
    }

    /// The user says they finished the quiz
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

impl ModuleHandler for QuizHandler {
    fn module_id(&self) -> ModuleId {
        self.module_id
    }

    fn kind(&self) -> ModuleKind {
        ModuleKind::Quiz
    }

    fn objective_met(&self) -> bool {
        self.completed
    }
}
