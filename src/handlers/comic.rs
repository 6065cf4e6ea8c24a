//! Comic module handler

use crate::errors::{JourneyError, Result};
use crate::schemas::{ComicContent, ComicPage, ModuleId, ModuleKind};

use super::ModuleHandler;

/// Page-by-page comic reader; done once the last page has been shown
#[derive(Debug, Clone)]
pub struct ComicHandler {
    module_id: ModuleId,
    content: ComicContent,
    current: usize,
    reached_end: bool,
}

impl ComicHandler {
    /// # Errors
    /// * `Validation` - If the comic has no pages
    pub fn new(module_id: ModuleId, content: ComicContent) -> Result<Self> {
        if content.pages.is_empty() {
            return Err(JourneyError::Validation(format!(
                "comic for module {} has no pages",
                module_id
            )));
        }
        let reached_end = content.pages.len() == 1;
        Ok(ComicHandler {
            module_id,
            content,
            current: 0,
            reached_end,
        })
    }

    pub fn content(&self) -> &ComicContent {
        &self.content
    }

    /// 0-based index of the page on screen
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> &ComicPage {
        &self.content.pages[self.current]
    }

    pub fn page_count(&self) -> usize {
        self.content.pages.len()
    }

    pub fn is_last_page(&self) -> bool {
        self.current + 1 == self.content.pages.len()
    }

    /// Move forward one page. Returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.is_last_page() {
            return false;
        }
        self.current += 1;
        self.reached_end |= self.is_last_page();
        true
    }

    /// Move back one page. Returns false on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to a page by 0-based index.
    ///
    /// # Errors
    /// * `NotAllowed` - If the index is past the last page
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.content.pages.len() {
            return Err(JourneyError::NotAllowed(format!(
                "page {} is out of range (comic has {} pages)",
                index + 1,
                self.content.pages.len()
            )));
        }
        self.current = index;
        self.reached_end |= self.is_last_page();
        Ok(())
    }
}

impl ModuleHandler for ComicHandler {
    fn module_id(&self) -> ModuleId {
        self.module_id
    }

    fn kind(&self) -> ModuleKind {
        ModuleKind::Comic
    }

    fn objective_met(&self) -> bool {
        self.reached_end
    }
}
