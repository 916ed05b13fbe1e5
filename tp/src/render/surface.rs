//! Story surface: where chapters, title and summary are committed

use serde::Serialize;

use super::view::ChapterView;

/// Target of the story part of a render
pub trait StorySurface {
    fn show_story(&mut self);

    fn set_title(&mut self, title: &str);

    fn set_summary(&mut self, summary: &str);

    fn clear_chapters(&mut self);

    fn append_chapter(&mut self, chapter: &ChapterView);
}

/// In-memory story section
///
/// Starts hidden and empty, like the page before the first plan arrives.
/// Output adapters read it back after a render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoryDocument {
    pub visible: bool,
    pub title: String,
    pub summary: String,
    pub chapters: Vec<ChapterView>,
}

impl StorySurface for StoryDocument {
    fn show_story(&mut self) {
        self.visible = true;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_summary(&mut self, summary: &str) {
        self.summary = summary.to_string();
    }

    fn clear_chapters(&mut self) {
        self.chapters.clear();
    }

    fn append_chapter(&mut self, chapter: &ChapterView) {
        self.chapters.push(chapter.clone());
    }
}
