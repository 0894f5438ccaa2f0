use serde::{Deserialize, Serialize};

use crate::model::ChapterId;

/// One chapter page in the course outline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterEntry {
    pub file: ChapterId,
    pub title: String,
}

impl ChapterEntry {
    #[must_use]
    pub fn new(file: ChapterId, title: impl Into<String>) -> Self {
        Self {
            file,
            title: title.into(),
        }
    }
}

/// Ordered list of chapter pages, as linked from the sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseOutline {
    entries: Vec<ChapterEntry>,
}

impl CourseOutline {
    #[must_use]
    pub fn new(mut entries: Vec<ChapterEntry>) -> Self {
        entries.sort_by_key(|entry| entry.file.ordinal());
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[ChapterEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &ChapterId) -> Option<&ChapterEntry> {
        self.entries.iter().find(|entry| &entry.file == id)
    }

    fn position(&self, id: &ChapterId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.file == id)
    }

    #[must_use]
    pub fn previous(&self, id: &ChapterId) -> Option<&ChapterEntry> {
        let index = self.position(id)?;
        index.checked_sub(1).and_then(|prev| self.entries.get(prev))
    }

    #[must_use]
    pub fn next(&self, id: &ChapterId) -> Option<&ChapterEntry> {
        let index = self.position(id)?;
        self.entries.get(index + 1)
    }

    /// True for the final chapter, where the course offers graduation.
    #[must_use]
    pub fn is_last(&self, id: &ChapterId) -> bool {
        self.entries.last().is_some_and(|entry| &entry.file == id)
    }
}
