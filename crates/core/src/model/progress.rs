use std::collections::BTreeSet;
use std::fmt;

use crate::model::ChapterId;

/// Number of chapters in the course.
pub const TOTAL_CHAPTERS: u8 = 10;

/// Completion percentage derived from a `ProgressState`, always within `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// Round `counted / total` to the nearest whole percent (halves round up).
    ///
    /// A zero `total` yields 0%.
    #[must_use]
    pub fn from_counts(counted: usize, total: u8) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let total = usize::from(total);
        let counted = counted.min(total);
        let rounded = (counted * 200 + total) / (total * 2);
        // counted <= total keeps this at or below 100
        Self(u8::try_from(rounded).unwrap_or(100).min(100))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_full(self) -> bool {
        self.0 == 100
    }

    /// Human readable label, e.g. `"20% complete"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}% complete", self.0)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Chapters currently counted as completed.
///
/// Keeps insertion order so the persisted record reads the way the learner
/// progressed. Duplicate ids are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressState {
    chapters: Vec<ChapterId>,
}

impl ProgressState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from ids in order, dropping repeats.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = ChapterId>,
    {
        let mut state = Self::new();
        for id in ids {
            state.insert(id);
        }
        state
    }

    /// Adds `id`; returns `false` when it was already present.
    pub fn insert(&mut self, id: ChapterId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.chapters.push(id);
        true
    }

    /// Removes `id`; returns `false` when it was absent.
    pub fn remove(&mut self, id: &ChapterId) -> bool {
        match self.chapters.iter().position(|existing| existing == id) {
            Some(index) => {
                self.chapters.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, id: &ChapterId) -> bool {
        self.chapters.iter().any(|existing| existing == id)
    }

    pub fn clear(&mut self) {
        self.chapters.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChapterId> {
        self.chapters.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ChapterId] {
        &self.chapters
    }

    /// Number of distinct chapter positions in `1..=total` that are completed.
    ///
    /// Ids outside the course range are kept in the state but never counted.
    #[must_use]
    pub fn counted(&self, total: u8) -> usize {
        self.chapters
            .iter()
            .map(ChapterId::ordinal)
            .filter(|ordinal| (1..=total).contains(ordinal))
            .collect::<BTreeSet<_>>()
            .len()
    }

    #[must_use]
    pub fn percentage(&self, total: u8) -> Percentage {
        Percentage::from_counts(self.counted(total), total)
    }
}

impl<'a> IntoIterator for &'a ProgressState {
    type Item = &'a ChapterId;
    type IntoIter = std::slice::Iter<'a, ChapterId>;

    fn into_iter(self) -> Self::IntoIter {
        self.chapters.iter()
    }
}
