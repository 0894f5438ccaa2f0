//! JSON codec for the persisted list of completed chapters.

use course_core::model::{ChapterId, ProgressState};
use serde_json::Value;

use crate::repository::StorageError;

/// Storage form of a `ProgressState`: a JSON array of chapter file names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersistedRecord {
    chapters: Vec<ChapterId>,
    dropped: usize,
}

impl PersistedRecord {
    #[must_use]
    pub fn from_state(state: &ProgressState) -> Self {
        Self {
            chapters: state.iter().cloned().collect(),
            dropped: 0,
        }
    }

    /// Decode a stored value.
    ///
    /// Array entries that are not chapter file names are skipped and counted in
    /// [`PersistedRecord::dropped`].
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if `raw` is not a JSON array.
    pub fn decode(raw: &str) -> Result<Self, StorageError> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Array(items) = value else {
            return Err(StorageError::Serialization(
                "expected a JSON array of chapter ids".into(),
            ));
        };

        let mut chapters = Vec::with_capacity(items.len());
        let mut dropped = 0;
        for item in items {
            match item.as_str().map(ChapterId::parse) {
                Some(Ok(id)) => chapters.push(id),
                _ => dropped += 1,
            }
        }
        Ok(Self { chapters, dropped })
    }

    /// Encode as a compact JSON array.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if encoding fails.
    pub fn encode(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(&self.chapters)?)
    }

    #[must_use]
    pub fn chapters(&self) -> &[ChapterId] {
        &self.chapters
    }

    /// Entries discarded while decoding.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    #[must_use]
    pub fn into_state(self) -> ProgressState {
        ProgressState::from_ids(self.chapters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(file: &str) -> ChapterId {
        ChapterId::parse(file).unwrap()
    }

    #[test]
    fn encodes_ordered_string_array() {
        let state = ProgressState::from_ids([chapter("02-basics.html"), chapter("01-intro.html")]);
        let raw = PersistedRecord::from_state(&state).encode().unwrap();
        assert_eq!(raw, r#"["02-basics.html","01-intro.html"]"#);
    }

    #[test]
    fn decodes_and_keeps_order() {
        let record = PersistedRecord::decode(r#"["03-a.html","01-b.html"]"#).unwrap();
        assert_eq!(record.chapters(), &[chapter("03-a.html"), chapter("01-b.html")]);
        assert_eq!(record.dropped(), 0);
    }

    #[test]
    fn skips_entries_that_are_not_chapters() {
        let record =
            PersistedRecord::decode(r#"["01-a.html", 7, null, "index.html", "01-a.html"]"#).unwrap();
        assert_eq!(record.dropped(), 3);
        let state = record.into_state();
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn rejects_non_array_values() {
        assert!(matches!(
            PersistedRecord::decode("{\"a\":1}"),
            Err(StorageError::Serialization(_))
        ));
        assert!(matches!(
            PersistedRecord::decode("not json"),
            Err(StorageError::Serialization(_))
        ));
        assert!(PersistedRecord::decode("").is_err());
    }

    #[test]
    fn empty_array_is_empty_state() {
        let record = PersistedRecord::decode("[]").unwrap();
        assert!(record.into_state().is_empty());
    }
}
