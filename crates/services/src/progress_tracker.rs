//! Chapter-completion state machine.
//!
//! The tracker owns the completed-chapter set, mirrors it into a
//! [`KeyValueStore`] under a single key and derives the completion
//! percentage. None of its operations return errors: storage failures put the
//! tracker into memory-only mode for the rest of the session.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use course_core::model::{ChapterId, Percentage, ProgressState, TOTAL_CHAPTERS};
use storage::{KeyValueStore, PersistedRecord, StorageError};
use tracing::{debug, warn};

/// Storage key for the completed-chapter record.
pub const PROGRESS_KEY: &str = "dwc_completed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerConfig {
    pub storage_key: String,
    pub total_chapters: u8,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: PROGRESS_KEY.to_owned(),
            total_chapters: TOTAL_CHAPTERS,
        }
    }
}

/// How the persisted record was read at start-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Record decoded; `dropped` entries were not chapter ids.
    Loaded { chapters: usize, dropped: usize },
    /// No record stored yet.
    Missing,
    /// Stored value was not a JSON array; it will be overwritten on the next change.
    Corrupt(StorageError),
    /// Backend refused the read; the session runs memory-only.
    Unavailable(StorageError),
}

/// Effect of a mutation on the in-memory set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Added,
    Removed,
    /// Already in the requested state.
    Unchanged,
    /// Not a chapter identifier.
    Ignored,
}

/// Effect of a mutation on durable storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PersistOutcome {
    Persisted,
    /// Nothing changed, nothing written.
    Skipped,
    /// This write failed; the tracker is now memory-only.
    Degraded(StorageError),
    /// An earlier failure disabled writes for this session.
    MemoryOnly,
}

/// Result of a tracker mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mutation {
    pub change: Change,
    pub persist: PersistOutcome,
    pub percentage: Percentage,
}

impl Mutation {
    #[must_use]
    pub fn changed(&self) -> bool {
        matches!(self.change, Change::Added | Change::Removed)
    }
}

struct Inner {
    state: ProgressState,
    memory_only: bool,
}

pub struct ProgressTracker {
    store: Arc<dyn KeyValueStore>,
    config: TrackerConfig,
    load: LoadOutcome,
    inner: Mutex<Inner>,
}

impl ProgressTracker {
    /// Reconstruct the tracker from storage.
    ///
    /// Missing or malformed records produce an empty state; an unreadable
    /// backend additionally switches the tracker to memory-only mode.
    #[must_use]
    pub fn initialize(store: Arc<dyn KeyValueStore>, config: TrackerConfig) -> Self {
        let (state, load) = match read_record(store.as_ref(), &config.storage_key) {
            Ok(Some(record)) => {
                let outcome = LoadOutcome::Loaded {
                    chapters: record.chapters().len(),
                    dropped: record.dropped(),
                };
                (record.into_state(), outcome)
            }
            Ok(None) => (ProgressState::new(), LoadOutcome::Missing),
            Err(err @ StorageError::Serialization(_)) => {
                warn!(key = %config.storage_key, error = %err, "discarding malformed progress record");
                (ProgressState::new(), LoadOutcome::Corrupt(err))
            }
            Err(err) => {
                warn!(key = %config.storage_key, error = %err, "progress storage unavailable, running memory-only");
                (ProgressState::new(), LoadOutcome::Unavailable(err))
            }
        };

        let memory_only = matches!(load, LoadOutcome::Unavailable(_));
        debug!(
            key = %config.storage_key,
            completed = state.len(),
            percentage = state.percentage(config.total_chapters).value(),
            "progress tracker initialized"
        );

        Self {
            store,
            config,
            load,
            inner: Mutex::new(Inner { state, memory_only }),
        }
    }

    /// Tracker with default key and chapter count.
    #[must_use]
    pub fn with_defaults(store: Arc<dyn KeyValueStore>) -> Self {
        Self::initialize(store, TrackerConfig::default())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[must_use]
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load
    }

    /// True once a storage failure has disabled persistence.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.lock().memory_only
    }

    #[must_use]
    pub fn current_percentage(&self) -> Percentage {
        self.lock().state.percentage(self.config.total_chapters)
    }

    /// `"<pct>% complete"` for the progress bar title.
    #[must_use]
    pub fn label(&self) -> String {
        self.current_percentage().label()
    }

    #[must_use]
    pub fn completed(&self) -> ProgressState {
        self.lock().state.clone()
    }

    #[must_use]
    pub fn is_completed(&self, id: &ChapterId) -> bool {
        self.lock().state.contains(id)
    }

    /// Add `id` to the completed set.
    pub fn mark_completed(&self, id: impl AsRef<str>) -> Mutation {
        self.apply(id.as_ref(), |state, id| {
            if state.insert(id) {
                Change::Added
            } else {
                Change::Unchanged
            }
        })
    }

    /// Remove `id` from the completed set.
    pub fn unmark_completed(&self, id: impl AsRef<str>) -> Mutation {
        self.apply(id.as_ref(), |state, id| {
            if state.remove(&id) {
                Change::Removed
            } else {
                Change::Unchanged
            }
        })
    }

    /// Graduation path: completes `id` like [`Self::mark_completed`].
    ///
    /// The returned percentage is the arithmetic one; showing 100% after
    /// graduation is up to the display layer.
    pub fn force_complete(&self, id: impl AsRef<str>) -> Mutation {
        let mutation = self.mark_completed(id);
        debug!(percentage = mutation.percentage.value(), "course graduated");
        mutation
    }

    /// Forget all completed chapters and store the empty record.
    ///
    /// A stored value that is corrupt or holds only non-chapter entries is
    /// overwritten too, even though the in-memory state is already empty.
    pub fn reset(&self) -> Mutation {
        let mut inner = self.lock();
        let change = if !inner.state.is_empty() {
            inner.state.clear();
            Change::Removed
        } else if inner.memory_only || self.stored_record_is_empty() {
            Change::Unchanged
        } else {
            Change::Removed
        };
        self.finish(&mut inner, change)
    }

    /// True when nothing is stored or the stored record decodes to `[]`.
    fn stored_record_is_empty(&self) -> bool {
        match read_record(self.store.as_ref(), &self.config.storage_key) {
            Ok(None) => true,
            Ok(Some(record)) => record.chapters().is_empty() && record.dropped() == 0,
            Err(_) => false,
        }
    }

    fn apply<F>(&self, raw: &str, op: F) -> Mutation
    where
        F: FnOnce(&mut ProgressState, ChapterId) -> Change,
    {
        let mut inner = self.lock();
        let change = match ChapterId::parse(raw) {
            Ok(id) => op(&mut inner.state, id),
            Err(err) => {
                debug!(id = raw, error = %err, "ignoring non-chapter id");
                Change::Ignored
            }
        };
        self.finish(&mut inner, change)
    }

    fn finish(&self, inner: &mut Inner, change: Change) -> Mutation {
        let persist = match change {
            Change::Added | Change::Removed => self.persist(inner),
            Change::Unchanged | Change::Ignored => PersistOutcome::Skipped,
        };
        Mutation {
            change,
            persist,
            percentage: inner.state.percentage(self.config.total_chapters),
        }
    }

    fn persist(&self, inner: &mut Inner) -> PersistOutcome {
        if inner.memory_only {
            return PersistOutcome::MemoryOnly;
        }
        match write_record(self.store.as_ref(), &self.config.storage_key, &inner.state) {
            Ok(()) => {
                debug!(key = %self.config.storage_key, completed = inner.state.len(), "progress persisted");
                PersistOutcome::Persisted
            }
            Err(err) => {
                warn!(key = %self.config.storage_key, error = %err, "failed to persist progress, running memory-only");
                inner.memory_only = true;
                PersistOutcome::Degraded(err)
            }
        }
    }
}

fn read_record(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<PersistedRecord>, StorageError> {
    store
        .get(key)?
        .map(|raw| PersistedRecord::decode(&raw))
        .transpose()
}

fn write_record(
    store: &dyn KeyValueStore,
    key: &str,
    state: &ProgressState,
) -> Result<(), StorageError> {
    let raw = PersistedRecord::from_state(state).encode()?;
    store.set(key, &raw)
}
