use std::sync::{Arc, Mutex, PoisonError};

use course_core::model::Theme;
use storage::KeyValueStore;
use tracing::{debug, warn};

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "dwc_theme";

/// Light/dark preference persisted next to course progress.
///
/// Like the tracker, it never surfaces storage errors.
pub struct ThemeService {
    store: Arc<dyn KeyValueStore>,
    key: String,
    current: Mutex<Theme>,
}

impl ThemeService {
    /// Restore the saved theme, falling back to `default` when nothing valid is stored.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>, default: Theme) -> Self {
        let key = key.into();
        let theme = match store.get(&key) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|err| {
                debug!(%key, %err, "ignoring stored theme");
                default
            }),
            Ok(None) => default,
            Err(err) => {
                warn!(%key, error = %err, "theme storage unavailable");
                default
            }
        };
        Self {
            store,
            key,
            current: Mutex::new(theme),
        }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Switch to `theme` and remember it.
    pub fn apply(&self, theme: Theme) -> Theme {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = theme;
        if let Err(err) = self.store.set(&self.key, theme.as_str()) {
            warn!(key = %self.key, error = %err, "failed to persist theme");
        }
        theme
    }

    /// Flip between light and dark.
    pub fn toggle(&self) -> Theme {
        self.apply(self.current().toggled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::{InMemoryStore, StorageError};

    #[test]
    fn defaults_when_missing_or_invalid() {
        let store = InMemoryStore::new();
        let service = ThemeService::load(Arc::new(store.clone()), THEME_KEY, Theme::Dark);
        assert_eq!(service.current(), Theme::Dark);

        store.set(THEME_KEY, "sepia").unwrap();
        let service = ThemeService::load(Arc::new(store), THEME_KEY, Theme::Dark);
        assert_eq!(service.current(), Theme::Dark);
    }

    #[test]
    fn toggle_persists() {
        let store = InMemoryStore::new();
        let service = ThemeService::load(Arc::new(store.clone()), THEME_KEY, Theme::Dark);
        assert_eq!(service.toggle(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        let reloaded = ThemeService::load(Arc::new(store), THEME_KEY, Theme::Dark);
        assert_eq!(reloaded.current(), Theme::Light);
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }
    }

    #[test]
    fn disabled_storage_still_toggles_in_memory() {
        let service = ThemeService::load(Arc::new(ReadOnlyStore), THEME_KEY, Theme::Light);
        assert_eq!(service.current(), Theme::Light);
        assert_eq!(service.toggle(), Theme::Dark);
        assert_eq!(service.current(), Theme::Dark);
    }
}
