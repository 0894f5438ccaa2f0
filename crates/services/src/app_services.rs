use std::sync::Arc;

use course_core::model::CourseOutline;
use storage::Storage;

use crate::config::SiteConfig;
use crate::error::AppServicesError;
use crate::navigation::ChapterNavigator;
use crate::progress_tracker::ProgressTracker;
use crate::theme_service::ThemeService;

/// Assembles app-facing services over one storage backend.
///
/// Build this once per page load; construction runs tracker initialisation.
#[derive(Clone)]
pub struct AppServices {
    config: Arc<SiteConfig>,
    outline: Arc<CourseOutline>,
    progress: Arc<ProgressTracker>,
    theme: Arc<ThemeService>,
}

impl AppServices {
    /// Build services from a validated config.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Config` if `config` fails validation.
    pub fn new(storage: &Storage, config: SiteConfig) -> Result<Self, AppServicesError> {
        config.validate()?;
        Ok(Self::assemble(storage, config))
    }

    /// Services over an in-memory store with the default config.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::assemble(&Storage::in_memory(), SiteConfig::default())
    }

    fn assemble(storage: &Storage, config: SiteConfig) -> Self {
        let progress = Arc::new(ProgressTracker::initialize(
            Arc::clone(&storage.kv),
            config.tracker_config(),
        ));
        let theme = Arc::new(ThemeService::load(
            Arc::clone(&storage.kv),
            config.storage.theme_key.clone(),
            config.default_theme,
        ));
        let outline = Arc::new(config.outline());

        Self {
            config: Arc::new(config),
            outline,
            progress,
            theme,
        }
    }

    #[must_use]
    pub fn config(&self) -> Arc<SiteConfig> {
        Arc::clone(&self.config)
    }

    #[must_use]
    pub fn outline(&self) -> Arc<CourseOutline> {
        Arc::clone(&self.outline)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }

    /// Navigator for the page at `address`.
    #[must_use]
    pub fn navigator(&self, address: impl Into<String>) -> ChapterNavigator {
        ChapterNavigator::new(self.progress(), address)
    }
}
