use std::sync::Arc;

use course_core::model::CourseOutline;
use services::{AppServices, ChapterNavigator, ProgressTracker, SiteConfig, ThemeService};

pub trait UiApp: Send + Sync {
    fn site_title(&self) -> String;
    fn services(&self) -> AppServices;
}

#[derive(Clone)]
pub struct AppContext {
    site_title: String,
    services: AppServices,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            site_title: app.site_title(),
            services: app.services(),
        }
    }

    #[must_use]
    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    #[must_use]
    pub fn config(&self) -> Arc<SiteConfig> {
        self.services.config()
    }

    #[must_use]
    pub fn outline(&self) -> Arc<CourseOutline> {
        self.services.outline()
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressTracker> {
        self.services.progress()
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        self.services.theme()
    }

    /// Navigator bound to the page at `address`.
    #[must_use]
    pub fn navigator(&self, address: &str) -> ChapterNavigator {
        self.services.navigator(address)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
