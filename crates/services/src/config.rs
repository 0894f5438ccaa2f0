//! Site configuration.
//!
//! Loaded with figment from defaults, an optional TOML file and
//! `COURSE_`-prefixed environment variables (later sources win). Nested keys
//! use a double underscore, e.g. `COURSE_STORAGE__THEME_KEY`.

use std::collections::BTreeSet;
use std::path::Path;

use course_core::layout::SIDEBAR_BREAKPOINT_PX;
use course_core::model::{ChapterEntry, ChapterId, CourseOutline, TOTAL_CHAPTERS, Theme};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::progress_tracker::{PROGRESS_KEY, TrackerConfig};
use crate::theme_service::THEME_KEY;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "course.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "COURSE_";

pub const DEFAULT_SITE_TITLE: &str = "Designing With Code";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Shown in the sidebar header and the window title.
    pub site_title: String,
    /// Chapters counted toward 100%.
    pub total_chapters: u8,
    pub default_theme: Theme,
    /// Widths at or below this are treated as mobile.
    pub sidebar_breakpoint_px: u32,
    pub storage: StorageKeys,
    /// Sidebar outline, in any order.
    pub chapters: Vec<ChapterEntry>,
}

/// Keys used in the browser key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub progress_key: String,
    pub theme_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            progress_key: PROGRESS_KEY.to_owned(),
            theme_key: THEME_KEY.to_owned(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: DEFAULT_SITE_TITLE.to_owned(),
            total_chapters: TOTAL_CHAPTERS,
            default_theme: Theme::default(),
            sidebar_breakpoint_px: SIDEBAR_BREAKPOINT_PX,
            storage: StorageKeys::default(),
            chapters: default_chapters(),
        }
    }
}

fn default_chapters() -> Vec<ChapterEntry> {
    [
        ("01-welcome.html", "Welcome"),
        ("02-html-basics.html", "HTML Basics"),
        ("03-css-foundations.html", "CSS Foundations"),
        ("04-layout.html", "Layout"),
        ("05-typography.html", "Typography"),
        ("06-color.html", "Color"),
        ("07-responsive.html", "Responsive Design"),
        ("08-javascript.html", "JavaScript"),
        ("09-accessibility.html", "Accessibility"),
        ("10-shipping.html", "Shipping"),
    ]
    .into_iter()
    .filter_map(|(file, title)| {
        ChapterId::parse(file)
            .ok()
            .map(|id| ChapterEntry::new(id, title))
    })
    .collect()
}

impl SiteConfig {
    /// Load configuration from defaults, `course.toml` and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading, parsing or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None::<&Path>)
    }

    /// Load configuration with an optional custom file path.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading, parsing or validation fails.
    pub fn load_from(config_path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        let file = config_path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or_else(|| CONFIG_FILE_NAME.into());

        let config: SiteConfig = Figment::new()
            .merge(Serialized::defaults(SiteConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_chapters == 0 {
            return Err(invalid("total_chapters must be greater than 0"));
        }
        if self.sidebar_breakpoint_px == 0 {
            return Err(invalid("sidebar_breakpoint_px must be greater than 0"));
        }
        if self.storage.progress_key.trim().is_empty() || self.storage.theme_key.trim().is_empty() {
            return Err(invalid("storage keys must not be empty"));
        }
        if self.storage.progress_key == self.storage.theme_key {
            return Err(invalid("progress_key and theme_key must differ"));
        }

        let mut seen = BTreeSet::new();
        for entry in &self.chapters {
            if !(1..=self.total_chapters).contains(&entry.file.ordinal()) {
                return Err(invalid(format!(
                    "chapter {} is outside 1..={} (total_chapters)",
                    entry.file, self.total_chapters
                )));
            }
            if !seen.insert(entry.file.ordinal()) {
                return Err(invalid(format!(
                    "chapter number {:02} is used more than once ({})",
                    entry.file.ordinal(),
                    entry.file
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            storage_key: self.storage.progress_key.clone(),
            total_chapters: self.total_chapters,
        }
    }

    #[must_use]
    pub fn outline(&self) -> CourseOutline {
        CourseOutline::new(self.chapters.clone())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn default_config_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_chapters, 10);
        assert_eq!(config.chapters.len(), 10);
        assert_eq!(config.storage.progress_key, "dwc_completed");
        assert_eq!(config.storage.theme_key, "dwc_theme");
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.sidebar_breakpoint_px, 900);
        assert_eq!(config.site_title, DEFAULT_SITE_TITLE);
    }

    #[test]
    fn rejects_zero_chapters() {
        let config = SiteConfig {
            total_chapters: 0,
            ..SiteConfig::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("total_chapters"));
    }

    #[test]
    fn rejects_outline_beyond_total_chapters() {
        let config = SiteConfig {
            total_chapters: 3,
            ..SiteConfig::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("04-layout.html"), "unexpected error: {err}");

        let mut config = SiteConfig::default();
        config.chapters.push(ChapterEntry::new(
            ChapterId::parse("00-prelude.html").unwrap(),
            "Prelude",
        ));
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_shared_keys() {
        let mut config = SiteConfig::default();
        config.storage.theme_key = config.storage.progress_key.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_chapter_numbers() {
        let mut config = SiteConfig::default();
        config.chapters.push(ChapterEntry::new(
            ChapterId::parse("01-again.html").unwrap(),
            "Again",
        ));
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("01"));
    }

    #[test]
    fn file_and_env_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "course.toml",
                r#"
                site_title = "Short Course"
                total_chapters = 3
                default_theme = "light"

                [storage]
                progress_key = "my_progress"

                [[chapters]]
                file = "01-one.html"
                title = "One"

                [[chapters]]
                file = "02-two.html"
                title = "Two"
                "#,
            )?;
            jail.set_env("COURSE_SIDEBAR_BREAKPOINT_PX", "720");
            jail.set_env("COURSE_STORAGE__THEME_KEY", "my_theme");

            let config = SiteConfig::load_from(Some("course.toml")).map_err(|e| e.to_string())?;
            assert_eq!(config.site_title, "Short Course");
            assert_eq!(config.total_chapters, 3);
            assert_eq!(config.default_theme, Theme::Light);
            assert_eq!(config.sidebar_breakpoint_px, 720);
            assert_eq!(config.storage.progress_key, "my_progress");
            assert_eq!(config.storage.theme_key, "my_theme");
            assert_eq!(config.outline().len(), 2);
            Ok(())
        });
    }

    #[test]
    fn outline_rejects_non_chapter_files() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "course.toml",
                r#"
                [[chapters]]
                file = "index.html"
                title = "Home"
                "#,
            )?;
            assert!(SiteConfig::load_from(Some("course.toml")).is_err());
            Ok(())
        });
    }

    #[test]
    fn missing_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = SiteConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config, SiteConfig::default());
            Ok(())
        });
    }
}
