#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod navigation;
pub mod progress_tracker;
pub mod theme_service;

pub use app_services::AppServices;
pub use config::SiteConfig;
pub use error::{AppServicesError, ConfigError};
pub use navigation::{ChapterNavigator, NavigationOutcome};
pub use progress_tracker::{
    Change, LoadOutcome, Mutation, PersistOutcome, ProgressTracker, TrackerConfig,
};
pub use theme_service::ThemeService;
