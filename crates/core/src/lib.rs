#![forbid(unsafe_code)]

pub mod layout;
pub mod model;
pub mod navigation;

pub use model::{ChapterId, Percentage, ProgressState, TOTAL_CHAPTERS, Theme};
pub use navigation::{NavDirection, ProgressAction};
