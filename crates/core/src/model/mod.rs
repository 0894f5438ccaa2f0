mod ids;
mod outline;
mod progress;
mod theme;

pub use ids::{ChapterId, ChapterIdError, LANDING_PAGE};
pub use outline::{ChapterEntry, CourseOutline};
pub use progress::{Percentage, ProgressState, TOTAL_CHAPTERS};
pub use theme::{ParseThemeError, Theme};
