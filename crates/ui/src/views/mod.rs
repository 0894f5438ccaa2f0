mod celebration;
mod chapter_nav;
mod course_progress;
mod pages;
mod shell;
mod sidebar;
mod state;
mod theme_toggle;

pub use celebration::Celebration;
pub use chapter_nav::ChapterNav;
pub use course_progress::{CourseProgressBar, ReadingProgressBar};
pub use pages::{ChapterPage, LandingPage};
pub use shell::CourseShell;
pub use sidebar::Sidebar;
pub use state::ShellState;
pub use theme_toggle::ThemeToggle;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
