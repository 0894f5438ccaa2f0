mod nav_vm;
mod progress_vm;

pub use nav_vm::{
    ChapterNavVm, NavItemVm, NavLinkVm, chapter_href, map_chapter_nav, map_nav_items,
};
pub use progress_vm::{ProgressVm, reading_width};
