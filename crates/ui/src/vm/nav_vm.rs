use course_core::model::{ChapterEntry, ChapterId, CourseOutline, ProgressState};
use course_core::navigation::is_active_link;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItemVm {
    pub href: String,
    pub number: String,
    pub title: String,
    pub active: bool,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLinkVm {
    pub href: String,
    pub title: String,
}

/// Controls at the foot of a chapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterNavVm {
    pub previous: Option<NavLinkVm>,
    pub next: Option<NavLinkVm>,
    pub can_graduate: bool,
}

#[must_use]
pub fn chapter_href(entry: &ChapterEntry) -> String {
    format!("/{}", entry.file)
}

fn link(entry: &ChapterEntry) -> NavLinkVm {
    NavLinkVm {
        href: chapter_href(entry),
        title: entry.title.clone(),
    }
}

#[must_use]
pub fn map_nav_items(
    outline: &CourseOutline,
    current_address: &str,
    completed: &ProgressState,
) -> Vec<NavItemVm> {
    outline
        .entries()
        .iter()
        .map(|entry| {
            let href = chapter_href(entry);
            NavItemVm {
                active: is_active_link(&href, current_address),
                completed: completed.contains(&entry.file),
                number: format!("{:02}", entry.file.ordinal()),
                title: entry.title.clone(),
                href,
            }
        })
        .collect()
}

/// Previous/next controls for `current`. The first chapter points back to the
/// contents page, the last one offers graduation instead of "next".
#[must_use]
pub fn map_chapter_nav(outline: &CourseOutline, current: &ChapterId) -> ChapterNavVm {
    let previous = outline.previous(current).map(link).or_else(|| {
        Some(NavLinkVm {
            href: "/".to_string(),
            title: "Contents".to_string(),
        })
    });
    ChapterNavVm {
        previous,
        next: outline.next(current).map(link),
        can_graduate: outline.is_last(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline() -> CourseOutline {
        CourseOutline::new(vec![
            ChapterEntry::new(ChapterId::parse("01-intro.html").unwrap(), "Intro"),
            ChapterEntry::new(ChapterId::parse("02-basics.html").unwrap(), "Basics"),
            ChapterEntry::new(ChapterId::parse("03-layout.html").unwrap(), "Layout"),
        ])
    }

    #[test]
    fn marks_active_and_completed_items() {
        let completed = ProgressState::from_ids([ChapterId::parse("01-intro.html").unwrap()]);
        let items = map_nav_items(&outline(), "/02-basics.html", &completed);
        assert_eq!(items.len(), 3);
        assert!(items[0].completed && !items[0].active);
        assert!(items[1].active && !items[1].completed);
        assert_eq!(items[1].number, "02");
        assert_eq!(items[1].href, "/02-basics.html");
    }

    #[test]
    fn landing_page_has_no_active_chapter() {
        let items = map_nav_items(&outline(), "/", &ProgressState::new());
        assert!(items.iter().all(|item| !item.active));
    }

    #[test]
    fn first_chapter_goes_back_to_contents() {
        let nav = map_chapter_nav(&outline(), &ChapterId::parse("01-intro.html").unwrap());
        assert_eq!(nav.previous.unwrap().href, "/");
        assert_eq!(nav.next.unwrap().title, "Basics");
        assert!(!nav.can_graduate);
    }

    #[test]
    fn last_chapter_offers_graduation() {
        let nav = map_chapter_nav(&outline(), &ChapterId::parse("03-layout.html").unwrap());
        assert_eq!(nav.previous.unwrap().title, "Basics");
        assert!(nav.next.is_none());
        assert!(nav.can_graduate);
    }
}
