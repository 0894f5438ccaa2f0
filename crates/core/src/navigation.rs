//! Address handling and the navigation-direction policy.
//!
//! Moving forward past a chapter completes it; moving back from a chapter
//! un-completes it. Completion therefore means "most recently moved past",
//! not "ever visited".

use url::Url;

use crate::model::{ChapterId, LANDING_PAGE};

/// Which chapter control the learner activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavDirection {
    Next,
    Previous,
}

/// Tracker mutation implied by a navigation event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressAction {
    Mark(ChapterId),
    Unmark(ChapterId),
}

/// Final path segment of an absolute URL or a relative/absolute path.
///
/// Query strings and fragments are dropped. A trailing slash yields `""`.
#[must_use]
pub fn final_segment(address: &str) -> String {
    let address = address.trim();
    if let Ok(url) = Url::parse(address) {
        return url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_owned();
    }
    let path = address.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/').next().unwrap_or_default().to_owned()
}

/// File name of the page at `address`; the bare directory maps to the landing page.
#[must_use]
pub fn page_file(address: &str) -> String {
    let segment = final_segment(address);
    if segment.is_empty() {
        LANDING_PAGE.to_owned()
    } else {
        segment
    }
}

/// Whether a sidebar link points at the page currently shown.
#[must_use]
pub fn is_active_link(href: &str, current_address: &str) -> bool {
    let target = final_segment(href);
    !target.is_empty() && target == page_file(current_address)
}

/// Resolve a navigation control activation into a tracker mutation.
///
/// Returns `None` when the current page is not a chapter or when the control
/// targets something other than a chapter (contents page, landing page).
#[must_use]
pub fn resolve_action(
    current_address: &str,
    direction: NavDirection,
    target_href: &str,
) -> Option<ProgressAction> {
    ChapterId::from_address(target_href).ok()?;
    let current = ChapterId::from_address(current_address).ok()?;
    Some(match direction {
        NavDirection::Next => ProgressAction::Mark(current),
        NavDirection::Previous => ProgressAction::Unmark(current),
    })
}
