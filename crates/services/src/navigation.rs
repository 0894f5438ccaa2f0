use std::sync::Arc;

use course_core::model::{ChapterId, Percentage};
use course_core::navigation::{NavDirection, ProgressAction, resolve_action};
use tracing::debug;

use crate::progress_tracker::{Mutation, ProgressTracker};

/// What a navigation control activation did to course progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub action: Option<ProgressAction>,
    pub mutation: Option<Mutation>,
    /// Arithmetic percentage after the event.
    pub percentage: Percentage,
    /// Set by [`ChapterNavigator::graduate`].
    pub graduated: bool,
    /// The course just reached 100%, or was graduated.
    pub celebrate: bool,
}

/// Binds the page being shown to the tracker and applies the
/// navigation-direction policy to control activations.
#[derive(Clone)]
pub struct ChapterNavigator {
    tracker: Arc<ProgressTracker>,
    current_address: String,
}

impl ChapterNavigator {
    #[must_use]
    pub fn new(tracker: Arc<ProgressTracker>, current_address: impl Into<String>) -> Self {
        Self {
            tracker,
            current_address: current_address.into(),
        }
    }

    /// Chapter shown on this page, `None` on the landing page and other non-chapters.
    #[must_use]
    pub fn current_chapter(&self) -> Option<ChapterId> {
        ChapterId::from_address(&self.current_address).ok()
    }

    /// A "next" or "previous" control pointing at `target_href` was activated.
    pub fn activate(&self, direction: NavDirection, target_href: &str) -> NavigationOutcome {
        let before = self.tracker.current_percentage();
        let action = resolve_action(&self.current_address, direction, target_href);
        let mutation = action.as_ref().map(|action| match action {
            ProgressAction::Mark(id) => self.tracker.mark_completed(id),
            ProgressAction::Unmark(id) => self.tracker.unmark_completed(id),
        });
        debug!(
            address = %self.current_address,
            ?direction,
            target = target_href,
            ?action,
            "navigation control activated"
        );
        let percentage = self.tracker.current_percentage();
        NavigationOutcome {
            action,
            mutation,
            percentage,
            graduated: false,
            celebrate: !before.is_full() && percentage.is_full(),
        }
    }

    /// The learner finished the course from the current chapter.
    pub fn graduate(&self) -> NavigationOutcome {
        let Some(current) = self.current_chapter() else {
            return NavigationOutcome {
                action: None,
                mutation: None,
                percentage: self.tracker.current_percentage(),
                graduated: false,
                celebrate: false,
            };
        };
        let mutation = self.tracker.force_complete(&current);
        NavigationOutcome {
            action: Some(ProgressAction::Mark(current)),
            percentage: mutation.percentage,
            mutation: Some(mutation),
            graduated: true,
            celebrate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::InMemoryStore;

    fn tracker() -> Arc<ProgressTracker> {
        Arc::new(ProgressTracker::with_defaults(Arc::new(InMemoryStore::new())))
    }

    #[test]
    fn next_then_previous_round_trip() {
        let tracker = tracker();
        let page = ChapterNavigator::new(Arc::clone(&tracker), "/course/05-x.html");

        let forward = page.activate(NavDirection::Next, "06-y.html");
        assert_eq!(forward.percentage.value(), 10);
        assert!(forward.mutation.as_ref().is_some_and(Mutation::changed));

        let back = page.activate(NavDirection::Previous, "04-w.html");
        assert_eq!(back.percentage.value(), 0);
    }

    #[test]
    fn contents_link_does_not_complete() {
        let tracker = tracker();
        let page = ChapterNavigator::new(Arc::clone(&tracker), "/course/05-x.html");
        let outcome = page.activate(NavDirection::Next, "index.html");
        assert!(outcome.action.is_none());
        assert!(outcome.mutation.is_none());
        assert!(tracker.completed().is_empty());
    }

    #[test]
    fn landing_page_has_no_chapter() {
        let page = ChapterNavigator::new(tracker(), "https://example.org/course/");
        assert!(page.current_chapter().is_none());
        let outcome = page.graduate();
        assert!(!outcome.graduated);
        assert!(!outcome.celebrate);
    }

    #[test]
    fn reaching_full_celebrates_once() {
        let tracker = tracker();
        for n in 1..=9 {
            tracker.mark_completed(format!("{n:02}-c.html"));
        }
        let page = ChapterNavigator::new(Arc::clone(&tracker), "/10-c.html");
        let outcome = page.activate(NavDirection::Next, "11-bonus.html");
        assert!(outcome.percentage.is_full());
        assert!(outcome.celebrate);

        let again = page.activate(NavDirection::Next, "11-bonus.html");
        assert!(!again.celebrate);
    }
}
