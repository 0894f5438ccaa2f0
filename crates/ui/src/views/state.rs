use course_core::layout::SidebarState;
use course_core::model::Theme;
use dioxus::prelude::*;
use services::NavigationOutcome;

use crate::vm::ProgressVm;

/// Page-shell state shared by the sidebar, the chapter controls and the
/// celebration banner.
#[derive(Clone, Copy, PartialEq)]
pub struct ShellState {
    pub progress: Signal<ProgressVm>,
    pub theme: Signal<Theme>,
    pub sidebar: Signal<SidebarState>,
    pub viewport_width: Signal<u32>,
    pub reading: Signal<f64>,
    pub celebrate: Signal<bool>,
}

impl ShellState {
    /// Reflect a navigation outcome in the fill bar and celebration banner.
    pub fn apply_outcome(&mut self, outcome: &NavigationOutcome) {
        self.progress.set(ProgressVm::for_outcome(outcome));
        if outcome.celebrate {
            self.celebrate.set(true);
        }
    }

    /// A sidebar link was followed.
    pub fn nav_link_followed(&mut self) {
        let width = *self.viewport_width.read();
        self.sidebar.write().on_nav_link(width);
    }
}
