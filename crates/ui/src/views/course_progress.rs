use dioxus::prelude::*;

use crate::vm::{ProgressVm, reading_width};

/// Overall completion bar in the sidebar footer.
#[component]
pub fn CourseProgressBar(progress: ProgressVm) -> Element {
    rsx! {
        div { class: "course-progress",
            span { class: "course-progress__label", "{progress.title}" }
            div { class: "course-progress__track",
                div {
                    id: "courseProgress",
                    class: "course-progress__fill",
                    style: "width: {progress.width}",
                    title: "{progress.title}",
                }
            }
        }
    }
}

/// Thin bar along the top edge that follows the scroll position.
#[component]
pub fn ReadingProgressBar(percent: f64) -> Element {
    let width = reading_width(percent);
    rsx! {
        div { id: "progressBar", class: "reading-progress", style: "width: {width}" }
    }
}
