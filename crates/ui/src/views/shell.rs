use course_core::layout::{SidebarState, reading_progress};
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::celebration::Celebration;
use crate::views::course_progress::ReadingProgressBar;
use crate::views::sidebar::Sidebar;
use crate::views::state::ShellState;
use crate::vm::ProgressVm;

const SCROLL_CONTAINER_STYLE: &str = "height: 100vh; overflow-y: auto;";

/// Page chrome around every route: reading bar, sidebar, overlay and content.
///
/// Seeds [`ShellState`] from the tracker and theme service, so the first
/// paint already reflects what storage held at load.
#[component]
pub fn CourseShell(address: String, children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let tracker = ctx.progress();
    let themes = ctx.theme();
    let breakpoint = ctx.config().sidebar_breakpoint_px;

    let progress = use_signal(move || ProgressVm::from_percentage(tracker.current_percentage()));
    let theme = use_signal(move || themes.current());
    let sidebar = use_signal(move || SidebarState::new(breakpoint));
    let viewport_width = use_signal(|| 0_u32);
    let reading = use_signal(|| 0.0_f64);
    let celebrate = use_signal(|| false);
    let mut shell = use_context_provider(|| ShellState {
        progress,
        theme,
        sidebar,
        viewport_width,
        reading,
        celebrate,
    });

    let theme_name = shell.theme.read().as_str();
    let open = shell.sidebar.read().is_open();
    let percent = *shell.reading.read();

    rsx! {
        // The shell is the scroll container, so its own scroll events drive the reading bar.
        div {
            class: "site",
            style: "{SCROLL_CONTAINER_STYLE}",
            "data-theme": theme_name,
            onscroll: move |evt: ScrollEvent| {
                let data = evt.data();
                shell.reading.set(reading_progress(
                    data.scroll_top(),
                    f64::from(data.scroll_height()),
                    f64::from(data.client_height()),
                ));
            },
            onresize: move |evt: ResizeEvent| {
                if let Ok(size) = evt.data().get_border_box_size() {
                    let width = size.width.max(0.0).round() as u32;
                    shell.viewport_width.set(width);
                    shell.sidebar.write().on_resize(width);
                }
            },
            ReadingProgressBar { percent }
            button {
                id: "hamburger",
                class: "hamburger",
                r#type: "button",
                aria_label: "Toggle navigation",
                aria_expanded: "{open}",
                onclick: move |_| shell.sidebar.write().toggle(),
                "Menu"
            }
            Sidebar { address: address.clone() }
            if open {
                div {
                    id: "sidebarOverlay",
                    class: "sidebar-overlay sidebar-overlay--open",
                    onclick: move |_| shell.sidebar.write().close(),
                }
            }
            main { class: "content", {children} }
            Celebration {}
        }
    }
}
