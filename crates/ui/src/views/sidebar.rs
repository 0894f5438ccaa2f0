use course_core::model::LANDING_PAGE;
use course_core::navigation::is_active_link;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::views::course_progress::CourseProgressBar;
use crate::views::state::ShellState;
use crate::views::theme_toggle::ThemeToggle;
use crate::vm::{NavItemVm, map_nav_items};

#[component]
pub fn Sidebar(address: String) -> Element {
    let ctx = use_context::<AppContext>();
    let mut shell = use_context::<ShellState>();

    // Read the progress signal so the ticks refresh after every navigation.
    let progress = shell.progress.read().clone();
    let completed = ctx.progress().completed();
    let items = map_nav_items(&ctx.outline(), &address, &completed);
    let open = shell.sidebar.read().is_open();
    let contents_class = if is_active_link(LANDING_PAGE, &address) {
        "sidebar__home sidebar__home--active"
    } else {
        "sidebar__home"
    };

    rsx! {
        nav {
            id: "sidebar",
            class: if open { "sidebar sidebar--open" } else { "sidebar" },
            div { class: "sidebar__header",
                Link {
                    to: "/",
                    class: contents_class,
                    onclick: move |_| shell.nav_link_followed(),
                    "{ctx.site_title()}"
                }
                ThemeToggle {}
            }
            ol { class: "sidebar__nav",
                for item in items {
                    SidebarItem { key: "{item.href}", item: item.clone() }
                }
            }
            div { class: "sidebar__footer",
                CourseProgressBar { progress }
            }
        }
    }
}

#[component]
fn SidebarItem(item: NavItemVm) -> Element {
    let mut shell = use_context::<ShellState>();
    let mut class = String::from("nav-item");
    if item.active {
        class.push_str(" nav-item--active");
    }
    if item.completed {
        class.push_str(" nav-item--done");
    }

    rsx! {
        li {
            Link {
                to: item.href.clone(),
                class,
                onclick: move |_| shell.nav_link_followed(),
                span { class: "nav-item__number", "{item.number}" }
                span { class: "nav-item__title", "{item.title}" }
                if item.completed {
                    span { class: "nav-item__check", aria_label: "completed", "✓" }
                }
            }
        }
    }
}
