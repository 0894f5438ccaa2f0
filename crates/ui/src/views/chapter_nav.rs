use course_core::model::ChapterId;
use course_core::navigation::NavDirection;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::views::state::ShellState;
use crate::vm::{NavLinkVm, map_chapter_nav};

/// Previous/next controls at the foot of a chapter.
///
/// Following "next" marks the current chapter as done, "previous" takes the
/// mark back. On the last chapter a graduation control replaces "next".
#[component]
pub fn ChapterNav(address: String) -> Element {
    let ctx = use_context::<AppContext>();
    let Ok(current) = ChapterId::from_address(&address) else {
        return rsx! {};
    };
    let vm = map_chapter_nav(&ctx.outline(), &current);

    rsx! {
        nav { class: "chapter-nav",
            if let Some(link) = vm.previous {
                NavControl { address: address.clone(), direction: NavDirection::Previous, link }
            }
            if let Some(link) = vm.next {
                NavControl { address: address.clone(), direction: NavDirection::Next, link }
            }
            if vm.can_graduate {
                GraduateControl { address: address.clone() }
            }
        }
    }
}

#[component]
fn NavControl(address: String, direction: NavDirection, link: NavLinkVm) -> Element {
    let ctx = use_context::<AppContext>();
    let mut shell = use_context::<ShellState>();
    let navigator = ctx.navigator(&address);
    let target = link.href.clone();
    let (class, caption) = match direction {
        NavDirection::Next => ("chapter-nav__link chapter-nav__link--next", "Next"),
        NavDirection::Previous => ("chapter-nav__link chapter-nav__link--prev", "Previous"),
    };

    rsx! {
        Link {
            to: link.href.clone(),
            class,
            onclick: move |_| {
                let outcome = navigator.activate(direction, &target);
                shell.apply_outcome(&outcome);
            },
            span { class: "chapter-nav__direction", "{caption}" }
            span { class: "chapter-nav__title", "{link.title}" }
        }
    }
}

#[component]
fn GraduateControl(address: String) -> Element {
    let ctx = use_context::<AppContext>();
    let mut shell = use_context::<ShellState>();
    let navigator = ctx.navigator(&address);

    rsx! {
        Link {
            to: "/",
            class: "chapter-nav__link chapter-nav__link--graduate",
            onclick: move |_| {
                let outcome = navigator.graduate();
                shell.apply_outcome(&outcome);
            },
            span { class: "chapter-nav__direction", "Finish" }
            span { class: "chapter-nav__title", "Complete the course" }
        }
    }
}
