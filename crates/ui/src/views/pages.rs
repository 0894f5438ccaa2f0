use course_core::model::ChapterId;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::views::chapter_nav::ChapterNav;
use crate::vm::chapter_href;

/// Table of contents.
#[component]
pub fn LandingPage() -> Element {
    let ctx = use_context::<AppContext>();
    let outline = ctx.outline();
    let start = outline.entries().first().map(chapter_href);
    let count = outline.len();

    rsx! {
        section { class: "landing",
            h1 { "{ctx.site_title()}" }
            p { class: "landing__meta", "{count} chapters" }
            ol { class: "landing__toc",
                for entry in outline.entries().iter() {
                    li { key: "{entry.file}",
                        Link { to: chapter_href(entry), "{entry.title}" }
                    }
                }
            }
            if let Some(href) = start {
                Link { to: href, class: "landing__start", "Start the course" }
            }
        }
    }
}

#[component]
pub fn ChapterPage(address: String) -> Element {
    let ctx = use_context::<AppContext>();
    let Ok(id) = ChapterId::from_address(&address) else {
        return rsx! {
            article { class: "chapter chapter--missing",
                h1 { "Page not found" }
                Link { to: "/", "Back to contents" }
            }
        };
    };
    // Chapters outside the outline still render, titled by file name.
    let title = ctx
        .outline()
        .get(&id)
        .map_or_else(|| id.to_string(), |entry| entry.title.clone());

    rsx! {
        article { class: "chapter",
            header { class: "chapter__header",
                span { class: "chapter__number", "Chapter {id.ordinal()}" }
                h1 { "{title}" }
            }
            ChapterNav { address }
        }
    }
}
