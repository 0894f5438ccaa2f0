use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_route};

use crate::views::{ChapterPage, CourseShell, LandingPage};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LandingView)] Landing {},
        #[route("/:file", ChapterView)] Chapter { file: String },
}

#[component]
fn Layout() -> Element {
    let address = use_route::<Route>().to_string();
    rsx! {
        CourseShell { address,
            Outlet::<Route> {}
        }
    }
}

#[component]
fn LandingView() -> Element {
    rsx! { LandingPage {} }
}

#[component]
fn ChapterView(file: String) -> Element {
    rsx! { ChapterPage { address: format!("/{file}") } }
}
