use std::sync::Arc;

use course_core::model::ChapterId;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::AppServices;

use crate::context::{UiApp, build_app_context};
use crate::views::{ChapterPage, CourseShell, LandingPage};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn site_title(&self) -> String {
        "Test Course".to_string()
    }

    fn services(&self) -> AppServices {
        self.services.clone()
    }
}

/// Address of the page under test, e.g. `"/"` or `"/02-html-basics.html"`.
#[derive(Clone, PartialEq, Eq)]
struct PageAddress(String);

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    address: String,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| PageAddress(props.address.clone()));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let PageAddress(address) = use_context::<PageAddress>();
    if ChapterId::from_address(&address).is_ok() {
        rsx! {
            CourseShell { address: address.clone(),
                ChapterPage { address }
            }
        }
    } else {
        rsx! {
            CourseShell { address,
                LandingPage {}
            }
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(address: &str, services: AppServices) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            address: address.to_string(),
        },
    );
    ViewHarness { dom, services }
}
