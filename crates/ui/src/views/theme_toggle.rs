use course_core::model::Theme;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::state::ShellState;

#[component]
pub fn ThemeToggle() -> Element {
    let ctx = use_context::<AppContext>();
    let mut shell = use_context::<ShellState>();
    let theme = ctx.theme();

    // The label names the theme the button switches to.
    let label = match *shell.theme.read() {
        Theme::Dark => "Light mode",
        Theme::Light => "Dark mode",
    };

    rsx! {
        button {
            id: "themeToggle",
            class: "theme-toggle",
            r#type: "button",
            aria_label: "Toggle colour theme",
            onclick: move |_| {
                let next = theme.toggle();
                shell.theme.set(next);
            },
            "{label}"
        }
    }
}
