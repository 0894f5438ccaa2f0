use dioxus::prelude::*;

use crate::views::state::ShellState;

/// Banner shown once the whole course has been completed.
#[component]
pub fn Celebration() -> Element {
    let mut shell = use_context::<ShellState>();
    if !*shell.celebrate.read() {
        return rsx! {};
    }

    rsx! {
        div { class: "celebration", role: "status",
            h2 { "Course complete!" }
            p { "Every chapter is marked as done. Nice work." }
            button {
                r#type: "button",
                class: "celebration__dismiss",
                onclick: move |_| shell.celebrate.set(false),
                "Dismiss"
            }
        }
    }
}
