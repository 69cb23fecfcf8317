use crate::shared::state::use_app_store;
use dioxus::prelude::*;

/// Sun/moon switch in the header. The theme watcher persists the change.
#[component]
pub fn ThemeToggle() -> Element {
    let store = use_app_store();
    let mode = (store.theme)();
    let target = mode.opposite().as_str();

    rsx! {
        button {
            r#type: "button",
            class: "c-theme-toggle",
            "data-mode": mode.as_str(),
            title: "Switch to {target} theme",
            aria_label: "Toggle light/dark mode",
            aria_pressed: mode.is_dark(),
            onclick: move |_| store.toggle_theme(),
            span { class: "c-theme-toggle__ball" }
            if mode.is_dark() {
                span { class: "c-theme-toggle__stars",
                    for n in 0..3 {
                        span { key: "{n}", class: "c-theme-toggle__star" }
                    }
                }
            }
        }
    }
}
