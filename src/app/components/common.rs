//! Feedback blocks for async content: loading, failure, nothing to show.

use crate::app::components::icons::BellIcon;
use crate::app::components::{Button, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        p { class: "c-loading", role: "status", aria_live: "polite",
            span { class: "c-loading__spinner", "aria-hidden": "true" }
            span { class: "c-loading__text", "{message}" }
        }
    }
}

/// Inline alert. With `on_retry` a retry button is shown next to the text.
#[component]
pub fn ErrorMessage(message: String, on_retry: Option<EventHandler>) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            span { class: "c-error__icon", "aria-hidden": "true", "!" }
            p { class: "c-error__text", "{message}" }
            if let Some(retry) = on_retry {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

#[component]
pub fn EmptyState(
    title: String,
    description: Option<String>,
    action_text: Option<String>,
    action_handler: Option<EventHandler>,
) -> Element {
    let action = action_text.zip(action_handler);

    rsx! {
        div { class: "c-empty-state",
            h3 { class: "c-empty-state__title", "{title}" }
            if let Some(description) = description {
                p { class: "c-empty-state__text", "{description}" }
            }
            if let Some((text, handler)) = action {
                Button { variant: ButtonVariant::Secondary, onclick: move |_| handler.call(()), "{text}" }
            }
        }
    }
}

/// Bell button with an unread count. Zero hides the counter.
#[component]
pub fn NotificationBadge(count: u32) -> Element {
    let label = match count {
        0 => "Notifications".to_string(),
        1 => "1 unread notification".to_string(),
        n => format!("{n} unread notifications"),
    };

    rsx! {
        button { r#type: "button", class: "c-badge-button", aria_label: "{label}", title: "{label}",
            BellIcon { size: 22 }
            if count > 0 {
                span { class: "c-badge-button__count", "{count}" }
            }
        }
    }
}
