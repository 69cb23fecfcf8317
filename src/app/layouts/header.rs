use crate::app::components::{NotificationBadge, ThemeToggle};
use crate::shared::constants::NOTIFICATION_COUNT;
use crate::shared::hooks::use_session;
use crate::shared::static_data::demo_user;
use dioxus::prelude::*;

/// Top bar: brand, notifications, user chip, theme toggle and logout.
#[component]
pub fn Header(page_title: String) -> Element {
    let session = use_session();
    let user = session.user.read().clone();

    rsx! {
        header { class: "c-header",
            div { class: "c-header__left",
                div { class: "c-header__logo", "aria-hidden": "true", "Q" }
                div { class: "c-header__brand",
                    div { class: "c-header__brand-name", "Qualys" }
                    div { class: "c-header__brand-sub", "{page_title}" }
                }
            }

            div { class: "c-header__right",
                NotificationBadge { count: NOTIFICATION_COUNT }
                ThemeToggle {}

                if let Some(user) = user {
                    div { class: "c-header__user-chip", title: "{user.name}",
                        span { class: "c-header__initials", "{user.display_initials()}" }
                    }
                    div { class: "c-header__portal",
                        div { class: "c-header__portal-title",
                            {user.role.clone().unwrap_or_else(|| "Merchant Portal".to_string())}
                        }
                        div { class: "c-header__portal-sub", "Powered by Qualys" }
                    }
                    button {
                        r#type: "button",
                        class: "c-button c-button--ghost",
                        onclick: move |_| session.logout(),
                        "Log out"
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "c-button c-button--primary",
                        onclick: move |_| session.login(demo_user()),
                        "Sign in"
                    }
                }
            }
        }
    }
}
