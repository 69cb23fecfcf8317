use crate::app::components::icons::{MenuIcon, PinIcon, PinOutlinedIcon};
use crate::domain::models::{NavItem, NAV_ICON_SIZE};
use crate::domain::services::sidebar::DEFAULT_DESKTOP_MIN_WIDTH;
use crate::domain::services::{SidebarConfig, SidebarMode};
use crate::shared::hooks::use_sidebar;
use chrono::Datelike;
use dioxus::prelude::*;

/// Responsive primary navigation.
///
/// Desktop: icon rail that expands on hover, on the toggle button or while
/// pinned. Mobile: drawer overlay, optionally controlled through
/// `open`/`on_open_change`.
#[component]
pub fn ResponsiveSidebar(
    items: Vec<NavItem>,
    on_select: Option<EventHandler<String>>,
    #[props(default = "PCI".to_string())] product: String,
    #[props(default = "PCI Compliance".to_string())] sub_product: String,
    year: Option<i32>,
    #[props(default = true)] hover_expand: bool,
    #[props(default = DEFAULT_DESKTOP_MIN_WIDTH)] desktop_min_width: u32,
    #[props(default = true)] mobile_overlay: bool,
    open: Option<bool>,
    on_open_change: Option<EventHandler<bool>>,
) -> Element {
    let config = SidebarConfig {
        hover_expand,
        desktop_min_width,
        mobile_overlay,
    };
    let sidebar = use_sidebar(config, open, on_select, on_open_change);
    let view = sidebar.view();
    let mode = view.mode();

    let class_name = view.class_name();
    let labels = view.shows_labels();
    let pinned = view.is_pinned();
    let year = year.unwrap_or_else(|| chrono::Local::now().year());

    let toggle_label = match mode {
        SidebarMode::Desktop { expanded: true, .. } => Some("Collapse sidebar"),
        SidebarMode::Desktop { expanded: false, .. } => Some("Expand sidebar"),
        SidebarMode::MobileOverlay { open: true } => Some("Close navigation"),
        SidebarMode::MobileOverlay { open: false } => Some("Open navigation"),
        // inline rail on small screens has nothing to toggle
        SidebarMode::MobileInline => None,
    };
    let show_backdrop = matches!(mode, SidebarMode::MobileOverlay { open: true });
    let entries: Vec<(String, NavItem)> = items
        .iter()
        .map(|item| (item.id.clone(), item.clone()))
        .collect();

    rsx! {
        if show_backdrop {
            div {
                class: "rsp__backdrop",
                "aria-hidden": "true",
                onclick: move |_| sidebar.toggle(),
            }
        }
        aside {
            class: "{class_name}",
            aria_label: "Primary navigation",
            onmouseenter: move |_| sidebar.pointer_enter(),
            onmouseleave: move |_| sidebar.pointer_leave(),

            div { class: "rsp__header",
                div { class: "rsp__header-left",
                    div { class: "rsp__product", aria_hidden: !labels, "{product}" }
                    if labels {
                        div { class: "rsp__subproduct", "{sub_product}" }
                    }
                }

                div { class: "rsp__controls",
                    if let Some(label) = toggle_label {
                        button {
                            r#type: "button",
                            class: "rsp__btn ghost",
                            aria_label: label,
                            aria_expanded: labels,
                            onclick: move |_| sidebar.toggle(),
                            MenuIcon { size: NAV_ICON_SIZE }
                        }
                    }
                    if view.is_desktop() {
                        button {
                            r#type: "button",
                            class: "rsp__btn ghost",
                            title: if pinned { "Unpin" } else { "Pin" },
                            aria_pressed: pinned,
                            onclick: move |_| sidebar.toggle_pin(),
                            if pinned {
                                PinIcon { size: NAV_ICON_SIZE }
                            } else {
                                PinOutlinedIcon { size: NAV_ICON_SIZE }
                            }
                        }
                    }
                }

                div { class: "rsp__corner-notch", "aria-hidden": "true" }
            }

            nav { class: "rsp__nav", role: "navigation", aria_label: "Main",
                for (id, item) in entries {
                    button {
                        key: "{item.id}",
                        r#type: "button",
                        class: if item.active { "rsp__item is-active" } else { "rsp__item" },
                        title: "{item.label}",
                        aria_label: "{item.label}",
                        aria_current: item.active.then_some("page"),
                        onclick: move |_| sidebar.select(id.clone()),
                        span { class: "rsp__icon", "aria-hidden": "true",
                            if let Some(icon) = &item.icon {
                                {icon.render(NAV_ICON_SIZE)}
                            }
                        }
                        span { class: "rsp__label", "{item.label}" }
                    }
                }
            }

            footer { class: "rsp__footer",
                span { class: "rsp__copy", "© {year}" }
            }
        }
    }
}
