use crate::app::components::icons::{InfoIcon, NetworkIcon, SearchIcon};
use crate::app::components::{Button, ButtonVariant, ScanControls, ScanList};
use crate::app::routes::Route;
use crate::domain::services::Pager;
use crate::shared::constants::DISCOVERY_ROWS_PER_PAGE;
use crate::shared::static_data::{discovery_scans, DISCOVERY_TABS};
use dioxus::prelude::*;

/// Network discovery: tab strip, paged discovery table and the live scan list.
#[component]
pub fn Network() -> Element {
    let scans = use_hook(discovery_scans);
    let mut tab = use_signal(|| 0usize);
    let total = scans.len();
    let mut pager = use_signal(move || Pager::new(DISCOVERY_ROWS_PER_PAGE, total));
    let nav = navigator();

    let current = pager();
    let rows = scans[current.range()].to_vec();
    let active_tab = tab();

    rsx! {
        section { class: "network-root",
            div { class: "panel network-shell",
                div { class: "network-title-row",
                    span { class: "network-title-icon", NetworkIcon { size: 22 } }
                    h2 { class: "network-title-text", "Network" }
                }
                div { class: "network-tabs", role: "tablist",
                    for (idx, label) in DISCOVERY_TABS.iter().enumerate() {
                        button {
                            key: "{label}",
                            r#type: "button",
                            role: "tab",
                            class: if idx == active_tab { "network-tab is-active" } else { "network-tab" },
                            aria_selected: idx == active_tab,
                            onclick: move |_| tab.set(idx),
                            "{label}"
                        }
                    }
                }
            }

            div { class: "panel network-panel",
                div { class: "network-panel-bar",
                    div { class: "network-actions",
                        Button {
                            onclick: move |_| {
                                nav.push(Route::NewScan {});
                            },
                            "New Scan"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| tracing::debug!("Discovery search requested"),
                            SearchIcon { size: 16 }
                            "Search"
                        }
                    }

                    div { class: "network-pagination",
                        div { class: "pager-chip",
                            button {
                                r#type: "button",
                                class: "pager-btn",
                                title: "First page",
                                disabled: current.is_first(),
                                onclick: move |_| pager.with_mut(|p| *p = p.first()),
                                "«"
                            }
                            button {
                                r#type: "button",
                                class: "pager-btn",
                                title: "Previous page",
                                disabled: current.is_first(),
                                onclick: move |_| pager.with_mut(|p| *p = p.prev()),
                                "‹"
                            }
                            span { class: "pager-label", "{current.label()}" }
                            button {
                                r#type: "button",
                                class: "pager-btn",
                                title: "Next page",
                                disabled: current.is_last(),
                                onclick: move |_| pager.with_mut(|p| *p = p.next()),
                                "›"
                            }
                            button {
                                r#type: "button",
                                class: "pager-btn",
                                title: "Last page",
                                disabled: current.is_last(),
                                onclick: move |_| pager.with_mut(|p| *p = p.last()),
                                "»"
                            }
                        }
                    }
                }

                div { class: "network-table-wrap",
                    table { aria_label: "Discovery scans table",
                        thead {
                            tr { class: "network-thead-row",
                                th { class: "th details", "Details" }
                                th { class: "th view", "View" }
                                th { class: "th", "Scan Title" }
                                th { class: "th status", "Scan Status" }
                                th { class: "th date", "Scan Date" }
                            }
                        }
                        tbody {
                            for row in rows.iter() {
                                tr { key: "{row.id}", class: "network-row",
                                    td { class: "cell details",
                                        button {
                                            r#type: "button",
                                            class: "icon-btn",
                                            title: "Scan details",
                                            aria_label: "Details for {row.title}",
                                            InfoIcon { size: 16 }
                                        }
                                    }
                                    td { class: "cell view",
                                        button {
                                            r#type: "button",
                                            class: "icon-btn",
                                            title: "View scan",
                                            aria_label: "View {row.title}",
                                            SearchIcon { size: 16 }
                                        }
                                    }
                                    td { class: "cell title", span { class: "scan-title", "{row.title}" } }
                                    td { class: "cell status",
                                        span { class: "{row.status.css_class()}", "{row.status.label()}" }
                                    }
                                    td { class: "cell date", span { class: "scan-date", "{row.date}" } }
                                }
                            }
                            if rows.is_empty() {
                                tr {
                                    td { colspan: "5", class: "empty-state", "No scans found." }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "panel network-live",
                h3 { class: "network-live__title", "Recent scans" }
                ScanControls {}
                ScanList {}
            }
        }
    }
}
