use crate::app::components::{Button, ButtonVariant, Card, SeverityBarChart};
use crate::app::routes::Route;
use crate::shared::state::use_app_store;
use crate::shared::static_data::home_data;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let data = use_hook(home_data);
    let store = use_app_store();
    let nav = navigator();

    let banner = data.banner.clone();
    let stats = data.stats.clone();
    let details = data.scan_details.clone();
    let support = data.support.clone();

    rsx! {
        section { class: "content-grid", aria_label: "Home content",
            div { class: "col-main",
                // Banner
                div { class: "panel banner", role: "region", aria_label: "status banner",
                    div { class: "banner__left",
                        div { class: "banner__dot", "aria-hidden": "true" }
                        div {
                            div { class: "banner__title", "{banner.status}" }
                            div { class: "banner__compliance",
                                span { class: "pill pill--danger", "{banner.compliance}" }
                                span { class: "muted", "{banner.compliance_note}" }
                            }
                        }
                    }
                    div { class: "banner__actions",
                        for (idx, action) in banner.actions.iter().cloned().enumerate() {
                            Button {
                                key: "{action}",
                                variant: if idx == 0 { ButtonVariant::Pill } else { ButtonVariant::Ghost },
                                onclick: move |_| {
                                    if idx == 0 {
                                        nav.push(Route::NewScan {});
                                    } else {
                                        tracing::info!(action_index = idx, "Banner action clicked");
                                    }
                                },
                                "{action}"
                            }
                        }
                    }
                }

                // Stat cards
                div { class: "grid-2",
                    div { class: "panel stat-card stat-card--blue", role: "region", aria_label: "total hosts",
                        div { class: "stat-card__title", "Total Hosts" }
                        div { class: "stat-card__value", "{stats.total_hosts.value}" }
                        div { class: "stat-card__note", "{stats.total_hosts.note}" }
                    }
                    div { class: "panel stat-card stat-card--orange", role: "region", aria_label: "live host in compliance",
                        div { class: "stat-card__title", "Live Host in compliance" }
                        div { class: "stat-card__value", "{stats.live_compliance.value}" }
                        div { class: "stat-card__note", "{stats.live_compliance.note}" }
                    }
                }

                Card { title: "Vulnerability Distribution", class: "severity-card",
                    SeverityBarChart {}
                }

                // Scan details
                Card {
                    title: "Scan Details",
                    class: "scan-details",
                    footer: rsx! {
                        for (idx, label) in details.footer_buttons.iter().cloned().enumerate() {
                            Button {
                                key: "{label}",
                                variant: ButtonVariant::Ghost,
                                onclick: {
                                    let store = store.clone();
                                    move |_| {
                                        if idx == 0 {
                                            // scan history: keep a severity snapshot for trends
                                            store.snapshot_severity();
                                        }
                                        nav.push(Route::Network {});
                                    }
                                },
                                "{label}"
                            }
                        }
                    },
                    dl { class: "scan-details__grid",
                        dt { "Status" }
                        dd { "{details.status}" }
                        dt { "Last submitted" }
                        dd { "{details.last_submitted}" }
                        dt { "Next due" }
                        dd { "{details.next_due}" }
                    }
                    p { class: "muted", "{details.status_note}" }
                }
            }

            // Support column
            aside { class: "col-side",
                Card { title: "{support.title}", subtitle: "{support.subtitle}", class: "support",
                    ul { class: "support__faq",
                        for question in support.items.iter() {
                            li { key: "{question}", "{question}" }
                        }
                    }
                    Button { variant: ButtonVariant::Secondary, "{support.cta_primary}" }
                }
                Card { title: "{support.contact_title}", class: "support-contact",
                    Button {
                        onclick: move |_| {
                            nav.push(Route::ContactSupport {});
                        },
                        "{support.contact_cta}"
                    }
                }
            }
        }
    }
}
