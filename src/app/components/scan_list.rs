use crate::app::components::{EmptyState, ErrorMessage, LoadingText};
use crate::domain::models::{ScanFiltersPatch, StatusFilter};
use crate::shared::state::use_app_store;
use dioxus::prelude::*;

/// Store-backed scan list, filtered by the current scan filters.
#[component]
pub fn ScanList() -> Element {
    let store = use_app_store();

    // initial load
    let loader = store.clone();
    use_effect(move || loader.fetch_scans());

    let (visible, loading, error, filtered) = {
        let state = store.scans.read();
        let filtered = state.filters.status != StatusFilter::All || !state.filters.search.is_empty();
        (state.visible(), state.loading, state.error.clone(), filtered)
    };
    let retry = {
        let store = store.clone();
        move |_: ()| store.fetch_scans()
    };
    let clear_filters = {
        let store = store.clone();
        move |_: ()| {
            store.set_filters(ScanFiltersPatch {
                status: Some(StatusFilter::All),
                search: Some(String::new()),
            })
        }
    };
    let rows: Vec<_> = visible
        .into_iter()
        .map(|scan| {
            let started = scan
                .started_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string();
            (scan, started)
        })
        .collect();

    rsx! {
        div { class: "c-scan-list",
            if let Some(error) = error {
                ErrorMessage { message: error, on_retry: retry }
            }
            if loading {
                LoadingText { message: "Loading scans…" }
            } else if rows.is_empty() && filtered {
                EmptyState {
                    title: "No scans found.",
                    description: "No scan matches the current filters.",
                    action_text: "Clear filters",
                    action_handler: clear_filters,
                }
            } else if rows.is_empty() {
                EmptyState { title: "No scans found." }
            }
            ul { class: "c-scan-list__items",
                for (scan, started) in rows {
                    li { key: "{scan.id}", class: "c-scan-list__item",
                        div { class: "c-scan-list__head",
                            strong { "{scan.name}" }
                            span { class: "c-scan-list__id", "{scan.id}" }
                            span {
                                class: "c-status c-status--{scan.status.as_str()}",
                                "{scan.status.label()}"
                            }
                        }
                        time {
                            class: "c-scan-list__date",
                            datetime: scan.started_at.to_rfc3339(),
                            "{started}"
                        }
                    }
                }
            }
        }
    }
}
