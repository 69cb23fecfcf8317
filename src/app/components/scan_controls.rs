use crate::app::components::{Button, ButtonVariant};
use crate::domain::models::{ScanFiltersPatch, StatusFilter};
use crate::shared::constants::QUICK_SCAN_NAME;
use crate::shared::state::use_app_store;
use dioxus::prelude::*;

/// Status filter, search box, refresh and quick start for the scan list.
#[component]
pub fn ScanControls() -> Element {
    let store = use_app_store();
    let (filters, loading) = {
        let state = store.scans.read();
        (state.filters.clone(), state.loading)
    };

    let on_status = {
        let store = store.clone();
        move |evt: FormEvent| {
            let status = evt.value().parse::<StatusFilter>().unwrap_or_default();
            store.set_filters(ScanFiltersPatch {
                status: Some(status),
                ..Default::default()
            });
        }
    };
    let on_search = {
        let store = store.clone();
        move |evt: FormEvent| {
            store.set_filters(ScanFiltersPatch {
                search: Some(evt.value()),
                ..Default::default()
            });
        }
    };
    let on_refresh = {
        let store = store.clone();
        move |_: MouseEvent| store.fetch_scans()
    };
    let on_start = move |_: MouseEvent| store.start_new_scan(QUICK_SCAN_NAME.to_string());

    rsx! {
        div { class: "c-scan-controls",
            select {
                class: "c-scan-controls__status",
                aria_label: "Filter by status",
                value: "{filters.status.as_str()}",
                onchange: on_status,
                for choice in StatusFilter::OPTIONS {
                    option {
                        key: "{choice.as_str()}",
                        value: "{choice.as_str()}",
                        selected: choice == filters.status,
                        "{choice.label()}"
                    }
                }
            }
            input {
                class: "c-scan-controls__search",
                placeholder: "Search by name or id",
                value: "{filters.search}",
                oninput: on_search,
            }
            Button {
                variant: ButtonVariant::Secondary,
                busy: loading,
                busy_label: "Refreshing...",
                onclick: on_refresh,
                "Refresh"
            }
            Button {
                busy: loading,
                busy_label: "Starting...",
                onclick: on_start,
                "Start Scan"
            }
        }
    }
}
