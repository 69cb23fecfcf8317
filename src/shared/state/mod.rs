//! Client-side store: theme, mock scan list and severity counts.
//!
//! Provided once by the root component through context; every slice is a
//! signal so components re-render on change.

use crate::config::AppConfig;
use crate::domain::models::{ScanFiltersPatch, ScansState, SeverityState};
use crate::shared::hooks::use_theme::{load_theme, ThemeMode};
use crate::shared::logging::{log_scan_fetch, log_scan_start_error, log_scan_started};
use crate::shared::services::FakeScanApi;
use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub struct AppStore {
    pub theme: Signal<ThemeMode>,
    pub scans: Signal<ScansState>,
    pub severity: Signal<SeverityState>,
    api: FakeScanApi,
}

impl AppStore {
    pub fn toggle_theme(&self) {
        let mut theme = self.theme;
        let next = theme().opposite();
        theme.set(next);
    }

    /// Reload the scan list from the mock API.
    pub fn fetch_scans(&self) {
        let api = self.api.clone();
        let mut scans = self.scans;
        scans.write().fetch_pending();
        spawn(async move {
            let result = api.list_scans().await;
            log_scan_fetch(result.as_ref().map(Vec::len));
            scans.write().fetch_finished(result);
        });
    }

    /// Queue a new scan; it is prepended to the list once the API answers.
    pub fn start_new_scan(&self, name: String) {
        let api = self.api.clone();
        let mut scans = self.scans;
        scans.write().start_pending();
        spawn(async move {
            let result = api.start_scan(&name).await;
            match &result {
                Ok(scan) => log_scan_started(&scan.id, &scan.name),
                Err(e) => log_scan_start_error(&name, &e.to_string()),
            }
            scans.write().start_finished(result);
        });
    }

    pub fn set_filters(&self, patch: ScanFiltersPatch) {
        let mut scans = self.scans;
        scans.write().set_filters(patch);
    }

    /// Record the current counts for trend display.
    pub fn snapshot_severity(&self) {
        let mut severity = self.severity;
        let counts = severity.peek().counts;
        severity.write().push_snapshot(chrono::Utc::now(), counts);
    }
}

/// Create the store and provide it to the component tree.
pub fn use_app_store_provider(config: &AppConfig) -> AppStore {
    let latency = config.api;
    let initial_counts = config.severity;
    let theme = use_signal(load_theme);
    let scans = use_signal(ScansState::default);
    let severity = use_signal(move || {
        let mut state = SeverityState::default();
        state.set_counts(initial_counts);
        state
    });
    let api = use_hook(move || FakeScanApi::new(latency));

    use_context_provider(move || AppStore {
        theme,
        scans,
        severity,
        api,
    })
}

pub fn use_app_store() -> AppStore {
    use_context::<AppStore>()
}
