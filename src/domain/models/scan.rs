use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a mock scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Queued,
    Running,
    Completed,
    Failed,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Queued => "queued",
            ScanStatus::Running => "running",
            ScanStatus::Completed => "completed",
            ScanStatus::Failed => "failed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScanStatus::Queued => "Queued",
            ScanStatus::Running => "Running",
            ScanStatus::Completed => "Completed",
            ScanStatus::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scan {
    pub id: String,
    pub name: String,
    pub status: ScanStatus,
    pub started_at: DateTime<Utc>,
}

/// Status filter of the scan list. `All` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Only(ScanStatus),
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Only(ScanStatus::Queued),
        StatusFilter::Only(ScanStatus::Running),
        StatusFilter::Only(ScanStatus::Completed),
        StatusFilter::Only(ScanStatus::Failed),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn accepts(&self, status: ScanStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(StatusFilter::Only(ScanStatus::Queued)),
            "running" => Ok(StatusFilter::Only(ScanStatus::Running)),
            "completed" => Ok(StatusFilter::Only(ScanStatus::Completed)),
            "failed" => Ok(StatusFilter::Only(ScanStatus::Failed)),
            _ => Ok(StatusFilter::All),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanFilters {
    pub status: StatusFilter,
    pub search: String,
}

/// Partial update merged into [`ScanFilters`].
#[derive(Debug, Clone, Default)]
pub struct ScanFiltersPatch {
    pub status: Option<StatusFilter>,
    pub search: Option<String>,
}

impl ScanFilters {
    pub fn merge(&mut self, patch: ScanFiltersPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(search) = patch.search {
            self.search = search;
        }
    }

    /// Status match plus case-insensitive search on name or id.
    pub fn matches(&self, scan: &Scan) -> bool {
        let query = self.search.trim().to_lowercase();
        self.status.accepts(scan.status)
            && (query.is_empty()
                || scan.name.to_lowercase().contains(&query)
                || scan.id.to_lowercase().contains(&query))
    }
}

/// Scan slice of the client store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScansState {
    pub items: Vec<Scan>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: ScanFilters,
}

impl ScansState {
    pub fn fetch_pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn fetch_finished(&mut self, result: crate::shared::errors::Result<Vec<Scan>>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(non_empty_or(e.to_string(), "Failed to load scans")),
        }
    }

    pub fn start_pending(&mut self) {
        self.loading = true;
    }

    pub fn start_finished(&mut self, result: crate::shared::errors::Result<Scan>) {
        self.loading = false;
        match result {
            Ok(scan) => self.items.insert(0, scan),
            Err(e) => self.error = Some(non_empty_or(e.to_string(), "Failed to start scan")),
        }
    }

    pub fn set_filters(&mut self, patch: ScanFiltersPatch) {
        self.filters.merge(patch);
    }

    pub fn visible(&self) -> Vec<Scan> {
        self.items
            .iter()
            .filter(|scan| self.filters.matches(scan))
            .cloned()
            .collect()
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Row of the network discovery table.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkScan {
    pub id: String,
    pub title: String,
    pub status: DiscoveryStatus,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryStatus {
    Failed,
    Success,
    Running,
    Queued,
}

impl DiscoveryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DiscoveryStatus::Failed => "Failed",
            DiscoveryStatus::Success => "Success",
            DiscoveryStatus::Running => "Running",
            DiscoveryStatus::Queued => "Queued",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            DiscoveryStatus::Failed => "status status-failed",
            DiscoveryStatus::Success => "status status-success",
            DiscoveryStatus::Running => "status status-running",
            DiscoveryStatus::Queued => "status status-queued",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    fn scan(id: &str, name: &str, status: ScanStatus) -> Scan {
        Scan {
            id: id.to_string(),
            name: name.to_string(),
            status,
            started_at: Utc::now(),
        }
    }

    fn state() -> ScansState {
        ScansState {
            items: vec![
                scan("S-1001", "Weekly PCI Scan", ScanStatus::Completed),
                scan("S-1002", "Quick check", ScanStatus::Running),
            ],
            ..ScansState::default()
        }
    }

    #[test]
    fn test_filter_by_status_and_search() {
        let mut state = state();
        assert_eq!(state.visible().len(), 2);

        state.set_filters(ScanFiltersPatch {
            status: Some(StatusFilter::Only(ScanStatus::Running)),
            ..Default::default()
        });
        assert_eq!(state.visible()[0].id, "S-1002");

        state.set_filters(ScanFiltersPatch {
            status: Some(StatusFilter::All),
            search: Some("  s-1001 ".into()),
        });
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Weekly PCI Scan");

        state.set_filters(ScanFiltersPatch {
            search: Some("WEEKLY".into()),
            ..Default::default()
        });
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let mut filters = ScanFilters {
            status: StatusFilter::Only(ScanStatus::Failed),
            search: "x".into(),
        };
        filters.merge(ScanFiltersPatch {
            search: Some("y".into()),
            ..Default::default()
        });
        assert_eq!(filters.status, StatusFilter::Only(ScanStatus::Failed));
        assert_eq!(filters.search, "y");
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = ScansState::default();
        state.error = Some("old".into());
        state.fetch_pending();
        assert!(state.loading);
        assert!(state.error.is_none());

        state.fetch_finished(Err(AppError::Unavailable(String::new())));
        assert!(!state.loading);
        assert!(state.error.is_some());

        state.fetch_pending();
        state.fetch_finished(Ok(vec![scan("S-1", "a", ScanStatus::Queued)]));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_started_scan_is_prepended() {
        let mut state = state();
        state.start_pending();
        state.start_finished(Ok(scan("S-4242", "Quick PCI Scan", ScanStatus::Queued)));
        assert!(!state.loading);
        assert_eq!(state.items[0].id, "S-4242");
        assert_eq!(state.items.len(), 3);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("running".parse::<StatusFilter>(), Ok(StatusFilter::Only(ScanStatus::Running)));
        assert_eq!("bogus".parse::<StatusFilter>(), Ok(StatusFilter::All));
        for option in StatusFilter::OPTIONS {
            assert_eq!(option.as_str().parse::<StatusFilter>(), Ok(option));
        }
    }
}
