//! Structured logging helpers.
//!
//! Each helper emits one `tracing` event tagged with an `operation` field, so
//! a subscriber can filter by area (`operation="sidebar"` and so on).

use crate::shared::errors::AppError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOperation {
    Sidebar,
    Viewport,
    ScanFetch,
    ScanStart,
    Theme,
    Storage,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Sidebar => "sidebar",
            LogOperation::Viewport => "viewport",
            LogOperation::ScanFetch => "scan_fetch",
            LogOperation::ScanStart => "scan_start",
            LogOperation::Theme => "theme",
            LogOperation::Storage => "storage",
        }
    }
}

impl fmt::Display for LogOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `op_event!(level, Operation, fields..., "message")`
macro_rules! op_event {
    ($level:ident, $op:ident, $($rest:tt)+) => {
        tracing::$level!(operation = LogOperation::$op.as_str(), $($rest)+)
    };
}

pub fn log_viewport_change(is_desktop: bool, pinned: bool) {
    op_event!(debug, Viewport, is_desktop, pinned, "Viewport class changed");
}

/// A missing subscription means the sidebar runs with the mobile layout.
pub fn log_media_subscription(query: &str, subscribed: bool) {
    if subscribed {
        op_event!(debug, Viewport, query, "Subscribed to media query");
    } else {
        op_event!(warn, Viewport, query, "matchMedia unavailable, assuming mobile");
    }
}

pub fn log_sidebar_pin(pinned: bool) {
    op_event!(debug, Sidebar, pinned, "Sidebar pin toggled");
}

pub fn log_nav_select(item_id: &str, closes_drawer: bool) {
    op_event!(info, Sidebar, item_id, closes_drawer, "Navigation item selected");
}

/// Outcome of a scan list fetch: the number of scans, or the failure.
pub fn log_scan_fetch(outcome: Result<usize, &AppError>) {
    match outcome {
        Ok(scan_count) => op_event!(info, ScanFetch, scan_count, "Scan list loaded"),
        Err(error) => op_event!(error, ScanFetch, %error, "Failed to load scans"),
    }
}

pub fn log_scan_started(scan_id: &str, name: &str) {
    op_event!(info, ScanStart, scan_id, name, "Scan queued");
}

pub fn log_scan_start_error(name: &str, error: &str) {
    op_event!(error, ScanStart, name, error, "Scan start rejected");
}

pub fn log_theme_change(mode: &str) {
    op_event!(info, Theme, mode, "Theme changed");
}

/// Storage failures are logged and otherwise ignored.
pub fn log_storage_error(key: &str, error: &str) {
    op_event!(warn, Storage, key, error, "Local storage access failed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names_are_snake_case() {
        let all = [
            LogOperation::Sidebar,
            LogOperation::Viewport,
            LogOperation::ScanFetch,
            LogOperation::ScanStart,
            LogOperation::Theme,
            LogOperation::Storage,
        ];
        for op in all {
            let name = op.to_string();
            assert_eq!(name, op.as_str());
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
        assert_eq!(LogOperation::ScanFetch.as_str(), "scan_fetch");
    }

    #[test]
    fn test_helpers_run_without_subscriber() {
        log_scan_fetch(Ok(2));
        log_scan_fetch(Err(&AppError::Unavailable("offline".into())));
        log_viewport_change(true, false);
    }
}
