//! Application configuration.
//!
//! Everything has a default; a JSON document can override any subset.

use crate::domain::models::SeverityCounts;
use crate::domain::services::SidebarConfig;
use crate::shared::constants::{LIST_SCANS_LATENCY_MS, START_SCAN_LATENCY_MS};
use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub product: String,
    pub sub_product: String,
    pub sidebar: SidebarConfig,
    pub api: ApiLatency,
    /// Counts the severity chart starts from.
    pub severity: SeverityCounts,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            product: "PCI".to_string(),
            sub_product: "PCI Compliance".to_string(),
            sidebar: SidebarConfig::default(),
            api: ApiLatency::default(),
            severity: SeverityCounts::default(),
        }
    }
}

/// Simulated network delay of the mock scan API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiLatency {
    pub list_ms: u32,
    pub start_ms: u32,
}

impl ApiLatency {
    pub const NONE: ApiLatency = ApiLatency {
        list_ms: 0,
        start_ms: 0,
    };
}

impl Default for ApiLatency {
    fn default() -> Self {
        Self {
            list_ms: LIST_SCANS_LATENCY_MS,
            start_ms: START_SCAN_LATENCY_MS,
        }
    }
}

/// Environment variable naming a JSON config file (native builds only).
pub const CONFIG_PATH_ENV: &str = "PCI_DASHBOARD_CONFIG";

impl AppConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse dashboard configuration")
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Configuration for this run. Falls back to defaults on any error.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            match Self::from_file(std::path::Path::new(&path)) {
                Ok(config) => {
                    tracing::info!(path = %path, "Loaded dashboard configuration");
                    return config;
                }
                Err(e) => tracing::warn!(path = %path, "Using default configuration: {:#}", e),
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.product, "PCI");
        assert_eq!(config.sidebar.desktop_min_width, 992);
        assert!(config.sidebar.hover_expand);
        assert!(config.sidebar.mobile_overlay);
        assert_eq!(config.api.list_ms, 600);
        assert_eq!(config.api.start_ms, 800);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(r#"{"sidebar": {"desktop_min_width": 1200}, "api": {"list_ms": 0}}"#)
            .unwrap();
        assert_eq!(config.sidebar.desktop_min_width, 1200);
        assert!(config.sidebar.mobile_overlay);
        assert_eq!(config.api.list_ms, 0);
        assert_eq!(config.api.start_ms, 800);
        assert_eq!(config.sub_product, "PCI Compliance");
    }

    #[test]
    fn test_partial_severity_override() {
        let config = AppConfig::from_json(r#"{"severity": {"critical": 0, "low": 5}}"#).unwrap();
        assert_eq!(config.severity.critical, 0);
        assert_eq!(config.severity.high, 28);
        assert_eq!(config.severity.medium, 41);
        assert_eq!(config.severity.low, 5);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AppConfig::from_file(std::path::Path::new("/nonexistent/dashboard.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dashboard.json"));
    }

    #[test]
    fn test_invalid_json_has_context() {
        let err = AppConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("dashboard configuration"));
    }
}
