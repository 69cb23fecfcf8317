/// Local storage key of the theme flag.
pub const THEME_KEY: &str = "app_theme_mode";

/// Local storage key of the logged-in user blob.
pub const USER_KEY: &str = "user";

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Simulated latency of the mock scan API (ms).
pub const LIST_SCANS_LATENCY_MS: u32 = 600;
pub const START_SCAN_LATENCY_MS: u32 = 800;

pub const DISCOVERY_ROWS_PER_PAGE: usize = 10;
pub const NOTIFICATION_COUNT: u32 = 3;

/// Name used by the "Start Scan" shortcut of the scan list.
pub const QUICK_SCAN_NAME: &str = "Quick PCI Scan";
