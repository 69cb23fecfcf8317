// Domain models (business entities)

pub mod home;
pub mod navigation;
pub mod scan;
pub mod scan_form;
pub mod severity;
pub mod user;

pub use home::{Banner, HomePageData, ScanDetails, StatValue, Stats, SupportPanel};
pub use navigation::{mark_active, IconProps, NavIcon, NavItem, NAV_ICON_SIZE};
pub use scan::{
    DiscoveryStatus, NetworkScan, Scan, ScanFilters, ScanFiltersPatch, ScanStatus, ScansState,
    StatusFilter,
};
pub use scan_form::{
    AssetType, Bandwidth, FormErrors, FormField, LaunchMode, ScanForm, ScanRequest, TargetMode,
    Targets,
};
pub use severity::{SeverityCounts, SeverityKey, SeveritySnapshot, SeverityState};
pub use user::User;
