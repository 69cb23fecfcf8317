pub mod button;
pub mod card;
pub mod common;
pub mod icons;
pub mod scan_controls;
pub mod scan_list;
pub mod severity_chart;
pub mod theme_toggle;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use common::{EmptyState, ErrorMessage, LoadingText, NotificationBadge};
pub use scan_controls::ScanControls;
pub use scan_list::ScanList;
pub use severity_chart::SeverityBarChart;
pub use theme_toggle::ThemeToggle;
