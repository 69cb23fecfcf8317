// Custom Dioxus hooks
pub mod use_media;
pub mod use_session;
pub mod use_sidebar;
pub mod use_theme;

pub use use_media::{media_query_for_min_width, use_media_query, MediaSubscription};
pub use use_session::{use_session, use_session_provider, Session};
pub use use_sidebar::{use_sidebar, UseSidebarReturn};
pub use use_theme::{use_theme, use_theme_watcher, ThemeMode};
