pub mod header;
pub mod sidebar;

pub use header::Header;
pub use sidebar::ResponsiveSidebar;
