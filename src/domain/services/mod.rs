// Business logic services
// Framework-agnostic, 100% testable

pub mod pagination;
pub mod sidebar;

pub use pagination::Pager;
pub use sidebar::{
    CellWrite, Controllable, SidebarConfig, SidebarController, SidebarEffect, SidebarMode,
    ViewportClass,
};
