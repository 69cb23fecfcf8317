// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// UI (components, layouts, pages, router)
pub mod app;
