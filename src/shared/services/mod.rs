// Shared services
// Mock backend only: the dashboard has no server

pub mod fake_api;

pub use fake_api::FakeScanApi;
