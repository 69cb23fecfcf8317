pub mod contact_support;
pub mod home;
pub mod network;
pub mod new_scan;

pub use contact_support::ContactSupport;
pub use home::Home;
pub use network::Network;
pub use new_scan::NewScan;
