use pci_compliance_dashboard::app::App;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG overrides; default keeps this crate at debug
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pci_compliance_dashboard=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Launching PCI dashboard");
    dioxus::launch(App);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::info_1(&"pci-compliance-dashboard: starting".into());
    dioxus::launch(App);
}
