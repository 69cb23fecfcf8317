use crate::app::components::icons::{
    AccountIcon, BookIcon, ChatIcon, ComplianceIcon, HomeIcon, InfoIcon, NetworkIcon,
};
use crate::app::layouts::{Header, ResponsiveSidebar};
use crate::app::pages::{ContactSupport, Home, Network, NewScan};
use crate::config::AppConfig;
use crate::domain::models::{mark_active, NavItem};
use crate::shared::hooks::{use_session_provider, use_theme_watcher};
use crate::shared::state::use_app_store_provider;
use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/network")]
    Network {},
    #[route("/scans/new")]
    NewScan {},
    #[route("/support")]
    ContactSupport {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

impl Route {
    /// Page for a sidebar item id. Unknown ids land on Home.
    pub fn from_nav_id(id: &str) -> Route {
        match id {
            "network" => Route::Network {},
            "new-scan" => Route::NewScan {},
            "support" => Route::ContactSupport {},
            _ => Route::Home {},
        }
    }

    /// Sidebar item highlighted for this page.
    pub fn nav_id(&self) -> &'static str {
        match self {
            Route::Network {} | Route::NewScan {} => "network",
            Route::ContactSupport {} => "support",
            Route::Home {} | Route::Fallback { .. } => "home",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Network {} => "Network",
            Route::NewScan {} => "New Scan",
            Route::ContactSupport {} => "Contact Support",
            Route::Home {} | Route::Fallback { .. } => "PCI dashboard",
        }
    }
}

/// Sidebar entries, in display order.
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("home", "Home").with_icon(HomeIcon),
        NavItem::new("network", "Network").with_icon(NetworkIcon),
        NavItem::new("compliance", "Compliance").with_icon(ComplianceIcon),
        NavItem::new("account", "Account").with_icon(AccountIcon),
        NavItem::new("support", "Support").with_icon(ChatIcon),
        NavItem::new("resources", "Resources").with_icon(BookIcon),
        NavItem::new("about", "About").with_icon(InfoIcon),
    ]
}

/// Items relabelled for the routed page. An active item that already leads
/// to this page keeps its highlight ("compliance" while on Home).
pub fn nav_items_for_route(items: &[NavItem], route: &Route) -> Vec<NavItem> {
    let keeps_active = items
        .iter()
        .find(|item| item.active)
        .is_some_and(|item| Route::from_nav_id(&item.id) == *route);
    if keeps_active {
        items.to_vec()
    } else {
        mark_active(items, route.nav_id())
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(AppConfig::load);
    use_app_store_provider(&config);
    use_session_provider();
    use_theme_watcher();

    use_effect(|| {
        tracing::info!("Dashboard initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let config = use_context::<AppConfig>();
    let route = use_route::<Route>();
    let mut items = use_signal(|| nav_items_for_route(&nav_items(), &route));
    let nav = navigator();

    // links, banner actions and history moves change the route directly
    use_effect(use_reactive((&route,), move |(route,)| {
        let next = nav_items_for_route(&items.peek(), &route);
        items.set(next);
    }));

    let on_select = move |id: String| {
        let next = mark_active(&items.peek(), &id);
        items.set(next);
        nav.push(Route::from_nav_id(&id));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        div { class: "c-layout",
            ResponsiveSidebar {
                items: items(),
                on_select,
                product: config.product.clone(),
                sub_product: config.sub_product.clone(),
                hover_expand: config.sidebar.hover_expand,
                desktop_min_width: config.sidebar.desktop_min_width,
                mobile_overlay: config.sidebar.mobile_overlay,
            }
            div { class: "c-layout__body",
                Header { page_title: route.title().to_string() }
                main { class: "c-layout__main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "Unknown route, showing home");
    rsx! {
        Home {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_ids_map_to_pages() {
        assert_eq!(Route::from_nav_id("network"), Route::Network {});
        assert_eq!(Route::from_nav_id("support"), Route::ContactSupport {});
        assert_eq!(Route::from_nav_id("new-scan"), Route::NewScan {});
        assert_eq!(Route::from_nav_id("compliance"), Route::Home {});
        assert_eq!(Route::from_nav_id(""), Route::Home {});
    }

    #[test]
    fn test_pages_highlight_their_item() {
        assert_eq!(Route::NewScan {}.nav_id(), "network");
        assert_eq!(Route::Fallback { segments: vec!["x".into()] }.nav_id(), "home");
        assert_eq!(Route::ContactSupport {}.title(), "Contact Support");
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::Network {}.to_string(), "/network");
        assert_eq!(Route::NewScan {}.to_string(), "/scans/new");
        assert_eq!(Route::ContactSupport {}.to_string(), "/support");
    }

    fn active_id(items: &[NavItem]) -> Option<&str> {
        items.iter().find(|item| item.active).map(|item| item.id.as_str())
    }

    #[test]
    fn test_route_change_moves_highlight() {
        let on_home = nav_items_for_route(&nav_items(), &Route::Home {});
        assert_eq!(active_id(&on_home), Some("home"));

        // banner action pushes Network without touching the sidebar
        let on_network = nav_items_for_route(&on_home, &Route::Network {});
        assert_eq!(active_id(&on_network), Some("network"));
        assert_eq!(on_network.iter().filter(|item| item.active).count(), 1);

        let on_form = nav_items_for_route(&on_network, &Route::NewScan {});
        assert_eq!(active_id(&on_form), Some("network"));

        let on_support = nav_items_for_route(&on_form, &Route::ContactSupport {});
        assert_eq!(active_id(&on_support), Some("support"));

        // back button
        let back_home = nav_items_for_route(&on_support, &Route::Home {});
        assert_eq!(active_id(&back_home), Some("home"));
    }

    #[test]
    fn test_route_less_selection_survives_its_route() {
        let selected = mark_active(&nav_items(), "compliance");
        let synced = nav_items_for_route(&selected, &Route::Home {});
        assert_eq!(active_id(&synced), Some("compliance"));

        let elsewhere = nav_items_for_route(&selected, &Route::Network {});
        assert_eq!(active_id(&elsewhere), Some("network"));

        let unknown = nav_items_for_route(
            &elsewhere,
            &Route::Fallback {
                segments: vec!["nope".into()],
            },
        );
        assert_eq!(active_id(&unknown), Some("home"));
    }

    #[test]
    fn test_nav_items_have_unique_ids_and_icons() {
        let items = nav_items();
        let mut ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
        assert!(items.iter().all(|item| item.icon.is_some()));
        assert!(items.iter().all(|item| !item.active));
    }
}
