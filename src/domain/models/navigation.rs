use dioxus::prelude::*;

/// Uniform icon size (px) used by the sidebar.
pub const NAV_ICON_SIZE: u32 = 18;

#[derive(Props, Clone, Copy, PartialEq)]
pub struct IconProps {
    #[props(default = NAV_ICON_SIZE)]
    pub size: u32,
}

/// Either an already-built node or an icon component to instantiate.
#[derive(Clone)]
pub enum NavIcon {
    Node(Element),
    Component(fn(IconProps) -> Element),
}

impl NavIcon {
    /// Produce the icon at the given size.
    pub fn render(&self, size: u32) -> Element {
        match self {
            NavIcon::Node(node) => rsx! {
                span {
                    class: "c-icon",
                    style: "font-size: {size}px; width: {size}px; height: {size}px;",
                    {node.clone()}
                }
            },
            NavIcon::Component(icon) => icon(IconProps { size }),
        }
    }
}

impl PartialEq for NavIcon {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NavIcon::Component(a), NavIcon::Component(b)) => std::ptr::fn_addr_eq(*a, *b),
            // prebuilt nodes are opaque
            _ => false,
        }
    }
}

impl std::fmt::Debug for NavIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavIcon::Node(_) => f.write_str("NavIcon::Node"),
            NavIcon::Component(_) => f.write_str("NavIcon::Component"),
        }
    }
}

/// Sidebar entry. The list is owned by the caller and replaced wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub icon: Option<NavIcon>,
    pub active: bool,
}

impl NavItem {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon: None,
            active: false,
        }
    }

    pub fn with_icon(mut self, icon: fn(IconProps) -> Element) -> Self {
        self.icon = Some(NavIcon::Component(icon));
        self
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

/// Return a copy of `items` with only `id` marked active.
pub fn mark_active(items: &[NavItem], id: &str) -> Vec<NavItem> {
    items
        .iter()
        .map(|item| NavItem {
            active: item.id == id,
            ..item.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<NavItem> {
        vec![
            NavItem::new("home", "Home").active(),
            NavItem::new("network", "Network"),
            NavItem::new("support", "Contact Support"),
        ]
    }

    #[test]
    fn test_mark_active_relabels_single_item() {
        let original = items();
        let updated = mark_active(&original, "network");

        let active: Vec<_> = updated.iter().filter(|i| i.active).map(|i| i.id.as_str()).collect();
        assert_eq!(active, vec!["network"]);
        // input list untouched
        assert!(original[0].active);
        assert!(!original[1].active);
    }

    #[test]
    fn test_mark_active_unknown_id_clears_all() {
        let updated = mark_active(&items(), "missing");
        assert!(updated.iter().all(|i| !i.active));
    }
}
