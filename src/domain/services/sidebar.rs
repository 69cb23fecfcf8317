//! Responsive sidebar visibility controller.
//!
//! Pure state machine behind `ResponsiveSidebar`: the desktop rail is
//! collapsed/expanded (with pin and hover-expand), the mobile drawer is
//! open/closed and may be owned by the caller. No I/O, no error paths.
//! Every event handler returns the notifications the caller must dispatch,
//! in order.

use serde::{Deserialize, Serialize};

/// Default viewport width (px) from which the desktop rail is used.
pub const DEFAULT_DESKTOP_MIN_WIDTH: u32 = 992;

/// Layout class derived from the viewport observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

impl ViewportClass {
    /// Map the observer's "wide enough" signal to a layout class.
    /// A missing signal is treated as mobile.
    pub fn from_match(matches: Option<bool>) -> Self {
        match matches {
            Some(true) => ViewportClass::Desktop,
            _ => ViewportClass::Mobile,
        }
    }

    pub fn is_desktop(self) -> bool {
        self == ViewportClass::Desktop
    }
}

/// Sidebar behaviour switches. Missing values fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub hover_expand: bool,
    pub desktop_min_width: u32,
    pub mobile_overlay: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            hover_expand: true,
            desktop_min_width: DEFAULT_DESKTOP_MIN_WIDTH,
            mobile_overlay: true,
        }
    }
}

/// Outcome of writing a [`Controllable`] cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellWrite<T> {
    /// Local state was mutated.
    Applied,
    /// The value is owned by the caller; it must be notified with this value.
    Notify(T),
}

/// A value that is either owned by the caller (controlled) or held locally.
///
/// Reads prefer the caller's value. Writes go through [`Controllable::write`],
/// which either mutates the local value or asks for a notification, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controllable<T> {
    controlled: Option<T>,
    local: T,
}

impl<T: Copy> Controllable<T> {
    pub fn new(default: T) -> Self {
        Self {
            controlled: None,
            local: default,
        }
    }

    pub fn get(&self) -> T {
        self.controlled.unwrap_or(self.local)
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Mirror the caller-supplied value (`None` switches back to local state).
    pub fn set_controlled(&mut self, value: Option<T>) {
        self.controlled = value;
    }

    pub fn write(&mut self, next: T) -> CellWrite<T> {
        if self.controlled.is_some() {
            CellWrite::Notify(next)
        } else {
            self.local = next;
            CellWrite::Applied
        }
    }

    /// Reset the local value without touching a controlled one.
    fn reset_local(&mut self, value: T) {
        if self.controlled.is_none() {
            self.local = value;
        }
    }
}

/// Notification the caller has to dispatch after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEffect {
    /// A navigation item was picked.
    Selected(String),
    /// Controlled drawer: the caller should set `open` to this value.
    OpenChange(bool),
}

/// Current visibility mode. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    Desktop { expanded: bool, pinned: bool },
    MobileOverlay { open: bool },
    /// Mobile without the overlay: always expanded, no toggle. `hover-expand`
    /// and `is-pinned` tags still follow the flags, as on desktop.
    MobileInline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarController {
    config: SidebarConfig,
    viewport: ViewportClass,
    pinned: bool,
    expanded: bool,
    open: Controllable<bool>,
}

impl SidebarController {
    pub fn new(config: SidebarConfig, viewport: ViewportClass) -> Self {
        Self {
            config,
            viewport,
            pinned: false,
            expanded: false,
            open: Controllable::new(true),
        }
    }

    pub fn config(&self) -> SidebarConfig {
        self.config
    }

    /// Replace the behaviour switches (props changed). State is kept.
    pub fn set_config(&mut self, config: SidebarConfig) {
        self.config = config;
    }

    pub fn is_desktop(&self) -> bool {
        self.viewport.is_desktop()
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Mirror the caller's `open` prop.
    pub fn set_controlled_open(&mut self, open: Option<bool>) {
        self.open.set_controlled(open);
    }

    fn overlay_active(&self) -> bool {
        !self.is_desktop() && self.config.mobile_overlay
    }

    fn hover_applies(&self) -> bool {
        self.is_desktop() && !self.pinned && self.config.hover_expand
    }

    /// Desktop rule: the rail is expanded exactly when pinned.
    fn apply_desktop_rule(&mut self) {
        self.expanded = self.pinned;
    }

    /// Viewport observer reported a (possibly unchanged) layout class.
    pub fn set_viewport(&mut self, viewport: ViewportClass) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        match viewport {
            ViewportClass::Desktop => self.apply_desktop_rule(),
            ViewportClass::Mobile => self.open.reset_local(true),
        }
        crate::shared::logging::log_viewport_change(viewport.is_desktop(), self.pinned);
    }

    /// Viewport change together with the caller's current `open` prop, so the
    /// mobile reset sees who owns the drawer right now.
    pub fn observe_viewport(&mut self, viewport: ViewportClass, open: Option<bool>) {
        self.set_controlled_open(open);
        self.set_viewport(viewport);
    }

    pub fn pointer_enter(&mut self) {
        if self.hover_applies() {
            self.expanded = true;
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.hover_applies() {
            self.expanded = false;
        }
    }

    /// Expand/collapse button.
    pub fn toggle(&mut self) -> Vec<SidebarEffect> {
        if self.is_desktop() {
            // A pinned rail stays expanded until unpinned.
            if !self.pinned {
                self.expanded = !self.expanded;
            }
            return Vec::new();
        }
        if !self.config.mobile_overlay {
            return Vec::new();
        }
        let next = !self.open.get();
        self.write_open(next).into_iter().collect()
    }

    /// Pin button, only rendered on desktop.
    pub fn toggle_pin(&mut self) {
        if !self.is_desktop() {
            return;
        }
        self.pinned = !self.pinned;
        self.apply_desktop_rule();
        crate::shared::logging::log_sidebar_pin(self.pinned);
    }

    /// A navigation item was clicked. The item list itself is left alone:
    /// relabelling `active` belongs to the caller.
    pub fn select(&mut self, id: &str) -> Vec<SidebarEffect> {
        let mut effects = vec![SidebarEffect::Selected(id.to_string())];
        if self.overlay_active() {
            effects.extend(self.write_open(false));
        }
        effects
    }

    fn write_open(&mut self, next: bool) -> Option<SidebarEffect> {
        match self.open.write(next) {
            CellWrite::Applied => None,
            CellWrite::Notify(value) => Some(SidebarEffect::OpenChange(value)),
        }
    }

    pub fn mode(&self) -> SidebarMode {
        if self.is_desktop() {
            SidebarMode::Desktop {
                expanded: self.expanded,
                pinned: self.pinned,
            }
        } else if self.config.mobile_overlay {
            SidebarMode::MobileOverlay {
                open: self.open.get(),
            }
        } else {
            SidebarMode::MobileInline
        }
    }

    /// Whether labels and the subtitle are visible.
    pub fn shows_labels(&self) -> bool {
        match self.mode() {
            SidebarMode::Desktop { expanded, .. } => expanded,
            SidebarMode::MobileOverlay { open } => open,
            SidebarMode::MobileInline => true,
        }
    }

    pub fn class_tags(&self) -> Vec<&'static str> {
        let mut tags = vec!["sidebar-rsp"];
        match self.mode() {
            SidebarMode::Desktop { expanded, .. } => {
                tags.push(if expanded { "is-expanded" } else { "is-collapsed" });
            }
            SidebarMode::MobileOverlay { open } => {
                tags.push("is-mobile");
                tags.push(if open { "is-open" } else { "is-closed" });
                return tags;
            }
            SidebarMode::MobileInline => tags.push("is-expanded"),
        }
        if self.config.hover_expand {
            tags.push("hover-expand");
        }
        if self.pinned {
            tags.push("is-pinned");
        }
        tags
    }

    pub fn class_name(&self) -> String {
        self.class_tags().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> SidebarController {
        SidebarController::new(SidebarConfig::default(), ViewportClass::Desktop)
    }

    fn mobile() -> SidebarController {
        SidebarController::new(SidebarConfig::default(), ViewportClass::Mobile)
    }

    #[test]
    fn test_viewport_class_fail_safe() {
        assert_eq!(ViewportClass::from_match(None), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_match(Some(false)), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_match(Some(true)), ViewportClass::Desktop);
    }

    #[test]
    fn test_entering_desktop_follows_pin() {
        let mut sidebar = mobile();
        for _ in 0..3 {
            sidebar.set_viewport(ViewportClass::Desktop);
            assert!(!sidebar.is_expanded());
            sidebar.pointer_enter();
            sidebar.set_viewport(ViewportClass::Mobile);
        }

        sidebar.set_viewport(ViewportClass::Desktop);
        sidebar.toggle_pin();
        sidebar.set_viewport(ViewportClass::Mobile);
        sidebar.set_viewport(ViewportClass::Desktop);
        assert!(sidebar.is_pinned());
        assert!(sidebar.is_expanded());
    }

    #[test]
    fn test_hover_only_when_unpinned_desktop_with_hover_expand() {
        let mut sidebar = desktop();
        sidebar.pointer_enter();
        assert!(sidebar.is_expanded());
        sidebar.pointer_enter();
        assert!(sidebar.is_expanded());
        sidebar.pointer_leave();
        assert!(!sidebar.is_expanded());

        sidebar.toggle_pin();
        sidebar.pointer_leave();
        assert!(sidebar.is_expanded());

        let mut no_hover = SidebarController::new(
            SidebarConfig {
                hover_expand: false,
                ..SidebarConfig::default()
            },
            ViewportClass::Desktop,
        );
        no_hover.pointer_enter();
        assert!(!no_hover.is_expanded());

        let mut phone = mobile();
        let before = phone.clone();
        phone.pointer_enter();
        phone.pointer_leave();
        assert_eq!(phone, before);
    }

    #[test]
    fn test_pin_then_unpin_restores_expansion() {
        let mut sidebar = desktop();
        let before = sidebar.is_expanded();
        sidebar.toggle_pin();
        assert!(sidebar.is_expanded());
        sidebar.toggle_pin();
        sidebar.set_viewport(ViewportClass::Desktop);
        assert_eq!(sidebar.is_expanded(), before);
    }

    #[test]
    fn test_pin_ignored_on_mobile() {
        let mut sidebar = mobile();
        sidebar.toggle_pin();
        assert!(!sidebar.is_pinned());
    }

    #[test]
    fn test_desktop_toggle_flips_unless_pinned() {
        let mut sidebar = desktop();
        assert!(sidebar.toggle().is_empty());
        assert!(sidebar.is_expanded());
        sidebar.toggle();
        assert!(!sidebar.is_expanded());

        sidebar.toggle_pin();
        sidebar.toggle();
        assert!(sidebar.is_expanded());
    }

    #[test]
    fn test_mobile_select_always_closes() {
        for start_open in [true, false] {
            let mut sidebar = mobile();
            if !start_open {
                sidebar.toggle();
            }
            let effects = sidebar.select("network");
            assert_eq!(effects, vec![SidebarEffect::Selected("network".into())]);
            assert!(!sidebar.is_open());
        }

        for controlled in [true, false] {
            let mut sidebar = mobile();
            sidebar.set_controlled_open(Some(controlled));
            let effects = sidebar.select("home");
            assert_eq!(
                effects,
                vec![
                    SidebarEffect::Selected("home".into()),
                    SidebarEffect::OpenChange(false),
                ]
            );
        }
    }

    #[test]
    fn test_toggle_without_overlay_is_noop() {
        let mut sidebar = SidebarController::new(
            SidebarConfig {
                mobile_overlay: false,
                ..SidebarConfig::default()
            },
            ViewportClass::Mobile,
        );
        let before = sidebar.clone();
        assert!(sidebar.toggle().is_empty());
        assert_eq!(sidebar, before);
        assert_eq!(
            sidebar.class_tags(),
            vec!["sidebar-rsp", "is-expanded", "hover-expand"]
        );

        let effects = sidebar.select("home");
        assert_eq!(effects, vec![SidebarEffect::Selected("home".into())]);
        assert!(sidebar.is_open());
    }

    #[test]
    fn test_viewport_change_uses_current_ownership() {
        let mut sidebar = mobile();
        sidebar.toggle();
        assert!(!sidebar.is_open());
        sidebar.observe_viewport(ViewportClass::Desktop, Some(false));

        // caller released the drawer while on desktop
        sidebar.observe_viewport(ViewportClass::Mobile, None);
        assert!(sidebar.is_open());
        assert_eq!(sidebar.mode(), SidebarMode::MobileOverlay { open: true });
    }

    #[test]
    fn test_inline_mobile_keeps_flag_tags() {
        let config = SidebarConfig {
            mobile_overlay: false,
            ..SidebarConfig::default()
        };
        let mut sidebar = SidebarController::new(config, ViewportClass::Desktop);
        sidebar.toggle_pin();
        sidebar.set_viewport(ViewportClass::Mobile);
        assert_eq!(sidebar.mode(), SidebarMode::MobileInline);
        assert_eq!(sidebar.class_name(), "sidebar-rsp is-expanded hover-expand is-pinned");

        sidebar.set_config(SidebarConfig {
            hover_expand: false,
            ..config
        });
        assert_eq!(sidebar.class_name(), "sidebar-rsp is-expanded is-pinned");
    }

    #[test]
    fn test_class_tags_follow_viewport_class() {
        let mut sidebar = desktop();
        let tags = sidebar.class_tags();
        assert!(tags.contains(&"is-collapsed"));
        assert!(tags.contains(&"hover-expand"));
        assert!(!tags.contains(&"is-mobile"));

        sidebar.set_viewport(ViewportClass::Mobile);
        let tags = sidebar.class_tags();
        assert!(tags.contains(&"is-mobile"));
        assert!(tags.contains(&"is-open"));
        assert!(!tags.contains(&"is-collapsed"));
        assert!(!tags.contains(&"hover-expand"));
    }

    #[test]
    fn test_pinned_class_name() {
        let mut sidebar = desktop();
        sidebar.toggle_pin();
        assert_eq!(
            sidebar.class_name(),
            "sidebar-rsp is-expanded hover-expand is-pinned"
        );
    }

    #[test]
    fn test_controlled_toggle_only_notifies() {
        let mut sidebar = mobile();
        sidebar.set_controlled_open(Some(false));
        let effects = sidebar.toggle();
        assert_eq!(effects, vec![SidebarEffect::OpenChange(true)]);
        assert!(!sidebar.is_open());
        assert!(sidebar.class_tags().contains(&"is-closed"));

        // caller applies the new value
        sidebar.set_controlled_open(Some(true));
        assert!(sidebar.class_tags().contains(&"is-open"));
    }

    #[test]
    fn test_entering_mobile_reopens_uncontrolled_drawer_only() {
        let mut sidebar = mobile();
        sidebar.toggle();
        assert!(!sidebar.is_open());
        sidebar.set_viewport(ViewportClass::Desktop);
        sidebar.set_viewport(ViewportClass::Mobile);
        assert!(sidebar.is_open());

        let mut controlled = desktop();
        controlled.set_controlled_open(Some(false));
        controlled.set_viewport(ViewportClass::Mobile);
        assert!(!controlled.is_open());
        controlled.set_controlled_open(None);
        assert!(controlled.is_open());
    }

    #[test]
    fn test_controllable_cell_routes_writes() {
        let mut cell = Controllable::new(true);
        assert_eq!(cell.write(false), CellWrite::Applied);
        assert!(!cell.get());

        cell.set_controlled(Some(true));
        assert_eq!(cell.write(false), CellWrite::Notify(false));
        assert!(cell.get());
        cell.set_controlled(None);
        assert!(!cell.get());
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config: SidebarConfig = serde_json::from_str(r#"{"hover_expand": false}"#).unwrap();
        assert!(!config.hover_expand);
        assert_eq!(config.desktop_min_width, 992);
        assert!(config.mobile_overlay);
    }
}
