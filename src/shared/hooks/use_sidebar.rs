use crate::domain::services::{SidebarConfig, SidebarController, SidebarEffect, ViewportClass};
use crate::shared::hooks::use_media::{media_query_for_min_width, use_media_query};
use crate::shared::logging::log_nav_select;
use dioxus::prelude::*;

/// Sidebar controller bound to the viewport observer and the caller's
/// callbacks.
#[derive(Clone, Copy)]
pub struct UseSidebarReturn {
    controller: Signal<SidebarController>,
    open: Option<bool>,
    on_select: Option<EventHandler<String>>,
    on_open_change: Option<EventHandler<bool>>,
}

impl UseSidebarReturn {
    /// Snapshot for rendering, with the caller's `open` applied.
    pub fn view(&self) -> SidebarController {
        let mut view = self.controller.read().clone();
        view.set_controlled_open(self.open);
        view
    }

    pub fn pointer_enter(&self) {
        self.update(|c| {
            c.pointer_enter();
            Vec::new()
        });
    }

    pub fn pointer_leave(&self) {
        self.update(|c| {
            c.pointer_leave();
            Vec::new()
        });
    }

    pub fn toggle(&self) {
        self.update(SidebarController::toggle);
    }

    pub fn toggle_pin(&self) {
        self.update(|c| {
            c.toggle_pin();
            Vec::new()
        });
    }

    pub fn select(&self, id: String) {
        self.update(|c| {
            let effects = c.select(&id);
            log_nav_select(&id, !c.is_desktop() && c.config().mobile_overlay);
            effects
        });
    }

    fn update(&self, event: impl FnOnce(&mut SidebarController) -> Vec<SidebarEffect>) {
        let mut controller = self.controller;
        let effects = {
            let mut controller = controller.write();
            controller.set_controlled_open(self.open);
            event(&mut controller)
        };
        for effect in effects {
            match effect {
                SidebarEffect::Selected(id) => {
                    if let Some(handler) = &self.on_select {
                        handler.call(id);
                    }
                }
                SidebarEffect::OpenChange(open) => {
                    if let Some(handler) = &self.on_open_change {
                        handler.call(open);
                    }
                }
            }
        }
    }
}

pub fn use_sidebar(
    config: SidebarConfig,
    open: Option<bool>,
    on_select: Option<EventHandler<String>>,
    on_open_change: Option<EventHandler<bool>>,
) -> UseSidebarReturn {
    let is_desktop = use_media_query(media_query_for_min_width(config.desktop_min_width));
    let mut controller = use_signal(|| {
        SidebarController::new(config, ViewportClass::from_match(*is_desktop.peek()))
    });

    use_effect(use_reactive((&config,), move |(config,)| {
        controller.write().set_config(config);
    }));

    // latest `open` prop, read by the viewport effect without subscribing
    let mut open_prop = use_signal(|| open);
    use_effect(use_reactive((&open,), move |(open,)| open_prop.set(open)));

    use_effect(move || {
        let viewport = ViewportClass::from_match(is_desktop());
        controller.write().observe_viewport(viewport, *open_prop.peek());
    });

    UseSidebarReturn {
        controller,
        open,
        on_select,
        on_open_change,
    }
}
