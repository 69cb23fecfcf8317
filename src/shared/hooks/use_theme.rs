use crate::shared::constants::{PREFERS_DARK_QUERY, THEME_KEY};
use crate::shared::errors::AppError;
use crate::shared::hooks::use_media::matches_media;
use crate::shared::logging::{log_storage_error, log_theme_change};
use crate::shared::state::use_app_store;
use crate::shared::storage;
use dioxus::prelude::*;
use std::str::FromStr;

/// Colour scheme of the dashboard, stored as `"light"` / `"dark"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        if self.is_dark() {
            "dark"
        } else {
            "light"
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn opposite(self) -> ThemeMode {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Saved flag first, then the system preference, then light.
    pub fn initial(saved: Option<&str>, prefers_dark: Option<bool>) -> ThemeMode {
        saved
            .and_then(|flag| flag.parse().ok())
            .unwrap_or(if prefers_dark == Some(true) {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            })
    }
}

impl FromStr for ThemeMode {
    type Err = AppError;

    fn from_str(flag: &str) -> Result<Self, Self::Err> {
        [ThemeMode::Light, ThemeMode::Dark]
            .into_iter()
            .find(|mode| mode.as_str() == flag)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown theme flag {flag:?}")))
    }
}

/// Theme read from local storage / system preference at startup.
pub fn load_theme() -> ThemeMode {
    ThemeMode::initial(
        storage::get_item(THEME_KEY).as_deref(),
        matches_media(PREFERS_DARK_QUERY),
    )
}

pub fn save_theme(mode: ThemeMode) {
    if let Err(e) = storage::set_item(THEME_KEY, mode.as_str()) {
        log_storage_error(THEME_KEY, &e.to_string());
    }
}

/// Expose the mode on the root element (`data-theme` and `color-scheme`)
#[cfg(target_arch = "wasm32")]
fn apply_theme_to_document(mode: ThemeMode) {
    use wasm_bindgen::JsCast;

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", mode.as_str());
    if let Ok(html) = root.dyn_into::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("color-scheme", mode.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_to_document(_mode: ThemeMode) {
    // No document off the browser
}

/// Theme signal of the store. Setting it persists and re-applies the theme
/// through [`use_theme_watcher`].
pub fn use_theme() -> Signal<ThemeMode> {
    use_app_store().theme
}

/// Mirror the store theme onto the document and local storage.
pub fn use_theme_watcher() {
    let theme = use_theme();
    let mut first_run = use_signal(|| true);

    use_effect(move || {
        let mode = theme();
        apply_theme_to_document(mode);
        // the initial value came from storage; only persist real changes
        if *first_run.peek() {
            first_run.set(false);
            return;
        }
        save_theme(mode);
        log_theme_change(mode.as_str());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_theme_wins() {
        assert_eq!(ThemeMode::initial(Some("dark"), Some(false)), ThemeMode::Dark);
        assert_eq!(ThemeMode::initial(Some("light"), Some(true)), ThemeMode::Light);
    }

    #[test]
    fn test_falls_back_to_system_preference() {
        assert_eq!(ThemeMode::initial(Some("sepia"), Some(true)), ThemeMode::Dark);
        assert_eq!(ThemeMode::initial(None, None), ThemeMode::Light);
        assert_eq!(ThemeMode::initial(None, Some(false)), ThemeMode::Light);
    }

    #[test]
    fn test_opposite_and_flags() {
        assert_eq!(ThemeMode::Light.opposite(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.opposite().opposite(), ThemeMode::Dark);
        assert_eq!("dark".parse::<ThemeMode>().ok(), Some(ThemeMode::Dark));
        assert!("Dark".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }
}
