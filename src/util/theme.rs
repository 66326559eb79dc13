//! Light/dark theme switching.
//!
//! Writes the Bootstrap colour-mode attribute (`data-bs-theme`) on the
//! `<html>` element. The choice is remembered in `localStorage`; with nothing
//! stored, the system `prefers-color-scheme` decides. Requires a browser
//! environment; other builds no-op.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage failures are ignored so a locked-down
//! browser still gets a working (if forgetful) toggle.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

#[cfg(feature = "csr")]
use crate::consts::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};

/// Page colour mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_light_mode(light_mode: bool) -> Self {
        if light_mode { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    /// Value written to the theme attribute.
    #[must_use]
    pub fn attribute_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parse a stored attribute value.
    #[must_use]
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Read the saved theme, falling back to the system preference.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(THEME_STORAGE_KEY) {
                if let Some(theme) = Theme::from_attribute(&val) {
                    return theme;
                }
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        Theme::from_light_mode(!prefers_dark)
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// Set the theme attribute on `<html>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if let Err(err) = el.set_attribute(THEME_ATTRIBUTE, theme.attribute_value()) {
                leptos::logging::warn!("theme attribute not set: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Switch between light and dark without persisting the choice.
pub fn set_theme(light_mode: bool) {
    leptos::logging::log!("Change theme: {light_mode}");
    apply(Theme::from_light_mode(light_mode));
}

/// Flip the theme, apply it, and remember it.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, next.attribute_value());
            }
        }
    }
    next
}
