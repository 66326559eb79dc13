//! Keyboard page zoom.
//!
//! Primary-modifier + `=` / `-` / `0` steps the page zoom in, out, or back to
//! 100%. The level is applied through the CSS `zoom` property on `<html>`.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::consts::{ZOOM_DEFAULT, ZOOM_MIN, ZOOM_STEP};

use super::keyboard::{KeyPress, Platform};

/// A zoom shortcut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomCommand {
    In,
    Out,
    Reset,
}

impl ZoomCommand {
    /// Map a key press to a zoom command, if it is one.
    #[must_use]
    pub fn from_key_press(press: &KeyPress, platform: Platform) -> Option<Self> {
        // Keys pressed mid-IME-composition belong to the input method.
        if !press.ctrl_or_command(platform) || press.is_composing {
            return None;
        }
        match press.key.as_str() {
            "=" => Some(Self::In),
            "-" => Some(Self::Out),
            "0" => Some(Self::Reset),
            _ => None,
        }
    }
}

/// Current zoom factor; `1.0` is unscaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLevel(f64);

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(ZOOM_DEFAULT)
    }
}

impl ZoomLevel {
    #[must_use]
    pub fn factor(self) -> f64 {
        self.0
    }

    /// Level after `cmd`. Zooming out stops at [`ZOOM_MIN`].
    #[must_use]
    pub fn apply(self, cmd: ZoomCommand) -> Self {
        let next = match cmd {
            ZoomCommand::In => self.0 + ZOOM_STEP,
            ZoomCommand::Out => (self.0 - ZOOM_STEP).max(ZOOM_MIN),
            ZoomCommand::Reset => ZOOM_DEFAULT,
        };
        // Round to the step grid so repeated steps don't accumulate float error.
        Self((next * 100.0).round() / 100.0)
    }

    /// CSS value for the `zoom` property.
    #[must_use]
    pub fn css_value(self) -> String {
        format!("{}", self.0)
    }
}

/// Write `level` to the document element's `zoom` style.
pub fn apply_zoom(level: ZoomLevel) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        if let Err(err) = root.style().set_property("zoom", &level.css_value()) {
            leptos::logging::warn!("zoom not applied: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = level;
    }
}
