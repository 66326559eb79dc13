//! Local UI chrome state (theme, zoom).
//!
//! DESIGN
//! ======
//! Held in a single `RwSignal<UiState>` provided by the root component.
//! Components read it for rendering; the side effects (writing the theme
//! attribute, the CSS zoom) are applied by the `util` helpers at the point
//! the state changes.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;
use crate::util::zoom::{ZoomCommand, ZoomLevel};

/// UI state for theme and page zoom.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    pub zoom: ZoomLevel,
}

impl UiState {
    /// State seeded from a stored or system theme preference.
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    #[must_use]
    pub fn is_light(&self) -> bool {
        self.theme.is_light()
    }

    /// Apply a zoom shortcut and return the new level.
    pub fn zoom_by(&mut self, cmd: ZoomCommand) -> ZoomLevel {
        self.zoom = self.zoom.apply(cmd);
        self.zoom
    }
}
