//! Shared constants for the panelkit crate.

// ── Resize ──────────────────────────────────────────────────────

/// Class carried by every resizer handle.
pub const RESIZER_CLASS: &str = "lv-resizer";

/// CSS selector matching [`RESIZER_CLASS`].
pub const RESIZER_SELECTOR: &str = ".lv-resizer";

/// Modifier class for a handle between side-by-side panes.
pub const RESIZER_HORIZONTAL_CLASS: &str = "lv-resizer-h";

/// Modifier class for a handle between stacked panes.
pub const RESIZER_VERTICAL_CLASS: &str = "lv-resizer-v";

/// Tolerance for the size-conservation invariant and zero-size checks.
pub const SIZE_EPSILON: f64 = 1e-9;

// ── Theme ───────────────────────────────────────────────────────

/// Attribute on `<html>` that selects the Bootstrap colour mode.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// `localStorage` key for the persisted theme choice.
pub const THEME_STORAGE_KEY: &str = "panelkit_theme";

// ── Zoom ────────────────────────────────────────────────────────

/// Zoom factor with no magnification.
pub const ZOOM_DEFAULT: f64 = 1.0;

/// Increment applied per zoom-in / zoom-out shortcut.
pub const ZOOM_STEP: f64 = 0.1;

/// Smallest zoom factor reachable by zooming out.
pub const ZOOM_MIN: f64 = 0.1;
