//! Scoped cursor override for the duration of a drag.
//!
//! While dragging, the pointer leaves the handle almost immediately, so the
//! handle's own cursor would flicker back to the default. The override copies
//! the handle cursor onto a page-wide surface and must be removed however the
//! session ends; [`CursorGuard`] ties the removal to `Drop`.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

/// Something whose cursor style can be overridden and restored.
pub trait CursorSurface {
    fn set_cursor(&self, cursor: &str);
    fn clear_cursor(&self);
}

/// Holds a cursor override and clears it when dropped.
#[derive(Debug)]
pub struct CursorGuard<S: CursorSurface> {
    surface: S,
}

impl<S: CursorSurface> CursorGuard<S> {
    /// Apply `cursor` to `surface` until the guard is dropped.
    #[must_use]
    pub fn acquire(surface: S, cursor: &str) -> Self {
        surface.set_cursor(cursor);
        Self { surface }
    }
}

impl<S: CursorSurface> Drop for CursorGuard<S> {
    fn drop(&mut self) {
        self.surface.clear_cursor();
    }
}
