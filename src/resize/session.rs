//! Size arithmetic for a single drag gesture.
//!
//! A [`DragSession`] is seeded on pointer-down with both panes' sizes and grow
//! weights and the starting pointer coordinate. Each pointer-move feeds the
//! new coordinate to [`DragSession::update`], which moves the signed delta
//! from the trailing pane to the leading pane, clamps at the bounds, and
//! derives fresh grow weights from the resulting proportions.
//!
//! Invariants for the lifetime of a session:
//!
//! - `leading_size + trailing_size == total_size` (within float tolerance)
//! - both sizes stay in `[0, total_size]`
//! - `total_size` and `total_grow` never change
//!
//! Grow weights are recomputed from the current sizes on every step rather
//! than adjusted incrementally, so a long gesture cannot accumulate drift.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::consts::SIZE_EPSILON;

/// Size and grow weight of one pane at the start of a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneMetrics {
    /// Rendered size along the drag axis, in CSS pixels.
    pub size: f64,
    /// Inline `flex-grow` weight.
    pub grow: f64,
}

impl PaneMetrics {
    #[must_use]
    pub fn new(size: f64, grow: f64) -> Self {
        Self { size, grow }
    }
}

/// Which bound, if any, limited the last update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clamp {
    /// The delta was applied unchanged.
    #[default]
    None,
    /// The leading pane hit zero; the pointer reference was pulled back.
    LeadingFloor,
    /// The trailing pane hit zero; the pointer reference was pushed forward.
    TrailingFloor,
    /// A pane exceeded the total and was cut back to it.
    ///
    /// The floor corrections above already keep both sizes within the total,
    /// so this only guards against float rounding.
    Ceiling,
}

/// Result of one pointer-move step, ready to be written to both panes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeUpdate {
    pub leading_size: f64,
    pub trailing_size: f64,
    pub leading_grow: f64,
    pub trailing_grow: f64,
    pub clamp: Clamp,
}

/// Mutable state of an in-progress drag between two panes.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    total_size: f64,
    total_grow: f64,
    start_grow: (f64, f64),
    leading_size: f64,
    trailing_size: f64,
    last_coord: f64,
}

impl DragSession {
    /// Start a session from both panes' metrics and the pointer-down coordinate.
    #[must_use]
    pub fn new(leading: PaneMetrics, trailing: PaneMetrics, start_coord: f64) -> Self {
        Self {
            total_size: leading.size + trailing.size,
            total_grow: leading.grow + trailing.grow,
            start_grow: (leading.grow, trailing.grow),
            leading_size: leading.size,
            trailing_size: trailing.size,
            last_coord: start_coord,
        }
    }

    /// Combined size of both panes, fixed at session start.
    #[must_use]
    pub fn total_size(&self) -> f64 {
        self.total_size
    }

    /// Combined grow weight of both panes, fixed at session start.
    #[must_use]
    pub fn total_grow(&self) -> f64 {
        self.total_grow
    }

    #[must_use]
    pub fn leading_size(&self) -> f64 {
        self.leading_size
    }

    #[must_use]
    pub fn trailing_size(&self) -> f64 {
        self.trailing_size
    }

    /// Pointer coordinate the next delta is measured from, after any
    /// clamp correction.
    #[must_use]
    pub fn last_coord(&self) -> f64 {
        self.last_coord
    }

    /// Advance the session to pointer coordinate `coord`.
    pub fn update(&mut self, coord: f64) -> SizeUpdate {
        let total = self.total_size;
        let mut coord = coord;
        let distance = coord - self.last_coord;
        let mut leading = self.leading_size + distance;
        let mut trailing = self.trailing_size - distance;
        let mut clamp = Clamp::None;

        if leading < 0.0 {
            // Overshoot is negative: move the reference back by that much.
            coord -= leading;
            leading = 0.0;
            trailing = total;
            clamp = Clamp::LeadingFloor;
        } else if trailing < 0.0 {
            coord += trailing;
            trailing = 0.0;
            leading = total;
            clamp = Clamp::TrailingFloor;
        }

        if leading > total || trailing > total {
            leading = leading.min(total);
            trailing = trailing.min(total);
            clamp = Clamp::Ceiling;
        }

        self.leading_size = leading;
        self.trailing_size = trailing;
        self.last_coord = coord;

        let (leading_grow, trailing_grow) = self.grow_weights();
        SizeUpdate {
            leading_size: leading,
            trailing_size: trailing,
            leading_grow,
            trailing_grow,
            clamp,
        }
    }

    /// Grow weights proportional to the current sizes.
    ///
    /// Two collapsed panes have no proportion to share, so they keep the
    /// weights they started with.
    #[must_use]
    pub fn grow_weights(&self) -> (f64, f64) {
        if self.total_size <= SIZE_EPSILON {
            return self.start_grow;
        }
        (
            self.total_grow * (self.leading_size / self.total_size),
            self.total_grow * (self.trailing_size / self.total_size),
        )
    }
}
