//! The resize gesture state machine.
//!
//! ```text
//! Idle --pointer_down(eligible, flex parent, both siblings)--> Dragging
//! Dragging --pointer_move--> Dragging (panes rewritten)
//! Dragging --pointer_up--> Idle (cursor released)
//! ```
//!
//! Every rejected pointer-down leaves the controller exactly as it was. The
//! caller owns event plumbing: it forwards events here and uses the returned
//! outcomes to decide whether to suppress defaults and keep listening.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::error::UiError;
use crate::resize::axis::{CoordAxis, FlexDirection, is_flex_display};
use crate::resize::cursor::{CursorGuard, CursorSurface};
use crate::resize::layout::{LayoutTree, PointerSample};
use crate::resize::session::{DragSession, PaneMetrics, SizeUpdate};

/// Predicate deciding whether a pointer-down target may start a resize.
pub type Eligibility<N> = Box<dyn Fn(&N) -> bool>;

/// Why a pointer-down did not start a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The eligibility predicate returned `false`.
    Ineligible,
    /// The handle has no parent element.
    NoParent,
    /// The parent is not a `display: flex` container.
    NotFlex,
    /// The handle is at an edge and one of the panes does not exist.
    MissingSibling,
}

/// Result of [`ResizeController::pointer_down`].
#[derive(Debug, Clone, PartialEq)]
pub enum DownOutcome {
    /// A session started; the caller should suppress the event's default
    /// action and start tracking moves.
    Started,
    /// Not a resizable context. Nothing changed.
    Ignored(IgnoreReason),
    /// The layout and the controller disagree. Already logged; nothing changed.
    Rejected(UiError),
}

impl DownOutcome {
    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started)
    }
}

/// An active drag: the two panes, the axis, the arithmetic, and the cursor
/// override that lives exactly as long as the drag.
pub struct ActiveDrag<N, S: CursorSurface> {
    pub leading: N,
    pub trailing: N,
    pub coord: CoordAxis,
    pub session: DragSession,
    cursor: Option<CursorGuard<S>>,
}

impl<N, S: CursorSurface> ActiveDrag<N, S> {
    /// Whether this drag currently holds a cursor override.
    #[must_use]
    pub fn holds_cursor(&self) -> bool {
        self.cursor.is_some()
    }
}

/// Controller state.
pub enum DragState<N, S: CursorSurface> {
    Idle,
    Dragging(ActiveDrag<N, S>),
}

/// Drives one container's resize gestures against a [`LayoutTree`].
pub struct ResizeController<T: LayoutTree> {
    tree: T,
    is_eligible: Eligibility<T::Node>,
    state: DragState<T::Node, T::Surface>,
}

impl<T: LayoutTree> ResizeController<T> {
    /// Create an idle controller. Without a predicate every target is eligible.
    pub fn new(tree: T, is_eligible: Option<Eligibility<T::Node>>) -> Self {
        Self {
            tree,
            is_eligible: is_eligible.unwrap_or_else(|| Box::new(|_| true)),
            state: DragState::Idle,
        }
    }

    #[must_use]
    pub fn tree(&self) -> &T {
        &self.tree
    }

    #[must_use]
    pub fn state(&self) -> &DragState<T::Node, T::Surface> {
        &self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The active session's arithmetic, if dragging.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(drag) => Some(&drag.session),
            DragState::Idle => None,
        }
    }

    /// Handle a pointer-down on `target`.
    pub fn pointer_down(&mut self, target: &T::Node, at: PointerSample) -> DownOutcome {
        if !(self.is_eligible)(target) {
            return DownOutcome::Ignored(IgnoreReason::Ineligible);
        }
        let Some(parent) = self.tree.parent(target) else {
            return DownOutcome::Ignored(IgnoreReason::NoParent);
        };
        let parent_style = self.tree.computed_style(&parent);
        if !is_flex_display(&parent_style.display) {
            return DownOutcome::Ignored(IgnoreReason::NotFlex);
        }
        let direction = match parent_style.flex_direction.parse::<FlexDirection>() {
            Ok(direction) => direction,
            Err(err) => {
                leptos::logging::error!("{err}");
                return DownOutcome::Rejected(err);
            }
        };

        let axes = direction.axis_map();
        let (Some(leading), Some(trailing)) = (
            self.tree.sibling(target, axes.leading),
            self.tree.sibling(target, axes.trailing),
        ) else {
            return DownOutcome::Ignored(IgnoreReason::MissingSibling);
        };

        let leading_metrics =
            PaneMetrics::new(self.tree.offset_size(&leading, axes.size), self.tree.grow(&leading));
        let trailing_metrics =
            PaneMetrics::new(self.tree.offset_size(&trailing, axes.size), self.tree.grow(&trailing));
        let session = DragSession::new(leading_metrics, trailing_metrics, at.coord(axes.coord));

        // A session whose pointer-up never arrived must release its cursor
        // before the new override is applied.
        self.state = DragState::Idle;

        let handle_cursor = self.tree.computed_style(target).cursor;
        let cursor = self
            .tree
            .cursor_surface()
            .map(|surface| CursorGuard::acquire(surface, &handle_cursor));

        self.state = DragState::Dragging(ActiveDrag {
            leading,
            trailing,
            coord: axes.coord,
            session,
            cursor,
        });
        DownOutcome::Started
    }

    /// Handle a pointer-move. Returns the applied update while dragging.
    pub fn pointer_move(&mut self, at: PointerSample) -> Option<SizeUpdate> {
        let DragState::Dragging(drag) = &mut self.state else {
            return None;
        };
        let update = drag.session.update(at.coord(drag.coord));
        self.tree.set_grow(&drag.leading, update.leading_grow);
        self.tree.set_grow(&drag.trailing, update.trailing_grow);
        Some(update)
    }

    /// Handle a pointer-up. Returns whether a session ended.
    pub fn pointer_up(&mut self) -> bool {
        matches!(std::mem::replace(&mut self.state, DragState::Idle), DragState::Dragging(_))
    }
}
