//! Drag-to-resize for two adjacent flex panes.
//!
//! A resizer handle sits between two siblings inside a `display: flex`
//! container. Dragging it moves size from one sibling to the other while the
//! pair's combined size stays fixed; the result is written back as each
//! sibling's `flex-grow`, so the layout keeps its proportions when the window
//! is resized later.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`axis`] | `flex-direction` to leading/trailing/axis mapping |
//! | [`session`] | Per-gesture size arithmetic and clamping |
//! | [`layout`] | The DOM-like tree the controller reads and writes |
//! | [`cursor`] | Scoped body cursor override |
//! | [`controller`] | The `Idle`/`Dragging` state machine |
//! | [`binding`] | Session-scoped listener registration around the controller |
//! | `web` | `web_sys` binding and listener registration (`csr` only) |
//!
//! The controller is generic over [`layout::LayoutTree`] and the binding over
//! [`binding::ListenerHost`], so everything except `web` runs in native tests.

pub mod axis;
pub mod binding;
pub mod controller;
pub mod cursor;
pub mod layout;
pub mod session;
#[cfg(feature = "csr")]
pub mod web;

#[cfg(test)]
mod fake_tree;

pub use axis::{AxisMap, CoordAxis, FlexDirection, Sibling, SizeAxis};
pub use binding::{GestureBinding, ListenerHost};
pub use controller::{DownOutcome, DragState, IgnoreReason, ResizeController};
pub use session::{Clamp, DragSession, PaneMetrics, SizeUpdate};
