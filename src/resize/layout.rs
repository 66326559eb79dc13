//! The tree abstraction the resize controller operates on.

use crate::resize::axis::{CoordAxis, Sibling, SizeAxis};
use crate::resize::cursor::CursorSurface;

/// Computed style properties the controller consults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    pub display: String,
    pub flex_direction: String,
    pub cursor: String,
}

/// Page coordinates of a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The coordinate along `axis`.
    #[must_use]
    pub fn coord(self, axis: CoordAxis) -> f64 {
        match axis {
            CoordAxis::X => self.x,
            CoordAxis::Y => self.y,
        }
    }
}

/// A DOM-like element tree with computed styles and writable grow weights.
///
/// Methods take `&self`; implementations backed by the browser mutate through
/// the DOM, test doubles through interior mutability.
pub trait LayoutTree {
    /// Element handle.
    type Node: Clone;
    /// Surface that receives the drag cursor override.
    type Surface: CursorSurface;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn previous_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    fn computed_style(&self, node: &Self::Node) -> ComputedStyle;

    /// Rendered size of `node` along `axis`.
    fn offset_size(&self, node: &Self::Node, axis: SizeAxis) -> f64;

    /// Inline grow weight of `node`; zero when unset.
    fn grow(&self, node: &Self::Node) -> f64;

    fn set_grow(&self, node: &Self::Node, grow: f64);

    /// The surface whose cursor is overridden while dragging, if available.
    fn cursor_surface(&self) -> Option<Self::Surface>;

    /// The sibling of `node` on the given side.
    fn sibling(&self, node: &Self::Node, side: Sibling) -> Option<Self::Node> {
        match side {
            Sibling::Previous => self.previous_sibling(node),
            Sibling::Next => self.next_sibling(node),
        }
    }
}
