//! Mapping from a container's `flex-direction` to the panes and axes a drag uses.
//!
//! The mapping itself is exhaustive over [`FlexDirection`]; the only fallible
//! step is parsing the computed-style string into that enum.

#[cfg(test)]
#[path = "axis_test.rs"]
mod axis_test;

use std::fmt;
use std::str::FromStr;

use crate::error::UiError;

/// Main-axis direction of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

/// Which sibling of the handle a pane is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sibling {
    Previous,
    Next,
}

/// Which box dimension is read for a pane's current size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeAxis {
    Width,
    Height,
}

/// Which pointer coordinate drives the drag delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordAxis {
    X,
    Y,
}

/// Everything a drag needs to know about its container's direction.
///
/// The leading pane grows with a positive pointer delta; the trailing pane
/// shrinks by the same amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMap {
    pub leading: Sibling,
    pub trailing: Sibling,
    pub size: SizeAxis,
    pub coord: CoordAxis,
}

impl FlexDirection {
    /// Resolve the pane order and axes for this direction.
    #[must_use]
    pub fn axis_map(self) -> AxisMap {
        let (leading, trailing) = if self.is_reversed() {
            (Sibling::Next, Sibling::Previous)
        } else {
            (Sibling::Previous, Sibling::Next)
        };
        let (size, coord) = match self {
            Self::Row | Self::RowReverse => (SizeAxis::Width, CoordAxis::X),
            Self::Column | Self::ColumnReverse => (SizeAxis::Height, CoordAxis::Y),
        };
        AxisMap { leading, trailing, size, coord }
    }

    /// Whether the main axis runs against document order.
    #[must_use]
    pub fn is_reversed(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }

    /// The CSS keyword for this direction.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::RowReverse => "row-reverse",
            Self::Column => "column",
            Self::ColumnReverse => "column-reverse",
        }
    }
}

impl FromStr for FlexDirection {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "row" => Ok(Self::Row),
            "row-reverse" => Ok(Self::RowReverse),
            "column" => Ok(Self::Column),
            "column-reverse" => Ok(Self::ColumnReverse),
            other => Err(UiError::UnknownDirection(other.to_owned())),
        }
    }
}

impl fmt::Display for FlexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Whether a computed `display` value makes its element a flex container
/// the resizer can work in. Only block-level `flex` qualifies.
#[must_use]
pub fn is_flex_display(display: &str) -> bool {
    display.trim() == "flex"
}
