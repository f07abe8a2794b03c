// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: sides, edge flags, geometry snapshots, and resolved placements.
//!
//! Coordinates follow Kurbo: `x` grows to the right and `y` grows downward.
//! Offsets are [`Point`]s where `x` is the CSS-style `left` and `y` is `top`.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size};

use crate::error::PopoverError;

bitflags::bitflags! {
    /// Edges of the anchor named by a [`Side`].
    ///
    /// Straight sides name one edge; corner sides name one vertical and one
    /// horizontal edge.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// Above the anchor.
        const TOP    = 0b0000_0001;
        /// Below the anchor.
        const BOTTOM = 0b0000_0010;
        /// Left of the anchor.
        const LEFT   = 0b0000_0100;
        /// Right of the anchor.
        const RIGHT  = 0b0000_1000;
    }
}

/// Placement side of a popover relative to its anchor.
///
/// This is a closed set; parsing any other string fails with
/// [`PopoverError::InvalidConfiguration`].
///
/// ```
/// use understory_popover::Side;
///
/// let side: Side = "top-left".parse().unwrap();
/// assert_eq!(side, Side::TopLeft);
/// assert_eq!(side.flip_horizontal(), Side::TopRight);
/// assert!("middle".parse::<Side>().is_err());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the anchor, horizontally centered.
    #[default]
    Top,
    /// Right of the anchor, vertically centered.
    Right,
    /// Below the anchor, horizontally centered.
    Bottom,
    /// Left of the anchor, vertically centered.
    Left,
    /// Above the anchor, extending to the left.
    TopLeft,
    /// Above the anchor, extending to the right.
    TopRight,
    /// Below the anchor, extending to the left.
    BottomLeft,
    /// Below the anchor, extending to the right.
    BottomRight,
}

impl Side {
    /// All sides, in their canonical order. The first entry is the default.
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// The hyphenated name of this side (e.g. `"bottom-right"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    /// The anchor edges this side names.
    pub const fn edges(self) -> Edges {
        match self {
            Self::Top => Edges::TOP,
            Self::Right => Edges::RIGHT,
            Self::Bottom => Edges::BOTTOM,
            Self::Left => Edges::LEFT,
            Self::TopLeft => Edges::TOP.union(Edges::LEFT),
            Self::TopRight => Edges::TOP.union(Edges::RIGHT),
            Self::BottomLeft => Edges::BOTTOM.union(Edges::LEFT),
            Self::BottomRight => Edges::BOTTOM.union(Edges::RIGHT),
        }
    }

    /// True for the four corner sides.
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }

    /// Swap left and right, keeping any vertical component.
    ///
    /// `Top` and `Bottom` are returned unchanged.
    pub const fn flip_horizontal(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::TopLeft => Self::TopRight,
            Self::TopRight => Self::TopLeft,
            Self::BottomLeft => Self::BottomRight,
            Self::BottomRight => Self::BottomLeft,
            Self::Top | Self::Bottom => self,
        }
    }

    /// Swap top and bottom, keeping any horizontal component.
    ///
    /// `Left` and `Right` are returned unchanged.
    pub const fn flip_vertical(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::TopLeft => Self::BottomLeft,
            Self::BottomLeft => Self::TopLeft,
            Self::TopRight => Self::BottomRight,
            Self::BottomRight => Self::TopRight,
            Self::Left | Self::Right => self,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = PopoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|side| side.as_str() == s)
            .ok_or_else(|| PopoverError::InvalidConfiguration {
                value: s.to_string(),
            })
    }
}

/// Names a required size of a [`GeometrySnapshot`].
///
/// The anchor is not listed: a missing anchor falls back to [`Rect::ZERO`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// The popover's outer size.
    Popover,
    /// The arrow's outer size.
    Arrow,
    /// The viewport size.
    Viewport,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Popover => "popover",
            Self::Arrow => "arrow",
            Self::Viewport => "viewport",
        })
    }
}

/// Geometry captured for a single resolution pass.
///
/// Capture a new snapshot for every pass; the rendered scene may have changed
/// since the previous one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeometrySnapshot {
    /// Anchor bounds relative to the viewport. Overflow tests use this rectangle,
    /// and its size is the anchor size for every offset rule.
    pub anchor: Rect,
    /// Anchor bounds relative to the popover's offset parent.
    /// Only its origin is used, and only when aligning to the parent.
    pub anchor_in_parent: Rect,
    /// Outer size of the popover box.
    pub popover: Size,
    /// Outer size of the arrow.
    pub arrow: Size,
    /// Size of the viewport; its origin is `(0, 0)`.
    pub viewport: Size,
}

impl GeometrySnapshot {
    /// Create a snapshot whose parent-relative anchor equals the viewport-relative one.
    pub fn new(anchor: Rect, popover: Size, arrow: Size, viewport: Size) -> Self {
        Self {
            anchor,
            anchor_in_parent: anchor,
            popover,
            arrow,
            viewport,
        }
    }

    /// Start building a snapshot from individually captured measurements.
    pub fn builder() -> GeometryBuilder {
        GeometryBuilder::default()
    }

    /// Origin the popover is aligned to before any side offset is applied.
    pub fn anchor_origin(&self, align_to_parent: bool) -> Point {
        if align_to_parent {
            self.anchor_in_parent.origin()
        } else {
            self.anchor.origin()
        }
    }
}

/// Incremental builder for [`GeometrySnapshot`].
///
/// Anchors are optional: an anchor that has not been laid out yet is replaced
/// by [`Rect::ZERO`], which misplaces the popover for one pass instead of
/// failing. Popover, arrow, and viewport sizes are required.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_popover::{Dimension, GeometrySnapshot, PopoverError};
///
/// let geometry = GeometrySnapshot::builder()
///     .popover(Size::new(100.0, 40.0))
///     .arrow(Size::new(16.0, 8.0))
///     .viewport(Size::new(800.0, 600.0))
///     .build()
///     .unwrap();
/// assert_eq!(geometry.anchor, Rect::ZERO);
///
/// let err = GeometrySnapshot::builder()
///     .popover(Size::new(100.0, 40.0))
///     .arrow(Size::new(16.0, 8.0))
///     .build()
///     .unwrap_err();
/// assert_eq!(err, PopoverError::MissingGeometry(Dimension::Viewport));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GeometryBuilder {
    anchor: Option<Rect>,
    anchor_in_parent: Option<Rect>,
    popover: Option<Size>,
    arrow: Option<Size>,
    viewport: Option<Size>,
}

impl GeometryBuilder {
    /// Set the viewport-relative anchor bounds.
    pub fn anchor(mut self, anchor: Rect) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Set the parent-relative anchor bounds.
    pub fn anchor_in_parent(mut self, anchor: Rect) -> Self {
        self.anchor_in_parent = Some(anchor);
        self
    }

    /// Set the popover's outer size.
    pub fn popover(mut self, size: Size) -> Self {
        self.popover = Some(size);
        self
    }

    /// Set the arrow's outer size.
    pub fn arrow(mut self, size: Size) -> Self {
        self.arrow = Some(size);
        self
    }

    /// Set the viewport size.
    pub fn viewport(mut self, size: Size) -> Self {
        self.viewport = Some(size);
        self
    }

    /// Finish the snapshot.
    ///
    /// Returns [`PopoverError::MissingGeometry`] naming the first missing
    /// size, checked in popover, arrow, viewport order.
    pub fn build(self) -> Result<GeometrySnapshot, PopoverError> {
        let popover = self
            .popover
            .ok_or(PopoverError::MissingGeometry(Dimension::Popover))?;
        let arrow = self
            .arrow
            .ok_or(PopoverError::MissingGeometry(Dimension::Arrow))?;
        let viewport = self
            .viewport
            .ok_or(PopoverError::MissingGeometry(Dimension::Viewport))?;

        #[cfg(feature = "tracing")]
        if self.anchor.is_none() || self.anchor_in_parent.is_none() {
            tracing::warn!(
                viewport = self.anchor.is_some(),
                parent = self.anchor_in_parent.is_some(),
                "anchor geometry missing, substituting a zero rectangle"
            );
        }

        Ok(GeometrySnapshot {
            anchor: self.anchor.unwrap_or(Rect::ZERO),
            anchor_in_parent: self.anchor_in_parent.unwrap_or(Rect::ZERO),
            popover,
            arrow,
            viewport,
        })
    }
}

/// Where to draw a popover and its arrow.
///
/// Produced by [`resolve`](crate::resolve::resolve). `popover` is in the same
/// space as the anchor origin it was aligned to; `arrow` is relative to the
/// popover box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedPlacement {
    /// Side actually used after overflow correction.
    pub side: Side,
    /// Popover offset (`x` = left, `y` = top).
    pub popover: Point,
    /// Arrow offset within the popover (`x` = left, `y` = top).
    pub arrow: Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_exactly_the_eight_names() {
        for side in Side::ALL {
            assert_eq!(side.as_str().parse::<Side>(), Ok(side));
            assert_eq!(side.to_string(), side.as_str());
        }
        for bad in ["", "Top", "middle", "top left", "left-top", " top"] {
            assert_eq!(
                bad.parse::<Side>(),
                Err(PopoverError::InvalidConfiguration { value: bad.into() }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn default_side_is_top() {
        assert_eq!(Side::default(), Side::Top);
        assert_eq!(Side::ALL[0], Side::default());
    }

    #[test]
    fn corner_edges_combine_both_axes() {
        assert_eq!(Side::TopLeft.edges(), Edges::TOP | Edges::LEFT);
        assert_eq!(Side::BottomRight.edges(), Edges::BOTTOM | Edges::RIGHT);
        assert_eq!(Side::Left.edges(), Edges::LEFT);
        let corners = Side::ALL.into_iter().filter(|s| s.is_corner()).count();
        assert_eq!(corners, 4);
    }

    #[test]
    fn flips_are_involutions_and_keep_the_other_axis() {
        for side in Side::ALL {
            assert_eq!(side.flip_horizontal().flip_horizontal(), side);
            assert_eq!(side.flip_vertical().flip_vertical(), side);

            let vertical = Edges::TOP | Edges::BOTTOM;
            let horizontal = Edges::LEFT | Edges::RIGHT;
            assert_eq!(
                side.flip_horizontal().edges() & vertical,
                side.edges() & vertical
            );
            assert_eq!(
                side.flip_vertical().edges() & horizontal,
                side.edges() & horizontal
            );
        }
        assert_eq!(Side::BottomLeft.flip_horizontal(), Side::BottomRight);
        assert_eq!(Side::TopRight.flip_vertical(), Side::BottomRight);
        assert_eq!(Side::Top.flip_horizontal(), Side::Top);
    }

    #[test]
    fn builder_zero_fills_only_the_anchor() {
        let anchor = Rect::new(10.0, 500.0, 30.0, 520.0);
        let g = GeometrySnapshot::builder()
            .anchor(anchor)
            .popover(Size::new(100.0, 40.0))
            .arrow(Size::new(16.0, 8.0))
            .viewport(Size::new(800.0, 600.0))
            .build()
            .unwrap();
        assert_eq!(g.anchor, anchor);
        assert_eq!(g.anchor_in_parent, Rect::ZERO);
        assert_eq!(g.anchor_origin(false), Point::new(10.0, 500.0));
        assert_eq!(g.anchor_origin(true), Point::ZERO);
    }

    #[test]
    fn missing_anchor_is_never_a_geometry_error() {
        let g = GeometrySnapshot::builder()
            .popover(Size::new(100.0, 40.0))
            .arrow(Size::new(16.0, 8.0))
            .viewport(Size::new(800.0, 600.0))
            .build()
            .unwrap();
        assert_eq!(g.anchor, Rect::ZERO);
        assert_eq!(g.anchor_in_parent, Rect::ZERO);

        let names = [Dimension::Popover, Dimension::Arrow, Dimension::Viewport]
            .map(|d| d.to_string());
        assert_eq!(names, ["popover", "arrow", "viewport"]);
    }

    #[test]
    fn builder_reports_first_missing_size() {
        let err = GeometrySnapshot::builder().build().unwrap_err();
        assert_eq!(err, PopoverError::MissingGeometry(Dimension::Popover));

        let err = GeometrySnapshot::builder()
            .popover(Size::new(1.0, 1.0))
            .viewport(Size::new(1.0, 1.0))
            .build()
            .unwrap_err();
        assert_eq!(err, PopoverError::MissingGeometry(Dimension::Arrow));
    }
}
