// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position resolution: choose the rendered side, then apply its offsets.
//!
//! ## Flipping
//!
//! The preferred side is tested against the viewport-relative anchor in a
//! fixed order, and the first overflow found flips that axis:
//!
//! 1. names `left` and `anchor.x0 - popover.width < 0` → the `right` counterpart,
//! 2. names `right` and `anchor.x0 + popover.width + anchor.width > viewport.width` → `left`,
//! 3. names `top` and `anchor.y0 - popover.height < 0` → `bottom`,
//! 4. names `bottom` and `anchor.y0 + popover.height + anchor.height > viewport.height` → `top`.
//!
//! At most one axis flips per call, so a corner side that overflows on both
//! axes is only corrected horizontally. Each call is a fresh decision; the
//! previously rendered side plays no part.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_popover::{GeometrySnapshot, Side, resolve::resolve};
//!
//! let geometry = GeometrySnapshot::new(
//!     Rect::from_origin_size((10.0, 500.0), (20.0, 20.0)),
//!     Size::new(100.0, 40.0),
//!     Size::new(16.0, 8.0),
//!     Size::new(800.0, 600.0),
//! );
//!
//! // Not enough room on the left: render on the right instead.
//! let placed = resolve(Side::Left, &geometry, false);
//! assert_eq!(placed.side, Side::Right);
//! assert_eq!(placed.popover.x, 46.0);
//! assert_eq!(placed.arrow.x, -16.0);
//! ```

use crate::offsets::{Baseline, place};
use crate::types::{Edges, GeometrySnapshot, ResolvedPlacement, Side};

/// The side to render given the preferred side and the current geometry.
pub fn effective_side(preferred: Side, geometry: &GeometrySnapshot) -> Side {
    let edges = preferred.edges();
    let anchor = geometry.anchor;
    let popover = geometry.popover;
    let viewport = geometry.viewport;

    // A side names at most one horizontal and one vertical edge, so each pair
    // below is exclusive and the checks keep their left, right, top, bottom order.
    let horizontal_overflow = (edges.contains(Edges::LEFT) && anchor.x0 - popover.width < 0.0)
        || (edges.contains(Edges::RIGHT)
            && anchor.x0 + popover.width + anchor.width() > viewport.width);
    let vertical_overflow = || {
        (edges.contains(Edges::TOP) && anchor.y0 - popover.height < 0.0)
            || (edges.contains(Edges::BOTTOM)
                && anchor.y0 + popover.height + anchor.height() > viewport.height)
    };

    let rendered = if horizontal_overflow {
        preferred.flip_horizontal()
    } else if vertical_overflow() {
        preferred.flip_vertical()
    } else {
        preferred
    };

    #[cfg(feature = "tracing")]
    if rendered != preferred {
        tracing::debug!(
            preferred = preferred.as_str(),
            rendered = rendered.as_str(),
            "popover flipped to avoid viewport overflow"
        );
    }

    rendered
}

/// Resolve the placement of a popover.
///
/// Picks the [`effective_side`], builds the [`Baseline`] (aligned to the
/// parent-relative anchor when `align_to_parent` is set), and applies the
/// side's offset rule. Pure and idempotent: identical inputs give identical
/// placements.
pub fn resolve(
    preferred: Side,
    geometry: &GeometrySnapshot,
    align_to_parent: bool,
) -> ResolvedPlacement {
    let side = effective_side(preferred, geometry);
    let placement = place(side, geometry, Baseline::new(geometry, align_to_parent));

    #[cfg(feature = "tracing")]
    tracing::trace!(
        side = side.as_str(),
        left = placement.popover.x,
        top = placement.popover.y,
        arrow_left = placement.arrow.x,
        arrow_top = placement.arrow.y,
        "popover resolved"
    );

    placement
}
