// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-side offset rules.
//!
//! Every side starts from a [`Baseline`]: the popover sits on the anchor origin
//! and the arrow is centered inside the popover. [`place`] then moves the
//! popover off the anchor on one axis and, for the straight sides, centers it
//! over the anchor on the other axis with [`clamp_center`].
//!
//! | side | popover | arrow |
//! |---|---|---|
//! | `top` | up by popover + arrow height, x clamped | top = popover height, x tracks anchor |
//! | `bottom` | down by anchor + arrow height, x clamped | top = -arrow height, x tracks anchor |
//! | `right` | right by anchor + arrow width, y clamped | left = -arrow width, y tracks anchor |
//! | `left` | left by popover + arrow width, y clamped | left = popover width, y tracks anchor |
//! | `*-left` corners | vertical rule of top/bottom, left by arrow width | left = 0 |
//! | `*-right` corners | vertical rule of top/bottom, left by popover - anchor width | left = popover - arrow width |
//!
//! Corner placements are fixed arithmetic and never look at the viewport.

use kurbo::Point;

use crate::clamp::{clamp_arrow, clamp_center};
use crate::types::{GeometrySnapshot, ResolvedPlacement, Side};

/// Offsets before any side rule is applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Baseline {
    /// Popover offset, aligned to the anchor origin.
    pub popover: Point,
    /// Arrow offset, centered within the popover.
    pub arrow: Point,
}

impl Baseline {
    /// Baseline for `geometry`, aligned to the parent-relative anchor origin
    /// when `align_to_parent` is set and to the viewport-relative one otherwise.
    pub fn new(geometry: &GeometrySnapshot, align_to_parent: bool) -> Self {
        let popover = geometry.popover;
        let arrow = geometry.arrow;
        Self {
            popover: geometry.anchor_origin(align_to_parent),
            arrow: Point::new(
                popover.width / 2.0 - arrow.width / 2.0,
                popover.height / 2.0 - arrow.height / 2.0,
            ),
        }
    }
}

/// Apply the offset rule for `side` on top of `baseline`.
///
/// `side` is used as given; flipping is the resolver's job.
pub fn place(side: Side, geometry: &GeometrySnapshot, baseline: Baseline) -> ResolvedPlacement {
    let mut popover = baseline.popover;
    let mut arrow = baseline.arrow;

    match side {
        Side::Top => {
            center_horizontally(geometry, baseline, &mut popover, &mut arrow);
            above(geometry, &mut popover, &mut arrow);
        }
        Side::Bottom => {
            center_horizontally(geometry, baseline, &mut popover, &mut arrow);
            below(geometry, &mut popover, &mut arrow);
        }
        Side::Right => {
            center_vertically(geometry, baseline, &mut popover, &mut arrow);
            popover.x += geometry.anchor.width() + geometry.arrow.width;
            arrow.x = -geometry.arrow.width;
        }
        Side::Left => {
            center_vertically(geometry, baseline, &mut popover, &mut arrow);
            popover.x -= geometry.popover.width + geometry.arrow.width;
            arrow.x = geometry.popover.width;
        }
        Side::TopLeft => {
            above(geometry, &mut popover, &mut arrow);
            extend_left(geometry, &mut popover, &mut arrow);
        }
        Side::TopRight => {
            above(geometry, &mut popover, &mut arrow);
            extend_right(geometry, &mut popover, &mut arrow);
        }
        Side::BottomLeft => {
            below(geometry, &mut popover, &mut arrow);
            extend_left(geometry, &mut popover, &mut arrow);
        }
        Side::BottomRight => {
            below(geometry, &mut popover, &mut arrow);
            extend_right(geometry, &mut popover, &mut arrow);
        }
    }

    ResolvedPlacement {
        side,
        popover,
        arrow,
    }
}

fn center_horizontally(
    geometry: &GeometrySnapshot,
    baseline: Baseline,
    popover: &mut Point,
    arrow: &mut Point,
) {
    let width = geometry.popover.width;
    let anchor = geometry.anchor.width();
    let frame = geometry.viewport.width;
    popover.x = clamp_center(baseline.popover.x, width, anchor, frame);
    arrow.x = clamp_arrow(baseline.arrow.x, baseline.popover.x, width, anchor, frame);
}

fn center_vertically(
    geometry: &GeometrySnapshot,
    baseline: Baseline,
    popover: &mut Point,
    arrow: &mut Point,
) {
    let height = geometry.popover.height;
    let anchor = geometry.anchor.height();
    let frame = geometry.viewport.height;
    popover.y = clamp_center(baseline.popover.y, height, anchor, frame);
    arrow.y = clamp_arrow(baseline.arrow.y, baseline.popover.y, height, anchor, frame);
}

fn above(geometry: &GeometrySnapshot, popover: &mut Point, arrow: &mut Point) {
    popover.y -= geometry.popover.height + geometry.arrow.height;
    // Arrow hangs below the box, pointing down.
    arrow.y = geometry.popover.height;
}

fn below(geometry: &GeometrySnapshot, popover: &mut Point, arrow: &mut Point) {
    popover.y += geometry.anchor.height() + geometry.arrow.height;
    arrow.y = -geometry.arrow.height;
}

fn extend_left(geometry: &GeometrySnapshot, popover: &mut Point, arrow: &mut Point) {
    popover.x -= geometry.arrow.width;
    arrow.x = 0.0;
}

fn extend_right(geometry: &GeometrySnapshot, popover: &mut Point, arrow: &mut Point) {
    popover.x += geometry.anchor.width() - geometry.popover.width;
    arrow.x = geometry.popover.width - geometry.arrow.width;
}
