// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-dimensional edge clamping.
//!
//! Both functions work on a single axis and are used independently for the
//! horizontal and vertical axes. Inputs are:
//!
//! - `start`: the anchor's coordinate on the axis (the popover's unshifted origin),
//! - `size`: the popover's extent on the axis,
//! - `anchor`: the anchor's extent on the axis,
//! - `frame`: the viewport's extent on the axis; the frame spans `[0, frame]`.
//!
//! ## Priority
//!
//! When the popover is larger than the frame both clamps apply and the
//! far-edge clamp wins, leaving the popover hanging off the near edge.
//!
//! ```
//! use understory_popover::clamp::{clamp_arrow, clamp_center};
//!
//! // Centered over a 20px anchor at x = 10, a 100px box would start at -30.
//! assert_eq!(clamp_center(10.0, 100.0, 20.0, 800.0), 0.0);
//! // The arrow then points at the anchor's midpoint instead of the box center.
//! assert_eq!(clamp_arrow(42.0, 10.0, 100.0, 20.0, 800.0), 20.0);
//! ```

/// Position a box of `size` centered over the anchor, kept inside `[0, frame]`.
///
/// Returns a value in `[0, frame - size]` whenever `frame >= size`.
pub fn clamp_center(start: f64, size: f64, anchor: f64, frame: f64) -> f64 {
    let mut end = centered(start, size, anchor);
    if end < 0.0 {
        end = 0.0;
    }
    if end + size > frame {
        end = frame - size;
    }
    end
}

/// Arrow offset that keeps the arrow over the anchor after [`clamp_center`]
/// has shifted the box.
///
/// `arrow_start` is the arrow offset to keep when the box is not shifted.
/// The low-edge case is checked first and, when it applies, the high-edge
/// case is not consulted.
pub fn clamp_arrow(arrow_start: f64, start: f64, size: f64, anchor: f64, frame: f64) -> f64 {
    let end = centered(start, size, anchor);
    if end < 0.0 {
        start + anchor / 2.0
    } else if end + size > frame {
        size - (frame - start) + anchor / 2.0
    } else {
        arrow_start
    }
}

#[inline]
fn centered(start: f64, size: f64, anchor: f64) -> f64 {
    start - (size / 2.0 - anchor / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_when_room() {
        // Anchor 100..120, box 60 → centered start 80.
        assert_eq!(clamp_center(100.0, 60.0, 20.0, 800.0), 80.0);
        assert_eq!(clamp_arrow(22.0, 100.0, 60.0, 20.0, 800.0), 22.0);
    }

    #[test]
    fn low_edge_clamps_to_zero() {
        assert_eq!(clamp_center(10.0, 100.0, 20.0, 800.0), 0.0);
        assert_eq!(clamp_arrow(42.0, 10.0, 100.0, 20.0, 800.0), 20.0);
    }

    #[test]
    fn high_edge_clamps_to_frame() {
        // Anchor 780..800 in an 800 frame; centered start 740 would end at 840.
        assert_eq!(clamp_center(780.0, 100.0, 20.0, 800.0), 700.0);
        // 100 - (800 - 780) + 10
        assert_eq!(clamp_arrow(42.0, 780.0, 100.0, 20.0, 800.0), 90.0);
    }

    #[test]
    fn exact_fit_is_not_clamped() {
        // Centered start 0 and end exactly at the frame.
        assert_eq!(clamp_center(40.0, 100.0, 20.0, 100.0), 0.0);
        assert_eq!(clamp_arrow(7.0, 40.0, 100.0, 20.0, 100.0), 7.0);
    }

    #[test]
    fn oversized_box_prefers_high_clamp() {
        // Box 300 in a 200 frame: low clamp fires, then the high clamp overrides it.
        assert_eq!(clamp_center(50.0, 300.0, 20.0, 200.0), -100.0);
        // Arrow keeps the low-edge rule.
        assert_eq!(clamp_arrow(0.0, 50.0, 300.0, 20.0, 200.0), 60.0);
    }
}
