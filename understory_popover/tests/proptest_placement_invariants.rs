// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariants for placement.
//!
//! 1. Clamp bounds: `clamp_center` stays in `[0, frame - size]` when the box fits.
//! 2. Arrow tracks anchor: when the low clamp fires, the arrow points at the anchor center.
//! 3. Flip laws: a side flips exactly when its own overflow test fails.
//! 4. No-flip law: without overflow, the rendered side is the preferred side.
//! 5. Idempotence: resolving twice gives the same placement.
//! 6. Corners ignore the viewport.

use kurbo::{Rect, Size};
use proptest::prelude::*;
use understory_popover::clamp::{clamp_arrow, clamp_center};
use understory_popover::resolve::{effective_side, resolve};
use understory_popover::{GeometrySnapshot, Side};

fn side() -> impl Strategy<Value = Side> {
    prop::sample::select(Side::ALL.to_vec())
}

fn corner() -> impl Strategy<Value = Side> {
    prop::sample::select(
        Side::ALL
            .into_iter()
            .filter(|s| s.is_corner())
            .collect::<Vec<_>>(),
    )
}

fn geometry() -> impl Strategy<Value = GeometrySnapshot> {
    (
        -200.0..1200.0f64,
        -200.0..1000.0f64,
        0.0..80.0f64,
        0.0..80.0f64,
        1.0..300.0f64,
        1.0..200.0f64,
        0.0..24.0f64,
        0.0..24.0f64,
        200.0..1200.0f64,
        200.0..900.0f64,
    )
        .prop_map(|(x, y, aw, ah, pw, ph, rw, rh, vw, vh)| {
            GeometrySnapshot::new(
                Rect::from_origin_size((x, y), (aw, ah)),
                Size::new(pw, ph),
                Size::new(rw, rh),
                Size::new(vw, vh),
            )
        })
}

proptest! {
    #[test]
    fn clamp_center_stays_in_frame(
        start in -500.0..1500.0f64,
        size in 0.0..400.0f64,
        anchor in 0.0..100.0f64,
        extra in 0.0..1000.0f64,
    ) {
        let frame = size + extra;
        let end = clamp_center(start, size, anchor, frame);
        prop_assert!(end >= 0.0, "end {end} below zero");
        // `end + size <= frame` can round past `frame - size` by an ulp.
        prop_assert!(end <= frame - size + 1e-9, "end {end} past {}", frame - size);
    }

    #[test]
    fn arrow_tracks_anchor_when_low_clamp_fires(
        start in -500.0..1500.0f64,
        size in 0.0..400.0f64,
        anchor in 0.0..100.0f64,
        extra in 0.0..1000.0f64,
        arrow_start in 0.0..50.0f64,
    ) {
        let frame = size + extra;
        let unclamped = start - (size / 2.0 - anchor / 2.0);
        prop_assume!(unclamped < 0.0);
        prop_assert_eq!(clamp_center(start, size, anchor, frame), 0.0);
        prop_assert_eq!(
            clamp_arrow(arrow_start, start, size, anchor, frame),
            start + anchor / 2.0
        );
    }

    #[test]
    fn straight_sides_flip_on_their_own_overflow(g in geometry()) {
        let a = g.anchor;
        let left_overflows = a.x0 - g.popover.width < 0.0;
        let right_overflows = a.x0 + g.popover.width + a.width() > g.viewport.width;
        let top_overflows = a.y0 - g.popover.height < 0.0;
        let bottom_overflows = a.y0 + g.popover.height + a.height() > g.viewport.height;

        let expect = |preferred: Side, overflow: bool, flipped: Side| {
            if overflow { flipped } else { preferred }
        };
        prop_assert_eq!(effective_side(Side::Left, &g), expect(Side::Left, left_overflows, Side::Right));
        prop_assert_eq!(effective_side(Side::Right, &g), expect(Side::Right, right_overflows, Side::Left));
        prop_assert_eq!(effective_side(Side::Top, &g), expect(Side::Top, top_overflows, Side::Bottom));
        prop_assert_eq!(effective_side(Side::Bottom, &g), expect(Side::Bottom, bottom_overflows, Side::Top));
    }

    #[test]
    fn at_most_one_axis_flips(g in geometry(), preferred in side()) {
        let rendered = effective_side(preferred, &g);
        prop_assert!(
            rendered == preferred
                || rendered == preferred.flip_horizontal()
                || rendered == preferred.flip_vertical(),
            "{preferred} rendered as {rendered}"
        );
    }

    #[test]
    fn resolve_is_idempotent(g in geometry(), preferred in side(), align in any::<bool>()) {
        prop_assert_eq!(resolve(preferred, &g, align), resolve(preferred, &g, align));
    }

    #[test]
    fn corners_do_not_depend_on_viewport_beyond_the_flip(
        g in geometry(),
        preferred in corner(),
        vw in 200.0..1200.0f64,
        vh in 200.0..900.0f64,
    ) {
        let mut other = g;
        other.viewport = Size::new(vw, vh);
        let a = resolve(preferred, &g, false);
        let b = resolve(preferred, &other, false);
        // Same rendered side means identical offsets, whatever the viewport.
        if a.side == b.side {
            prop_assert_eq!(a, b);
        }
    }
}

#[test]
fn every_side_keeps_its_preference_with_room() {
    let g = GeometrySnapshot::new(
        Rect::from_origin_size((400.0, 300.0), (20.0, 20.0)),
        Size::new(100.0, 40.0),
        Size::new(16.0, 8.0),
        Size::new(800.0, 600.0),
    );
    for side in Side::ALL {
        assert_eq!(resolve(side, &g, false).side, side);
    }
}
