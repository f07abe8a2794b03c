// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover basics.
//!
//! Resolve every side for an anchor in the middle of the viewport and for one
//! hugging its top-left corner, and print the resulting offsets.
//!
//! Run:
//! - `cargo run -p understory_demos --example popover_basics`

use kurbo::{Point, Rect, Size};
use understory_popover::resolve::resolve;
use understory_popover::{GeometrySnapshot, Side};

fn main() {
    let popover = Size::new(100.0, 40.0);
    let arrow = Size::new(16.0, 8.0);
    let viewport = Size::new(800.0, 600.0);

    for (label, origin) in [("centered", (390.0, 290.0)), ("corner", (4.0, 4.0))] {
        let geometry = GeometrySnapshot::new(
            Rect::from_origin_size(origin, (20.0, 20.0)),
            popover,
            arrow,
            viewport,
        );
        println!("== Anchor {label} at {origin:?} ==");
        for side in Side::ALL {
            let placed = resolve(side, &geometry, false);
            println!(
                "  {:>12} -> {:<12} popover {:?} arrow {:?}",
                side.as_str(),
                placed.side.as_str(),
                placed.popover,
                placed.arrow
            );
        }
    }

    // Near the top-left corner, `top` flips below the anchor and the popover is
    // clamped against the left edge while the arrow keeps pointing at the anchor.
    let geometry = GeometrySnapshot::new(
        Rect::from_origin_size((4.0, 4.0), (20.0, 20.0)),
        popover,
        arrow,
        viewport,
    );
    let placed = resolve(Side::Top, &geometry, false);
    assert_eq!(placed.side, Side::Bottom);
    assert_eq!(placed.popover, Point::new(0.0, 32.0));
    assert_eq!(placed.arrow, Point::new(14.0, -8.0));
}
