// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover lifecycle with an exit/enter transition.
//!
//! A tiny "animation" queue stands in for the renderer: it records each
//! transition and finishes it on the next simulated frame. The popover is
//! placed only once it is visually shown, and re-placed on resize.
//!
//! Run:
//! - `RUST_LOG=understory_popover=trace cargo run -p understory_demos --example popover_lifecycle`

use std::cell::Cell;

use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_popover::active::TransitionPhase;
use understory_popover::{
    Completion, GeometrySnapshot, Popover, PopoverConfig, PopoverError, PopoverEvent, Side,
    Transition,
};

#[derive(Debug, Default)]
struct FrameQueue(Vec<Completion>);

impl Transition for FrameQueue {
    fn begin(&mut self, phase: TransitionPhase, completion: Completion) {
        println!("  transition begins: {}", phase.as_str());
        self.0.push(completion);
    }
}

/// Finish every queued transition, as if one frame had elapsed.
fn next_frame(
    popover: &mut Popover<FrameQueue>,
    geometry: &GeometrySnapshot,
) -> Vec<PopoverEvent> {
    let queued = std::mem::take(&mut popover.transition_mut().0);
    let mut events = Vec::new();
    for completion in queued {
        match popover.complete_transition(completion, geometry) {
            Ok(mut ev) => events.append(&mut ev),
            Err(PopoverError::StaleTransition) => {
                println!("  dropped stale completion #{}", completion.generation());
            }
            Err(err) => println!("  unexpected error: {err}"),
        }
    }
    events
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let viewport = Cell::new(Size::new(800.0, 600.0));
    let capture = || {
        GeometrySnapshot::new(
            Rect::from_origin_size((700.0, 300.0), (40.0, 20.0)),
            Size::new(160.0, 60.0),
            Size::new(16.0, 8.0),
            viewport.get(),
        )
    };

    let config = PopoverConfig::from_position("right").expect("valid position");
    let mut popover = Popover::with_transition(config, FrameQueue::default());

    println!("== Activate ==");
    println!("  events: {:?}", popover.activate(&capture));
    println!("  frame:  {:?}", next_frame(&mut popover, &capture()));
    // No room on the right of an anchor at x = 700.
    assert_eq!(popover.rendered_side(), Some(Side::Left));

    println!("== Resize ==");
    viewport.set(Size::new(1200.0, 600.0));
    println!("  events: {:?}", popover.viewport_resized(&capture));
    assert_eq!(popover.rendered_side(), Some(Side::Right));

    println!("== Toggle twice within one frame ==");
    println!("  events: {:?}", popover.toggle_active(&capture));
    println!("  events: {:?}", popover.toggle_active(&capture));
    println!("  frame:  {:?}", next_frame(&mut popover, &capture()));
    assert!(popover.is_visually_active());

    println!("== Deactivate ==");
    println!("  events: {:?}", popover.deactivate());
    println!("  frame:  {:?}", next_frame(&mut popover, &capture()));
    assert_eq!(popover.placement(), None);
}
