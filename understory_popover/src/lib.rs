// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_popover --heading-base-level=0

//! Understory Popover: Kurbo-native placement for popovers, tooltips, and their arrows.
//!
//! ## Overview
//!
//! Given an anchor rectangle, a preferred [`Side`], and the sizes of the popover,
//! its arrow, and the viewport, this crate computes where to draw the popover
//! and its arrow so both stay inside the viewport.
//!
//! - [`resolve`](resolve::resolve) flips the preferred side to its opposite when
//!   there is not enough room, then applies that side's offsets.
//! - [`clamp`] keeps a centered popover inside the viewport on one axis while
//!   the arrow keeps pointing at the anchor.
//! - [`ActiveState`] separates the requested (logical) activation from the
//!   rendered (visual) one, so enter/exit transitions can run in between.
//! - [`Popover`] ties them together: it resolves when the popover becomes
//!   visible, when the preferred side changes, and on resize.
//!
//! ## Not a renderer
//!
//! This crate does not measure elements, bind events, or apply styles.
//! Upstream code captures a [`GeometrySnapshot`] per pass and applies the
//! returned [`ResolvedPlacement`] offsets however it draws.
//!
//! ## Coordinates
//!
//! Kurbo conventions: `x` grows right, `y` grows down, the viewport spans
//! `(0, 0)` to its size. Offsets are [`kurbo::Point`]s with `x` as left and
//! `y` as top. The arrow offset is relative to the popover box.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: emit `tracing` events for flips, visual changes, stale
//!   transitions, and missing anchor geometry.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_popover::{GeometrySnapshot, Popover, PopoverConfig, Side};
//!
//! // A 20×20 anchor near the left edge of an 800×600 viewport.
//! let geometry = GeometrySnapshot::new(
//!     Rect::from_origin_size((10.0, 500.0), (20.0, 20.0)),
//!     Size::new(100.0, 40.0),
//!     Size::new(16.0, 8.0),
//!     Size::new(800.0, 600.0),
//! );
//!
//! let mut popover = Popover::new(PopoverConfig::default().with_preferred(Side::Top));
//! let events = popover.activate(&geometry);
//! assert_eq!(events.len(), 2);
//!
//! let placed = popover.placement().unwrap();
//! assert_eq!(placed.side, Side::Top);
//! // Clamped to the left edge, above the anchor.
//! assert_eq!(placed.popover, Point::new(0.0, 452.0));
//! // The arrow still points at the anchor's center.
//! assert_eq!(placed.arrow, Point::new(20.0, 40.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod active;
pub mod clamp;
pub mod error;
pub mod offsets;
pub mod popover;
pub mod resolve;
pub mod types;

pub use active::{
    ActivationPhase, ActiveState, Completion, NoTransition, Transition, TransitionPhase,
    VisualChange,
};
pub use error::PopoverError;
pub use popover::{GeometrySource, Popover, PopoverConfig, PopoverEvent};
pub use types::{Dimension, Edges, GeometryBuilder, GeometrySnapshot, ResolvedPlacement, Side};
