// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A popover instance: configuration, activation, and the last placement.
//!
//! ## Pipeline
//!
//! Signals flow one way: an input (activation, preferred side, resize,
//! transition completion) goes in, at most one resolution pass runs, and the
//! resulting [`PopoverEvent`]s come out for the renderer to apply. Nothing the
//! renderer does with the events feeds back into the triggers.
//!
//! A pass runs when:
//! - the visual flag becomes `true`,
//! - the preferred side changes while visually active,
//! - the viewport is resized or [`Popover::reposition`] is called while visually active.
//!
//! Hidden popovers are never resolved. Geometry is pulled from a
//! [`GeometrySource`] only when a pass actually runs.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_popover::{GeometrySnapshot, Popover, PopoverConfig, PopoverEvent, Side};
//!
//! let geometry = GeometrySnapshot::new(
//!     Rect::from_origin_size((10.0, 500.0), (20.0, 20.0)),
//!     Size::new(100.0, 40.0),
//!     Size::new(16.0, 8.0),
//!     Size::new(800.0, 600.0),
//! );
//!
//! let mut popover = Popover::new(PopoverConfig::from_position("left").unwrap());
//! let events = popover.activate(&geometry);
//! assert_eq!(events[0], PopoverEvent::VisualChanged(true));
//! assert_eq!(popover.rendered_side(), Some(Side::Right));
//!
//! assert_eq!(popover.deactivate(), vec![PopoverEvent::VisualChanged(false)]);
//! assert_eq!(popover.placement(), None);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::active::{ActiveState, Completion, NoTransition, Transition, VisualChange};
use crate::error::PopoverError;
use crate::resolve::resolve;
use crate::types::{GeometrySnapshot, ResolvedPlacement, Side};

/// Configuration of a [`Popover`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PopoverConfig {
    /// Side to place the popover on when it fits.
    pub preferred: Side,
    /// Align offsets to the anchor's parent-relative origin instead of its
    /// viewport-relative one. Flip and clamp tests always use the viewport.
    pub align_to_parent: bool,
    /// Initial logical (and visual) activation.
    pub active: bool,
}

impl PopoverConfig {
    /// Configuration with a preferred side parsed from its name.
    ///
    /// Fails with [`PopoverError::InvalidConfiguration`] for anything but the
    /// eight side names.
    pub fn from_position(position: &str) -> Result<Self, PopoverError> {
        Ok(Self {
            preferred: position.parse()?,
            ..Self::default()
        })
    }

    /// Set the preferred side.
    pub fn with_preferred(mut self, side: Side) -> Self {
        self.preferred = side;
        self
    }

    /// Set parent alignment.
    pub fn with_align_to_parent(mut self, align: bool) -> Self {
        self.align_to_parent = align;
        self
    }

    /// Set the initial activation.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Supplies fresh geometry for a resolution pass.
///
/// Implemented for [`GeometrySnapshot`] itself and for closures returning one.
pub trait GeometrySource {
    /// Capture the current geometry.
    fn snapshot(&self) -> GeometrySnapshot;
}

impl GeometrySource for GeometrySnapshot {
    fn snapshot(&self) -> GeometrySnapshot {
        *self
    }
}

impl<F: Fn() -> GeometrySnapshot> GeometrySource for F {
    fn snapshot(&self) -> GeometrySnapshot {
        self()
    }
}

/// Output for the renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PopoverEvent {
    /// The visual flag changed; show or hide the overlay.
    VisualChanged(bool),
    /// A new placement to apply to the popover and arrow.
    Placed(ResolvedPlacement),
}

/// One popover: configuration, activation state, and its current placement.
#[derive(Clone, Debug)]
pub struct Popover<T = NoTransition> {
    config: PopoverConfig,
    state: ActiveState<T>,
    placement: Option<ResolvedPlacement>,
}

impl Popover {
    /// A popover without a transition mechanism.
    pub fn new(config: PopoverConfig) -> Self {
        Self {
            config,
            state: ActiveState::new(config.active),
            placement: None,
        }
    }
}

impl<T: Transition> Popover<T> {
    /// A popover whose visual changes go through `transition`.
    pub fn with_transition(config: PopoverConfig, transition: T) -> Self {
        Self {
            config,
            state: ActiveState::with_transition(config.active, transition),
            placement: None,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> PopoverConfig {
        self.config
    }

    /// Preferred side.
    pub fn preferred(&self) -> Side {
        self.config.preferred
    }

    /// Side of the current placement, if placed.
    pub fn rendered_side(&self) -> Option<Side> {
        self.placement.map(|p| p.side)
    }

    /// Current placement. `None` while hidden or before the first pass.
    pub fn placement(&self) -> Option<ResolvedPlacement> {
        self.placement
    }

    /// Activation state.
    pub fn state(&self) -> &ActiveState<T> {
        &self.state
    }

    /// The transition mechanism.
    pub fn transition_mut(&mut self) -> &mut T {
        self.state.transition_mut()
    }

    /// Logical activation.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Visual activation.
    pub fn is_visually_active(&self) -> bool {
        self.state.is_visually_active()
    }

    /// Request activation; resolves if the popover becomes visible right away.
    pub fn activate<G: GeometrySource + ?Sized>(&mut self, geometry: &G) -> Vec<PopoverEvent> {
        self.set_active(true, geometry)
    }

    /// Request deactivation. Hiding never needs geometry.
    pub fn deactivate(&mut self) -> Vec<PopoverEvent> {
        let change = self.state.deactivate();
        self.events_for(change, None::<&GeometrySnapshot>)
    }

    /// Flip the logical activation.
    pub fn toggle_active<G: GeometrySource + ?Sized>(
        &mut self,
        geometry: &G,
    ) -> Vec<PopoverEvent> {
        let active = !self.state.is_active();
        self.set_active(active, geometry)
    }

    /// Set the logical activation.
    pub fn set_active<G: GeometrySource + ?Sized>(
        &mut self,
        active: bool,
        geometry: &G,
    ) -> Vec<PopoverEvent> {
        let change = self.state.set_active(active);
        self.events_for(change, Some(geometry))
    }

    /// Hand back a transition's completion token.
    ///
    /// Stale tokens fail with [`PopoverError::StaleTransition`] and change nothing.
    pub fn complete_transition<G: GeometrySource + ?Sized>(
        &mut self,
        completion: Completion,
        geometry: &G,
    ) -> Result<Vec<PopoverEvent>, PopoverError> {
        let change = self.state.complete(completion)?;
        Ok(self.events_for(change, Some(geometry)))
    }

    /// Change the preferred side, re-resolving if visible and the side changed.
    pub fn set_preferred<G: GeometrySource + ?Sized>(
        &mut self,
        side: Side,
        geometry: &G,
    ) -> Vec<PopoverEvent> {
        if self.config.preferred == side {
            return Vec::new();
        }
        self.config.preferred = side;
        self.reposition(geometry)
    }

    /// Change the preferred side by name.
    ///
    /// Invalid names fail with [`PopoverError::InvalidConfiguration`] and leave
    /// the configuration untouched.
    pub fn set_position<G: GeometrySource + ?Sized>(
        &mut self,
        position: &str,
        geometry: &G,
    ) -> Result<Vec<PopoverEvent>, PopoverError> {
        let side = position.parse()?;
        Ok(self.set_preferred(side, geometry))
    }

    /// Change parent alignment. Takes effect on the next pass.
    pub fn set_align_to_parent(&mut self, align: bool) {
        self.config.align_to_parent = align;
    }

    /// Handle a viewport resize.
    pub fn viewport_resized<G: GeometrySource + ?Sized>(
        &mut self,
        geometry: &G,
    ) -> Vec<PopoverEvent> {
        #[cfg(feature = "tracing")]
        tracing::trace!(visible = self.is_visually_active(), "viewport resized");
        self.reposition(geometry)
    }

    /// Run a resolution pass if visually active.
    ///
    /// Call this when the anchor moves or changes size.
    pub fn reposition<G: GeometrySource + ?Sized>(
        &mut self,
        geometry: &G,
    ) -> Vec<PopoverEvent> {
        if !self.state.is_visually_active() {
            return Vec::new();
        }
        vec![PopoverEvent::Placed(self.resolve_now(geometry))]
    }

    fn resolve_now<G: GeometrySource + ?Sized>(&mut self, geometry: &G) -> ResolvedPlacement {
        let snapshot = geometry.snapshot();
        let placement = resolve(
            self.config.preferred,
            &snapshot,
            self.config.align_to_parent,
        );
        self.placement = Some(placement);
        placement
    }

    fn events_for<G: GeometrySource + ?Sized>(
        &mut self,
        change: Option<VisualChange>,
        geometry: Option<&G>,
    ) -> Vec<PopoverEvent> {
        let mut events = Vec::new();
        match change {
            Some(VisualChange::Shown) => {
                events.push(PopoverEvent::VisualChanged(true));
                if let Some(geometry) = geometry {
                    let placement = self.resolve_now(geometry);
                    events.push(PopoverEvent::Placed(placement));
                }
            }
            Some(VisualChange::Hidden) => {
                self.placement = None;
                events.push(PopoverEvent::VisualChanged(false));
            }
            None => {}
        }
        events
    }
}
