// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical vs. visual activation with optional transitions.
//!
//! ## Overview
//!
//! [`ActiveState`] tracks two flags:
//!
//! - *logical*: what was requested (`activate`, `deactivate`, `toggle_active`),
//! - *visual*: what the renderer should currently show.
//!
//! With a synchronous mechanism such as [`NoTransition`] the visual flag
//! follows the logical flag immediately. Otherwise every logical change calls
//! [`Transition::begin`] with the target phase and a [`Completion`] token; the
//! visual flag only changes once that token is handed back to
//! [`ActiveState::complete`].
//!
//! ## Superseded transitions
//!
//! Each transition gets a fresh generation. Changing the logical flag while a
//! transition is pending supersedes it, and its token is then rejected with
//! [`PopoverError::StaleTransition`] without touching the state.
//!
//! ```
//! use understory_popover::active::{
//!     ActiveState, Completion, Transition, TransitionPhase, VisualChange,
//! };
//!
//! #[derive(Debug, Default)]
//! struct Queue(Vec<Completion>);
//!
//! impl Transition for Queue {
//!     fn begin(&mut self, _phase: TransitionPhase, completion: Completion) {
//!         self.0.push(completion);
//!     }
//! }
//!
//! let mut state = ActiveState::with_transition(false, Queue::default());
//! assert_eq!(state.activate(), None);
//! assert!(state.is_active() && !state.is_visually_active());
//!
//! let done = state.transition_mut().0.pop().unwrap();
//! assert_eq!(state.complete(done), Ok(Some(VisualChange::Shown)));
//! assert!(state.is_visually_active());
//! ```

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::PopoverError;

static NEXT_OWNER: AtomicUsize = AtomicUsize::new(0);

fn next_owner() -> usize {
    NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
}

/// Target phase announced to a [`Transition`] mechanism.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    /// Moving toward visually active.
    Activating,
    /// Moving toward visually inactive.
    Deactivating,
}

impl TransitionPhase {
    /// State name for the phase (`"activating"` or `"deactivating"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Activating => "activating",
            Self::Deactivating => "deactivating",
        }
    }
}

/// Combined logical/visual state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActivationPhase {
    /// Logically and visually inactive.
    Inactive,
    /// Logically active, still visually inactive.
    Activating,
    /// Logically and visually active.
    Active,
    /// Logically inactive, still visually active.
    Deactivating,
}

/// Change of the visual flag, reported by every mutating call on [`ActiveState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisualChange {
    /// Visual flag became `true`.
    Shown,
    /// Visual flag became `false`.
    Hidden,
}

impl VisualChange {
    /// The new value of the visual flag.
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// Token identifying one pending transition.
///
/// Handed to [`Transition::begin`]; pass it back to
/// [`ActiveState::complete`] when the transition has finished. A token is
/// only accepted by the state that issued it (or a clone of that state).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Completion {
    owner: usize,
    generation: u64,
    visual: bool,
}

impl Completion {
    /// Phase this completion finishes.
    pub const fn phase(self) -> TransitionPhase {
        if self.visual {
            TransitionPhase::Activating
        } else {
            TransitionPhase::Deactivating
        }
    }

    /// Generation of the transition this token belongs to.
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// An externally driven transition (for example an enter/exit animation).
///
/// If an asynchronous mechanism never hands its completion back, the visual
/// flag stays diverged from the logical flag.
pub trait Transition {
    /// Whether visual changes apply immediately. [`Transition::begin`] is
    /// never called on a synchronous mechanism.
    const SYNCHRONOUS: bool = false;

    /// Start a transition toward `phase`.
    fn begin(&mut self, phase: TransitionPhase, completion: Completion);
}

/// Synchronous mechanism: the visual flag follows the logical flag at once.
///
/// Used as the default type parameter of [`ActiveState`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoTransition;

impl Transition for NoTransition {
    const SYNCHRONOUS: bool = true;

    #[inline]
    fn begin(&mut self, _phase: TransitionPhase, _completion: Completion) {}
}

/// Logical/visual activation state of one popover.
#[derive(Clone, Debug)]
pub struct ActiveState<T = NoTransition> {
    logical: bool,
    visual: bool,
    transition: T,
    owner: usize,
    generation: u64,
    pending: Option<Completion>,
}

impl ActiveState {
    /// A state without a transition mechanism. Visual starts equal to `active`.
    pub fn new(active: bool) -> Self {
        Self::with_transition(active, NoTransition)
    }
}

impl Default for ActiveState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<T: Transition> ActiveState<T> {
    /// A state that routes every logical change through `transition`, unless
    /// it is [synchronous](Transition::SYNCHRONOUS). Visual starts equal to
    /// `active`.
    pub fn with_transition(active: bool, transition: T) -> Self {
        Self {
            logical: active,
            visual: active,
            transition,
            owner: next_owner(),
            generation: 0,
            pending: None,
        }
    }

    /// Logical (requested) activation.
    pub fn is_active(&self) -> bool {
        self.logical
    }

    /// Visual activation, the value the renderer should reflect.
    pub fn is_visually_active(&self) -> bool {
        self.visual
    }

    /// True while a transition is pending completion.
    pub fn in_transition(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending transition's token, if any.
    pub fn pending(&self) -> Option<Completion> {
        self.pending
    }

    /// Combined phase.
    pub fn phase(&self) -> ActivationPhase {
        match (self.logical, self.visual) {
            (false, false) => ActivationPhase::Inactive,
            (true, false) => ActivationPhase::Activating,
            (true, true) => ActivationPhase::Active,
            (false, true) => ActivationPhase::Deactivating,
        }
    }

    /// The transition mechanism.
    pub fn transition(&self) -> &T {
        &self.transition
    }

    /// Mutable access to the transition mechanism.
    pub fn transition_mut(&mut self) -> &mut T {
        &mut self.transition
    }

    /// Request activation.
    pub fn activate(&mut self) -> Option<VisualChange> {
        self.set_active(true)
    }

    /// Request deactivation.
    pub fn deactivate(&mut self) -> Option<VisualChange> {
        self.set_active(false)
    }

    /// Activate when inactive, deactivate when active (by logical state).
    pub fn toggle_active(&mut self) -> Option<VisualChange> {
        self.set_active(!self.logical)
    }

    /// Set the logical flag.
    ///
    /// Returns the visual change applied synchronously, which only happens
    /// with a synchronous mechanism. Setting the current value is a no-op.
    pub fn set_active(&mut self, active: bool) -> Option<VisualChange> {
        if self.logical == active {
            return None;
        }
        self.logical = active;
        if T::SYNCHRONOUS {
            return self.set_visual(active);
        }

        self.generation += 1;
        let completion = Completion {
            owner: self.owner,
            generation: self.generation,
            visual: active,
        };
        #[cfg(feature = "tracing")]
        if let Some(superseded) = self.pending {
            tracing::debug!(
                superseded = superseded.generation,
                generation = completion.generation,
                "pending transition superseded"
            );
        }
        self.pending = Some(completion);
        self.transition.begin(completion.phase(), completion);
        None
    }

    /// Finish the transition identified by `completion`.
    ///
    /// Returns [`PopoverError::StaleTransition`] if the token does not belong
    /// to the currently pending transition of this state.
    pub fn complete(
        &mut self,
        completion: Completion,
    ) -> Result<Option<VisualChange>, PopoverError> {
        if self.pending != Some(completion) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                generation = completion.generation,
                current = self.generation,
                "ignoring stale transition completion"
            );
            return Err(PopoverError::StaleTransition);
        }
        self.pending = None;
        Ok(self.set_visual(completion.visual))
    }

    fn set_visual(&mut self, visual: bool) -> Option<VisualChange> {
        if self.visual == visual {
            return None;
        }
        self.visual = visual;
        #[cfg(feature = "tracing")]
        tracing::trace!(visual, "visual activation changed");
        Some(if visual {
            VisualChange::Shown
        } else {
            VisualChange::Hidden
        })
    }
}
