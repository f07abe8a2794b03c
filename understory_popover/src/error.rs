// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by configuration, geometry capture, and transitions.

use alloc::string::String;
use core::fmt;

use crate::types::Dimension;

/// Errors produced by this crate.
///
/// Configuration errors surface as soon as a value is parsed, never at
/// resolution time. A missing anchor is not an error: the geometry builder
/// substitutes a zero rectangle instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopoverError {
    /// A position string is not one of the eight recognized sides.
    InvalidConfiguration {
        /// The rejected input.
        value: String,
    },
    /// A required size was not supplied when building a geometry snapshot.
    MissingGeometry(Dimension),
    /// A transition completion arrived for a transition that has since been
    /// superseded (or was already completed).
    StaleTransition,
}

impl fmt::Display for PopoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { value } => write!(
                f,
                "invalid position {value:?}: expected one of top, right, bottom, left, \
                 top-left, top-right, bottom-left, bottom-right"
            ),
            Self::MissingGeometry(dimension) => {
                write!(f, "missing {dimension} geometry")
            }
            Self::StaleTransition => f.write_str("transition completion is stale"),
        }
    }
}

impl core::error::Error for PopoverError {}
