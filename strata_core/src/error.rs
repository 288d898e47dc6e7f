// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised at the configuration boundary.
//!
//! The compositor itself never fails: popping an empty stack is a no-op,
//! reading the current frame auto-vivifies, and non-finite axes flow into the
//! matrix unchanged. Only option parsing and runtime argument normalization
//! can reject input.

use alloc::string::String;

/// A runtime component list could not be normalized into [`Axes`].
///
/// [`Axes`]: crate::axes::Axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AxesError {
    /// Only one or three components are accepted.
    #[error("expected 1 or 3 axis components, got {0}")]
    Arity(usize),
}

/// A timing-function string could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid timing function: {input:?}")]
pub struct ParseTimingError {
    /// The rejected input.
    pub input: String,
}

/// An option update was rejected.
///
/// A rejected update leaves the persisted options untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    /// The key is not one of `duration`, `timing`, `opacity`, `overlap`.
    #[error("unknown option key: {0:?}")]
    UnknownKey(String),

    /// The value has the wrong shape for the key.
    #[error("invalid value for option {key:?}: expected {expected}")]
    InvalidValue {
        /// The option key.
        key: &'static str,
        /// Human-readable description of the accepted values.
        expected: &'static str,
    },

    /// The `timing` value is not a recognized timing function.
    #[error(transparent)]
    InvalidTiming(#[from] ParseTimingError),
}
