// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for commits.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! commit protocol calls. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::target::ListenerId;
use crate::transform::Transform3d;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How a commit configured the transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionMode {
    /// The transition was cleared for this commit.
    Skipped,
    /// The transition was configured with the persisted duration.
    Animated {
        /// Duration in seconds, if set.
        duration: Option<f64>,
    },
}

/// How a commit handled its completion callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Completion {
    /// No callback was supplied.
    None,
    /// The callback ran before the commit returned.
    Immediate,
    /// The callback waits on the target's transition-end signal.
    Deferred(ListenerId),
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once per commit, after all style writes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CommitEvent {
    /// Monotonic commit counter of the issuing stack, starting at 0.
    pub commit_index: u64,
    /// Number of frames on the matrix stack.
    pub depth: usize,
    /// Cumulative transform written to the target.
    pub transform: Transform3d,
    /// Opacity written to the target, if any.
    pub opacity: Option<f32>,
    /// Transition configuration.
    pub transition: TransitionMode,
    /// Completion handling.
    pub completion: Completion,
}

/// Emitted when a commit removes an earlier commit's pending listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SupersedeEvent {
    /// Index of the commit doing the removal.
    pub commit_index: u64,
    /// The removed listener.
    pub listener: ListenerId,
    /// Whether the target still had the listener pending.
    pub was_pending: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the commit protocol.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after every commit.
    fn on_commit(&mut self, e: &CommitEvent) {
        _ = e;
    }

    /// Called when a pending listener is superseded.
    fn on_supersede(&mut self, e: &SupersedeEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`CommitEvent`].
    #[inline]
    pub fn commit(&mut self, e: &CommitEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_commit(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SupersedeEvent`].
    #[inline]
    pub fn supersede(&mut self, e: &SupersedeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_supersede(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
