// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matrix stack with auto-vivifying top frame.
//!
//! A [`MatrixStack`] is an ordered list of [`Transform3d`] frames. The last
//! frame is *current*: transformation operations read-modify-write it, and
//! pushing a frame starts a new nested context that can be popped to restore
//! the previous one, much like `save`/`restore` on a 2-D canvas.
//!
//! Accessing the current frame of an empty stack first pushes an identity
//! frame, so callers never observe a missing top. The cumulative queries are
//! pure and do not auto-vivify.

use alloc::vec::Vec;

use crate::axes::Axes;
use crate::transform::Transform3d;

/// An ordered stack of transform frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatrixStack {
    frames: Vec<Transform3d>,
}

impl MatrixStack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Pushes `matrix` as the new current frame.
    pub fn push(&mut self, matrix: Transform3d) {
        self.frames.push(matrix);
    }

    /// Pushes a fresh identity frame.
    pub fn push_identity(&mut self) {
        self.frames.push(Transform3d::IDENTITY);
    }

    /// Removes and returns the current frame.
    ///
    /// Returns `None` and leaves the stack empty if it was already empty.
    pub fn pop(&mut self) -> Option<Transform3d> {
        self.frames.pop()
    }

    /// Returns the current frame, pushing an identity frame first if the
    /// stack is empty.
    pub fn current(&mut self) -> Transform3d {
        *self.current_mut()
    }

    /// Returns a mutable reference to the current frame, pushing an identity
    /// frame first if the stack is empty.
    pub fn current_mut(&mut self) -> &mut Transform3d {
        if self.frames.is_empty() {
            self.push_identity();
        }
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Replaces the current frame, pushing an identity frame first if the
    /// stack is empty.
    pub fn set_current(&mut self, matrix: Transform3d) {
        *self.current_mut() = matrix;
    }

    /// Returns the left-to-right product of every frame.
    ///
    /// Frame 0 is multiplied by frame 1, that result by frame 2, and so on,
    /// so the innermost (most recently pushed) frame is applied to a point
    /// first. An empty stack yields the identity without being modified.
    #[must_use]
    pub fn cumulative(&self) -> Transform3d {
        self.frames
            .iter()
            .copied()
            .reduce(|acc, frame| acc * frame)
            .unwrap_or(Transform3d::IDENTITY)
    }

    /// Translation components of [`cumulative`](Self::cumulative).
    #[must_use]
    pub fn cumulative_translation(&self) -> Axes {
        self.cumulative().translation()
    }

    /// Diagonal scale components of [`cumulative`](Self::cumulative).
    #[must_use]
    pub fn cumulative_scale(&self) -> Axes {
        self.cumulative().scale_factors()
    }

    /// Returns the frames bottom to top.
    #[must_use]
    pub fn frames(&self) -> &[Transform3d] {
        &self.frames
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the stack has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Removes every frame.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
