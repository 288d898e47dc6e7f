// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chaining surface for element wrappers.
//!
//! A type that owns a [`TransformStack`] and a [`RenderTarget`] implements
//! [`Transformable`] by exposing the two as a split borrow; every
//! transformation, setter and commit then comes for free as a chaining
//! method:
//!
//! ```
//! use strata_core::headless::HeadlessTarget;
//! use strata_core::transformable::{Transformable, Transformed};
//!
//! let mut el = Transformed::new(HeadlessTarget::new());
//! el.translate((10.0, 0.0, 0.0)).scale(2.0).set_opacity(0.5).commit();
//! assert_eq!(el.target().style("opacity").as_deref(), Some("0.5"));
//! ```

use crate::axes::Axes;
use crate::compositor::{CommitOptions, TransformStack};
use crate::options::TransitionOptions;
use crate::target::RenderTarget;
use crate::timing::TimingFunction;
use crate::transform::Transform3d;

/// An element that owns a transform stack and the target it commits to.
pub trait Transformable {
    /// The render target commits are written to.
    type Target: RenderTarget + ?Sized;

    /// The element's transform stack.
    fn transform_stack(&self) -> &TransformStack;

    /// Borrows the stack and the target at the same time.
    fn transform_parts(&mut self) -> (&mut TransformStack, &mut Self::Target);

    /// Pushes `matrix` as the new current frame.
    fn push_matrix(&mut self, matrix: Transform3d) -> &mut Self {
        self.transform_parts().0.push_matrix(matrix);
        self
    }

    /// Pushes an identity frame.
    fn push_identity(&mut self) -> &mut Self {
        self.transform_parts().0.push_identity();
        self
    }

    /// Pops the current frame.
    fn pop_matrix(&mut self) -> &mut Self {
        self.transform_parts().0.pop_matrix();
        self
    }

    /// Rotates the current frame; angles in degrees.
    fn rotate(&mut self, degrees: impl Into<Axes>) -> &mut Self {
        self.transform_parts().0.rotate(degrees);
        self
    }

    /// Scales the current frame.
    fn scale(&mut self, factors: impl Into<Axes>) -> &mut Self {
        self.transform_parts().0.scale(factors);
        self
    }

    /// Translates the current frame.
    fn translate(&mut self, offset: impl Into<Axes>) -> &mut Self {
        self.transform_parts().0.translate(offset);
        self
    }

    /// Sets the transition duration in seconds.
    fn set_duration(&mut self, seconds: f64) -> &mut Self {
        self.transform_parts().0.set_duration(seconds);
        self
    }

    /// Sets the transition timing function.
    fn set_timing(&mut self, timing: TimingFunction) -> &mut Self {
        self.transform_parts().0.set_timing(timing);
        self
    }

    /// Sets the opacity written by subsequent commits.
    fn set_opacity(&mut self, opacity: f32) -> &mut Self {
        self.transform_parts().0.set_opacity(opacity);
        self
    }

    /// Commits with no one-shot options.
    fn commit(&mut self) -> &mut Self {
        self.commit_with(CommitOptions::new())
    }

    /// Commits with the given one-shot options.
    fn commit_with(&mut self, options: CommitOptions) -> &mut Self {
        let (stack, target) = self.transform_parts();
        stack.commit(target, options);
        self
    }

    /// Product of every frame on the stack.
    fn cumulative_transform(&self) -> Transform3d {
        self.transform_stack().cumulative_transform()
    }
}

/// A render target paired with its own transform stack.
#[derive(Debug)]
pub struct Transformed<T> {
    stack: TransformStack,
    target: T,
}

impl<T: RenderTarget> Transformed<T> {
    /// Wraps `target` with a fresh stack.
    pub fn new(target: T) -> Self {
        Self::with_options(target, TransitionOptions::default())
    }

    /// Wraps `target` with a stack initialized from `options`.
    pub fn with_options(target: T, options: TransitionOptions) -> Self {
        Self {
            stack: TransformStack::with_options(options),
            target,
        }
    }

    /// The wrapped target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access to the wrapped target.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Mutable access to the stack, for operations not mirrored on the trait.
    pub fn stack_mut(&mut self) -> &mut TransformStack {
        &mut self.stack
    }

    /// Unwraps into the stack and the target.
    pub fn into_parts(self) -> (TransformStack, T) {
        (self.stack, self.target)
    }
}

impl<T: RenderTarget> Transformable for Transformed<T> {
    type Target = T;

    fn transform_stack(&self) -> &TransformStack {
        &self.stack
    }

    fn transform_parts(&mut self) -> (&mut TransformStack, &mut T) {
        (&mut self.stack, &mut self.target)
    }
}
