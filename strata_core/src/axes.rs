// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis argument normalization.
//!
//! [`rotate`](crate::compositor::TransformStack::rotate),
//! [`scale`](crate::compositor::TransformStack::scale) and
//! [`translate`](crate::compositor::TransformStack::translate) take
//! `impl Into<Axes>`, which covers the accepted call shapes:
//!
//! - a single scalar applies to all three axes (`rotate(5.0)` is
//!   `{x: 5, y: 5, z: 5}`);
//! - a three-component tuple or array maps to `{x, y, z}` in order;
//! - an [`Axes`] value passes through unchanged.
//!
//! There is no two-component conversion. Runtime-sized input
//! goes through [`Axes::from_components`], which rejects any length other than
//! one or three.

use crate::error::AxesError;

/// An `{x, y, z}` triple.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Axes {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Axes {
    /// Creates an `Axes` from its three components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates an `Axes` with the same value on every axis.
    #[inline]
    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Normalizes a runtime-sized component list.
    ///
    /// One component is splatted, three are taken in order.
    ///
    /// # Errors
    ///
    /// Returns [`AxesError::Arity`] for any other length.
    pub fn from_components(components: &[f64]) -> Result<Self, AxesError> {
        match *components {
            [v] => Ok(Self::splat(v)),
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(AxesError::Arity(components.len())),
        }
    }

    /// Returns the components as an array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<f64> for Axes {
    #[inline]
    fn from(v: f64) -> Self {
        Self::splat(v)
    }
}

impl From<f32> for Axes {
    #[inline]
    fn from(v: f32) -> Self {
        Self::splat(f64::from(v))
    }
}

impl From<i32> for Axes {
    #[inline]
    fn from(v: i32) -> Self {
        Self::splat(f64::from(v))
    }
}

impl From<(f64, f64, f64)> for Axes {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 3]> for Axes {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}
