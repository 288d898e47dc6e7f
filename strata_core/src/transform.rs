// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-major 4×4 transform with immutable-style builder operations.
//!
//! [`Transform3d`] is the value type stored in each
//! [`MatrixStack`](crate::stack::MatrixStack) frame. Every operation returns a
//! new matrix; nothing mutates in place from the stack's point of view.
//!
//! Composition follows the CSS / `DOMMatrix` convention: `a.multiply(b)` is
//! `a · b`, so `b` is applied to a point first and `a` composes on top.
//! [`rotate`](Transform3d::rotate), [`scale`](Transform3d::scale) and
//! [`translate`](Transform3d::translate) post-multiply, exactly like their
//! `DOMMatrix` counterparts.
//!
//! The [`Display`](core::fmt::Display) implementation produces a CSS
//! `transform` value: `matrix(a, b, c, d, e, f)` for 2-D matrices and
//! `matrix3d(...)` otherwise.

use core::fmt;
use core::ops::Mul;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use kurbo::Affine;

use crate::axes::Axes;

/// A column-major 4×4 affine transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column* of the matrix. In CSS naming, `mCR`
/// (column `C`, row `R`, both 1-based) lives at `cols[C - 1][R - 1]`, so the
/// translation components `m41`, `m42`, `m43` are `cols[3][0..3]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    /// Four columns, each a 4-element array `[x, y, z, w]`.
    pub cols: [[f64; 4]; 4],
}

impl Transform3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a transform from four column arrays.
    #[inline]
    #[must_use]
    pub const fn from_cols(col0: [f64; 4], col1: [f64; 4], col2: [f64; 4], col3: [f64; 4]) -> Self {
        Self {
            cols: [col0, col1, col2, col3],
        }
    }

    /// Returns column `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub const fn col(self, i: usize) -> [f64; 4] {
        self.cols[i]
    }

    /// Creates a pure translation transform.
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, z, 1.0],
            ],
        }
    }

    /// Creates a non-uniform scale transform.
    #[inline]
    #[must_use]
    pub const fn from_scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            cols: [
                [sx, 0.0, 0.0, 0.0],
                [0.0, sy, 0.0, 0.0],
                [0.0, 0.0, sz, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a rotation around the X axis (radians).
    #[inline]
    #[must_use]
    pub fn from_rotation_x(radians: f64) -> Self {
        let (s, c) = sin_cos(radians);
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, c, s, 0.0],
                [0.0, -s, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a rotation around the Y axis (radians).
    #[inline]
    #[must_use]
    pub fn from_rotation_y(radians: f64) -> Self {
        let (s, c) = sin_cos(radians);
        Self {
            cols: [
                [c, 0.0, -s, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [s, 0.0, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a rotation around the Z axis (radians).
    #[inline]
    #[must_use]
    pub fn from_rotation_z(radians: f64) -> Self {
        let (s, c) = sin_cos(radians);
        Self {
            cols: [
                [c, s, 0.0, 0.0],
                [-s, c, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a 3-D transform from a 2-D affine.
    #[must_use]
    pub fn from_affine(affine: Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self {
            cols: [
                [a, b, 0.0, 0.0],
                [c, d, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [e, f, 0.0, 1.0],
            ],
        }
    }

    /// Returns the equivalent 2-D affine, or `None` if this transform has any
    /// 3-D component.
    #[must_use]
    pub fn to_affine(&self) -> Option<Affine> {
        if !self.is_2d() {
            return None;
        }
        let c = &self.cols;
        Some(Affine::new([
            c[0][0], c[0][1], c[1][0], c[1][1], c[3][0], c[3][1],
        ]))
    }

    /// Whether this matrix only uses the six 2-D affine components.
    ///
    /// Mirrors `DOMMatrix.is2D`: `m13`, `m14`, `m23`, `m24`, `m31`, `m32`,
    /// `m34`, `m43` are zero and `m33`, `m44` are one.
    #[must_use]
    pub fn is_2d(&self) -> bool {
        let c = &self.cols;
        c[0][2] == 0.0
            && c[0][3] == 0.0
            && c[1][2] == 0.0
            && c[1][3] == 0.0
            && c[2][0] == 0.0
            && c[2][1] == 0.0
            && c[2][2] == 1.0
            && c[2][3] == 0.0
            && c[3][2] == 0.0
            && c[3][3] == 1.0
    }

    /// Returns `self · other`.
    #[inline]
    #[must_use]
    pub fn multiply(self, other: Self) -> Self {
        self * other
    }

    /// Post-multiplies a translation: `self · T(x, y, z)`.
    #[inline]
    #[must_use]
    pub fn translate(self, x: f64, y: f64, z: f64) -> Self {
        self * Self::from_translation(x, y, z)
    }

    /// Post-multiplies a scale: `self · S(x, y, z)`.
    #[inline]
    #[must_use]
    pub fn scale(self, x: f64, y: f64, z: f64) -> Self {
        self * Self::from_scale(x, y, z)
    }

    /// Post-multiplies rotations given in degrees: `self · Rz · Ry · Rx`.
    ///
    /// The X rotation is applied to a point first, then Y, then Z, matching
    /// `DOMMatrix.rotate(rotX, rotY, rotZ)`.
    #[must_use]
    pub fn rotate(self, x_degrees: f64, y_degrees: f64, z_degrees: f64) -> Self {
        self * Self::from_rotation_z(z_degrees.to_radians())
            * Self::from_rotation_y(y_degrees.to_radians())
            * Self::from_rotation_x(x_degrees.to_radians())
    }

    /// Translation components `(m41, m42, m43)`.
    #[inline]
    #[must_use]
    pub const fn translation(&self) -> Axes {
        Axes::new(self.cols[3][0], self.cols[3][1], self.cols[3][2])
    }

    /// Diagonal scale components `(m11, m22, m33)`.
    ///
    /// These are the raw diagonal entries; a rotated matrix reports the
    /// rotated diagonal, not a decomposed scale.
    #[inline]
    #[must_use]
    pub const fn scale_factors(&self) -> Axes {
        Axes::new(self.cols[0][0], self.cols[1][1], self.cols[2][2])
    }

    /// Is this transform [finite]?
    ///
    /// [finite]: f64::is_finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|v| v.is_finite())
    }

    /// Does this transform contain a [NaN] component?
    ///
    /// [NaN]: f64::is_nan
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.cols.iter().flatten().any(|v| v.is_nan())
    }
}

#[inline]
fn sin_cos(radians: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    let (s, c) = radians.sin_cos();
    #[cfg(not(feature = "std"))]
    let (s, c) = (radians.sin(), radians.cos());
    (s, c)
}

impl Default for Transform3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for Transform3d {
    #[inline]
    fn from(affine: Affine) -> Self {
        Self::from_affine(affine)
    }
}

impl Mul for Transform3d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 4]; 4];
        let mut j = 0;
        while j < 4 {
            let mut i = 0;
            while i < 4 {
                out[j][i] =
                    a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
                i += 1;
            }
            j += 1;
        }
        Self { cols: out }
    }
}

impl fmt::Display for Transform3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(affine) = self.to_affine() {
            let [a, b, c, d, e, g] = affine.as_coeffs();
            return write!(f, "matrix({a}, {b}, {c}, {d}, {e}, {g})");
        }
        f.write_str("matrix3d(")?;
        for (i, v) in self.cols.iter().flatten().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn approx_eq(a: &Transform3d, b: &Transform3d) -> bool {
        a.cols
            .iter()
            .flatten()
            .zip(b.cols.iter().flatten())
            .all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform3d::default(), Transform3d::IDENTITY);
    }

    #[test]
    fn identity_multiply() {
        let t = Transform3d::from_translation(1.0, 2.0, 3.0);
        assert_eq!(Transform3d::IDENTITY.multiply(t), t);
        assert_eq!(t.multiply(Transform3d::IDENTITY), t);
    }

    #[test]
    fn translate_accumulates() {
        let t = Transform3d::IDENTITY
            .translate(1.0, 0.0, 0.0)
            .translate(0.0, 2.0, 0.0);
        assert_eq!(t.col(3), [1.0, 2.0, 0.0, 1.0]);
        assert_eq!(t.translation(), Axes::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn translate_then_scale_keeps_offset() {
        // Post-multiplying a scale leaves the translation column untouched.
        let t = Transform3d::IDENTITY
            .translate(10.0, 0.0, 0.0)
            .scale(2.0, 2.0, 2.0);
        assert_eq!(t.translation(), Axes::new(10.0, 0.0, 0.0));
        assert_eq!(t.scale_factors(), Axes::splat(2.0));
    }

    #[test]
    fn scale_then_translate_scales_offset() {
        let t = Transform3d::IDENTITY
            .scale(2.0, 2.0, 2.0)
            .translate(10.0, 0.0, 0.0);
        assert_eq!(t.translation(), Axes::new(20.0, 0.0, 0.0));
    }

    #[test]
    fn multiply_is_not_commutative() {
        let a = Transform3d::from_translation(5.0, 0.0, 0.0);
        let b = Transform3d::from_scale(3.0, 3.0, 3.0);
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn rotate_z_ninety_degrees() {
        let r = Transform3d::IDENTITY.rotate(0.0, 0.0, 90.0);
        let eps = 1e-9;
        assert!(r.col(0)[0].abs() < eps, "cos(90) should be zero");
        assert!((r.col(0)[1] - 1.0).abs() < eps, "sin(90) should be one");
        assert!((r.col(1)[0] + 1.0).abs() < eps, "-sin(90) should be -1");
    }

    #[test]
    fn rotate_order_is_z_then_y_then_x() {
        let r = Transform3d::IDENTITY.rotate(30.0, 45.0, 60.0);
        let expected = Transform3d::from_rotation_z(60.0_f64.to_radians())
            * Transform3d::from_rotation_y(45.0_f64.to_radians())
            * Transform3d::from_rotation_x(30.0_f64.to_radians());
        assert!(approx_eq(&r, &expected), "rotation order mismatch: {r:?}");
    }

    #[test]
    fn full_turn_is_identity() {
        let r = Transform3d::IDENTITY.rotate(360.0, 360.0, 360.0);
        assert!(approx_eq(&r, &Transform3d::IDENTITY), "got {r:?}");
    }

    #[test]
    fn affine_round_trip() {
        let affine = Affine::new([2.0, 0.5, -0.5, 2.0, 7.0, 9.0]);
        let t = Transform3d::from_affine(affine);
        assert!(t.is_2d());
        assert_eq!(t.to_affine(), Some(affine));
    }

    #[test]
    fn z_translation_is_not_2d() {
        let t = Transform3d::from_translation(0.0, 0.0, 1.0);
        assert!(!t.is_2d());
        assert_eq!(t.to_affine(), None);
    }

    #[test]
    fn display_2d_uses_matrix() {
        let t = Transform3d::from_translation(10.0, 20.0, 0.0);
        assert_eq!(t.to_string(), "matrix(1, 0, 0, 1, 10, 20)");
    }

    #[test]
    fn display_3d_uses_matrix3d() {
        let t = Transform3d::from_scale(2.0, 2.0, 2.0).translate(10.0, 0.0, 0.0);
        assert_eq!(
            t.to_string(),
            "matrix3d(2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 20, 0, 0, 1)"
        );
    }

    #[test]
    fn identity_is_finite() {
        assert!(Transform3d::IDENTITY.is_finite());
        assert!(!Transform3d::IDENTITY.is_nan());
    }

    #[test]
    fn nan_axes_propagate() {
        let t = Transform3d::IDENTITY.translate(f64::NAN, 0.0, 0.0);
        assert!(t.is_nan());
        assert!(!t.is_finite());
    }

    #[test]
    fn infinity_detected() {
        let mut t = Transform3d::IDENTITY;
        t.cols[0][3] = f64::INFINITY;
        assert!(!t.is_finite());
        assert!(!t.is_nan());
    }
}
