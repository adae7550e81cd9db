//! 3x3 matrix type for color transformations.
//!
//! [`Mat3`] is used for the RGB-to-XYZ conversion and its inverse. The
//! product is computed by [`glam::DMat3`].
//!
//! # Convention
//!
//! Matrices are written in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! glam stores columns, so [`Mat3::from_rows`] transposes on construction.

use std::ops::Mul;

use glam::{DMat3, DVec3};

use crate::Vec3;

/// A 3x3 matrix for color transformations.
///
/// # Example
///
/// ```rust
/// use tint_math::{Mat3, Vec3};
///
/// let swap = Mat3::from_rows([
///     [0.0, 1.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [0.0, 0.0, 2.0],
/// ]);
/// assert_eq!(swap * Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 1.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3(DMat3);

impl Mat3 {
    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(m: [[f64; 3]; 3]) -> Self {
        Self(DMat3::from_cols(
            DVec3::new(m[0][0], m[1][0], m[2][0]),
            DVec3::new(m[0][1], m[1][1], m[2][1]),
            DVec3::new(m[0][2], m[1][2], m[2][2]),
        ))
    }

    /// Transforms a column vector.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::from_glam(self.0 * v.to_glam())
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}
