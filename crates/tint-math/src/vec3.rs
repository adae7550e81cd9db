//! 3D vector type for color triplets.
//!
//! [`Vec3`] carries RGB or XYZ values through matrix transforms.

use std::ops::{Div, Mul};

use glam::DVec3;
use tint_core::{Rgb, Xyz};

/// A 3D vector for color triplets (RGB, XYZ).
///
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z.
///
/// # Example
///
/// ```rust
/// use tint_math::Vec3;
///
/// let v = Vec3::new(0.5, 0.25, 1.0).map(|c| c * 4.0);
/// assert_eq!(v, Vec3::new(2.0, 1.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ)
    pub x: f64,
    /// Y component (G for RGB, Y for XYZ)
    pub y: f64,
    /// Z component (B for RGB, Z for XYZ)
    pub z: f64,
}

impl Vec3 {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    #[inline]
    pub(crate) fn to_glam(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub(crate) fn from_glam(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.map(|v| v * rhs)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        self.map(|v| v / rhs)
    }
}

impl From<Rgb> for Vec3 {
    #[inline]
    fn from(c: Rgb) -> Self {
        Self::new(c.r, c.g, c.b)
    }
}

impl From<Vec3> for Rgb {
    #[inline]
    fn from(v: Vec3) -> Self {
        Rgb::new(v.x, v.y, v.z)
    }
}

impl From<Xyz> for Vec3 {
    #[inline]
    fn from(c: Xyz) -> Self {
        Self::new(c.x, c.y, c.z)
    }
}

impl From<Vec3> for Xyz {
    #[inline]
    fn from(v: Vec3) -> Self {
        Xyz::new(v.x, v.y, v.z)
    }
}
