//! # tint-primaries
//!
//! Fixed RGB<->XYZ matrices and the reference white used by the Lab
//! conversion.
//!
//! The matrices are the published sRGB (D65) coefficients, stored as
//! constants rather than derived from chromaticities so that every
//! conversion uses exactly the same seven-digit values.
//!
//! # Usage
//!
//! ```rust
//! use tint_primaries::{SRGB, D65};
//! use tint_math::Vec3;
//!
//! // Linear white on the 0-100 scale lands on the reference white.
//! let xyz = SRGB.to_xyz * Vec3::new(100.0, 100.0, 100.0);
//! assert!((xyz.x - D65.x).abs() < 0.01);
//! ```
//!
//! # Dependencies
//!
//! - [`tint-core`] - [`Xyz`] value type
//! - [`tint-math`] - [`Mat3`]
//!
//! # Used By
//!
//! - `tint-color` - RGB/XYZ and XYZ/Lab conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use tint_core::Xyz;
use tint_math::Mat3;

/// An RGB space given by its fixed XYZ matrices and white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbSpace {
    /// Linear RGB -> XYZ.
    pub to_xyz: Mat3,
    /// XYZ -> linear RGB.
    pub from_xyz: Mat3,
    /// Reference white on the 0-100 XYZ scale.
    pub white: Xyz,
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 reference white on the 0-100 scale (2 degree observer).
pub const D65: Xyz = Xyz::new(95.047, 100.000, 108.883);

// ============================================================================
// sRGB
// ============================================================================

/// sRGB linear RGB -> XYZ (D65).
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ (D65) -> sRGB linear RGB.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// sRGB / Rec.709 primaries with the D65 white point.
pub const SRGB: RgbSpace = RgbSpace {
    to_xyz: SRGB_TO_XYZ,
    from_xyz: XYZ_TO_SRGB,
    white: D65,
};
