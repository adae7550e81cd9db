//! Conversion engine.
//!
//! Six pure functions between the four representations. None of them clamp:
//! out-of-domain input produces out-of-domain output, and range policy is
//! left to the [`sync`](crate::sync) coordinator.
//!
//! | Function | Rounds output |
//! |----------|---------------|
//! | [`rgb_to_cmyk`] | no |
//! | [`cmyk_to_rgb`] | yes, to integers |
//! | [`rgb_to_xyz`] | no |
//! | [`xyz_to_rgb`] | yes, to integers |
//! | [`xyz_to_lab`] | no |
//! | [`lab_to_xyz`] | no |
//!
//! # Scale
//!
//! XYZ is on the 0-100 scale on both sides: `rgb_to_xyz` multiplies the
//! linearized channels by 100 before the matrix, `xyz_to_rgb` divides the
//! matrix output by 100 before companding.
//!
//! # Example
//!
//! ```rust
//! use tint_color::convert::{rgb_to_xyz, xyz_to_lab};
//! use tint_core::Rgb;
//!
//! let lab = xyz_to_lab(rgb_to_xyz(Rgb::WHITE));
//! assert!((lab.l - 100.0).abs() < 0.01);
//! ```

use tint_core::{Cmyk, Lab, Rgb, Xyz};
use tint_math::Vec3;
use tint_primaries::SRGB;
use tint_transfer::{cie, srgb};

/// Rounds half-way cases toward positive infinity.
///
/// `-0.5` rounds to `0`, `2.5` to `3`. Derived channels keep the same
/// integer on either side of zero as a UI slider would show.
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// RGB -> CMYK.
///
/// Pure black takes the `k == 1` branch and yields `{0, 0, 0, 100}` with no
/// division by zero.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let c = 1.0 - rgb.r / 255.0;
    let m = 1.0 - rgb.g / 255.0;
    let y = 1.0 - rgb.b / 255.0;
    let k = c.min(m).min(y);

    let (c, m, y) = if k < 1.0 {
        let d = 1.0 - k;
        ((c - k) / d, (m - k) / d, (y - k) / d)
    } else {
        (0.0, 0.0, 0.0)
    };

    Cmyk::new(c * 100.0, m * 100.0, y * 100.0, k * 100.0)
}

/// CMYK -> RGB, rounded to integer channels.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let k = 1.0 - cmyk.k / 100.0;
    let channel = |v: f64| round_half_up(255.0 * (1.0 - v / 100.0) * k);
    Rgb::new(channel(cmyk.c), channel(cmyk.m), channel(cmyk.y))
}

/// RGB -> XYZ on the 0-100 scale.
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let linear = Vec3::from(rgb).map(|v| srgb::eotf(v / 255.0)) * 100.0;
    (SRGB.to_xyz * linear).into()
}

/// XYZ on the 0-100 scale -> RGB, rounded to integer channels.
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    let linear = SRGB.from_xyz * Vec3::from(xyz) / 100.0;
    linear.map(|v| round_half_up(srgb::oetf(v) * 255.0)).into()
}

/// XYZ -> Lab relative to the D65 reference white.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let white = SRGB.white;
    let fx = cie::f(xyz.x / white.x);
    let fy = cie::f(xyz.y / white.y);
    let fz = cie::f(xyz.z / white.z);

    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Lab -> XYZ relative to the D65 reference white.
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let white = SRGB.white;
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    Xyz::new(
        cie::f_inv(fx) * white.x,
        cie::f_inv(fy) * white.y,
        cie::f_inv(fz) * white.z,
    )
}
