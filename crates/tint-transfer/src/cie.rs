//! CIE L*a*b* companding function.
//!
//! Lab lightness and opponent axes are built from the cube root of the XYZ
//! ratio to the reference white. Near black the cube root is replaced with
//! a straight line so the slope stays finite.
//!
//! The constants are the classic rounded CIE 1976 values (`0.008856`,
//! `7.787`) rather than the exact rational forms (216/24389, 841/108).
//!
//! # Reference
//!
//! CIE 15:2004, section 8.2.1

/// Ratio threshold between the linear segment and the cube root.
pub const EPSILON: f64 = 0.008856;

/// Slope of the linear segment.
pub const KAPPA_SLOPE: f64 = 7.787;

/// Offset of the linear segment (16/116).
pub const OFFSET: f64 = 16.0 / 116.0;

/// Forward companding: XYZ ratio -> companded value.
///
/// # Formula
///
/// ```text
/// if t > 0.008856:
///     f = t^(1/3)
/// else:
///     f = 7.787 * t + 16/116
/// ```
///
/// # Example
///
/// ```rust
/// use tint_transfer::cie::f;
///
/// assert!((f(0.125) - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + OFFSET
    }
}

/// Inverse companding: companded value -> XYZ ratio.
///
/// The branch is chosen on the cube of the input, mirroring [`f`]'s
/// threshold on the ratio.
///
/// # Formula
///
/// ```text
/// if f^3 > 0.008856:
///     t = f^3
/// else:
///     t = (f - 16/116) / 7.787
/// ```
#[inline]
pub fn f_inv(v: f64) -> f64 {
    let cube = v * v * v;
    if cube > EPSILON {
        cube
    } else {
        (v - OFFSET) / KAPPA_SLOPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=200 {
            let t = i as f64 / 100.0;
            assert_abs_diff_eq!(f_inv(f(t)), t, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_black_and_white() {
        assert_abs_diff_eq!(f(0.0), OFFSET);
        assert_abs_diff_eq!(f(1.0), 1.0);
        assert_abs_diff_eq!(f_inv(OFFSET), 0.0);
    }

    #[test]
    fn test_negative_ratio_is_linear() {
        // Negative ratios stay on the linear segment and stay finite.
        let v = f(-0.5);
        assert!(v.is_finite());
        assert_abs_diff_eq!(f_inv(v), -0.5, epsilon = 1e-12);
    }
}
