//! Companding curve validation against tabulated reference values.
//!
//! # Reference Documents
//!
//! - IEC 61966-2-1:1999 (sRGB)
//! - CIE 15:2004 (L*a*b*)

use approx::assert_abs_diff_eq;
use tint_transfer::{cie, srgb};

// ============================================================================
// sRGB EOTF Reference Values
// ============================================================================
// (8-bit code value, linear light)
// Codes 0..=10 sit on the linear segment (10/255 = 0.0392 < 0.04045).

const SRGB_REFERENCE: &[(u8, f64)] = &[
    (0, 0.0),
    (1, 0.000303527),
    (10, 0.003035270),
    (11, 0.003346536),
    (50, 0.031896033),
    (64, 0.051269458),
    (128, 0.215860500),
    (188, 0.502886458),
    (200, 0.577580440),
    (255, 1.0),
];

#[test]
fn srgb_eotf_matches_reference() {
    for &(code, linear) in SRGB_REFERENCE {
        let got = srgb::eotf(code as f64 / 255.0);
        assert_abs_diff_eq!(got, linear, epsilon = 1e-8);
    }
}

#[test]
fn srgb_oetf_inverts_reference() {
    for &(code, linear) in SRGB_REFERENCE {
        let got = srgb::oetf(linear) * 255.0;
        assert_abs_diff_eq!(got, code as f64, epsilon = 1e-5);
    }
}

#[test]
fn srgb_monotonic() {
    let mut prev = srgb::eotf(0.0);
    for i in 1..=1000 {
        let cur = srgb::eotf(i as f64 / 1000.0);
        assert!(cur > prev, "eotf not increasing at {}", i);
        prev = cur;
    }
}

// ============================================================================
// CIE f(t) Reference Values
// ============================================================================

const CIE_REFERENCE: &[(f64, f64)] = &[
    (0.0, 0.137931034),   // 16/116
    (0.001, 0.145718034), // linear segment
    (0.008856, 0.206892706),
    (0.01, 0.215443469),
    (0.18, 0.564621617),
    (0.5, 0.793700526),
    (1.0, 1.0),
];

#[test]
fn cie_f_matches_reference() {
    for &(t, expected) in CIE_REFERENCE {
        assert_abs_diff_eq!(cie::f(t), expected, epsilon = 1e-8);
    }
}

#[test]
fn cie_f_inv_inverts_reference() {
    for &(t, v) in CIE_REFERENCE {
        // The threshold value itself is excluded: the two segments do not
        // meet exactly there with the rounded constants.
        if t == cie::EPSILON {
            continue;
        }
        assert_abs_diff_eq!(cie::f_inv(v), t, epsilon = 1e-7);
    }
}
