//! Conversion engine properties over the nominal domains.

use approx::assert_abs_diff_eq;
use tint_color::convert::{
    cmyk_to_rgb, lab_to_xyz, rgb_to_cmyk, rgb_to_xyz, xyz_to_lab, xyz_to_rgb,
};
use tint_color::{Bounded, Cmyk, Lab, Rgb};

/// Channel samples: every 5th code value plus the top end.
fn rgb_samples() -> Vec<f64> {
    let mut v: Vec<f64> = (0..=255).step_by(5).map(f64::from).collect();
    v.extend([1.0, 254.0]);
    v
}

fn rgb_grid() -> impl Iterator<Item = Rgb> {
    let s = rgb_samples();
    let s2 = s.clone();
    let s3 = s.clone();
    s.into_iter().flat_map(move |r| {
        let s3 = s3.clone();
        s2.clone()
            .into_iter()
            .flat_map(move |g| s3.clone().into_iter().map(move |b| Rgb::new(r, g, b)))
    })
}

#[test]
fn rgb_to_cmyk_stays_in_domain() {
    for rgb in rgb_grid() {
        let cmyk = rgb_to_cmyk(rgb);
        assert!(cmyk.in_range(), "{rgb} -> {cmyk}");
        assert!((0.0..=100.0).contains(&cmyk.k));
    }
}

#[test]
fn rgb_to_cmyk_black_has_no_nan() {
    let cmyk = rgb_to_cmyk(Rgb::BLACK);
    assert_eq!(cmyk, Cmyk::new(0.0, 0.0, 0.0, 100.0));
}

#[test]
fn cmyk_to_rgb_gives_integers_in_domain() {
    let steps: Vec<f64> = (0..=100).step_by(5).map(f64::from).collect();
    for &c in &steps {
        for &m in &steps {
            for &y in &steps {
                for &k in &steps {
                    let rgb = cmyk_to_rgb(Cmyk::new(c, m, y, k));
                    assert!(rgb.in_range(), "{rgb}");
                    for v in rgb.to_array() {
                        assert_eq!(v, v.trunc());
                    }
                }
            }
        }
    }
    assert_eq!(cmyk_to_rgb(Cmyk::default()), Rgb::WHITE);
}

#[test]
fn rgb_xyz_roundtrip_within_one() {
    for rgb in rgb_grid() {
        let back = xyz_to_rgb(rgb_to_xyz(rgb));
        for (a, b) in rgb.to_array().into_iter().zip(back.to_array()) {
            assert!((a - b).abs() <= 1.0, "{rgb} -> {back}");
        }
    }
}

#[test]
fn rgb_xyz_roundtrip_single_channel_sweep() {
    for i in 0..=255 {
        let v = f64::from(i);
        for rgb in [Rgb::new(v, 0.0, 0.0), Rgb::new(0.0, v, 0.0), Rgb::new(0.0, 0.0, v), Rgb::new(v, v, v)] {
            assert_eq!(xyz_to_rgb(rgb_to_xyz(rgb)), rgb);
        }
    }
}

#[test]
fn lab_xyz_roundtrip_is_precise() {
    for rgb in rgb_grid() {
        let lab = xyz_to_lab(rgb_to_xyz(rgb));
        let back = xyz_to_lab(lab_to_xyz(lab));
        assert_abs_diff_eq!(back.l, lab.l, epsilon = 1e-6);
        assert_abs_diff_eq!(back.a, lab.a, epsilon = 1e-6);
        assert_abs_diff_eq!(back.b, lab.b, epsilon = 1e-6);
    }
}

#[test]
fn lab_from_rgb_is_near_domain() {
    // Derived Lab may overshoot by float noise (white gives L = 100.000004)
    // but never by a visible amount.
    for rgb in rgb_grid() {
        let lab = xyz_to_lab(rgb_to_xyz(rgb));
        assert!(lab.l >= -1e-9 && lab.l <= 100.0 + 1e-5, "{lab}");
        assert!(lab.a >= -128.0 && lab.a <= 127.0, "{lab}");
        assert!(lab.b >= -128.0 && lab.b <= 127.0, "{lab}");
    }
}

#[test]
fn reference_fixtures() {
    let cmyk = rgb_to_cmyk(Rgb::new(255.0, 0.0, 0.0));
    assert_abs_diff_eq!(cmyk.c, 0.0);
    assert_abs_diff_eq!(cmyk.m, 100.0);
    assert_abs_diff_eq!(cmyk.y, 100.0);
    assert_abs_diff_eq!(cmyk.k, 0.0);

    assert_eq!(rgb_to_cmyk(Rgb::WHITE), Cmyk::new(0.0, 0.0, 0.0, 0.0));

    let xyz = rgb_to_xyz(Rgb::WHITE);
    assert_abs_diff_eq!(xyz.x, 95.047, epsilon = 0.01);
    assert_abs_diff_eq!(xyz.y, 100.000, epsilon = 0.01);
    assert_abs_diff_eq!(xyz.z, 108.883, epsilon = 0.01);

    let lab = xyz_to_lab(xyz);
    assert_abs_diff_eq!(lab.l, 100.0, epsilon = 0.01);
    assert_abs_diff_eq!(lab.a, 0.0, epsilon = 0.01);
    assert_abs_diff_eq!(lab.b, 0.0, epsilon = 0.01);
}

#[test]
fn conversions_do_not_touch_inputs() {
    let lab = Lab::new(40.0, 20.0, -30.0);
    let copy = lab;
    let _ = lab_to_xyz(lab);
    assert_eq!(lab, copy);
}
