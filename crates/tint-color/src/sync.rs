//! Consistency coordinator.
//!
//! Given an edit to one representation, derives the other two along fixed
//! composition paths and runs the range check over the result:
//!
//! ```text
//! Edit::Rgb   rgb ──> cmyk
//!              └───> xyz ──> lab
//!
//! Edit::Cmyk  cmyk ──> rgb ──> xyz ──> lab
//!
//! Edit::Lab   lab ──> xyz ──> rgb ──> cmyk
//! ```
//!
//! A pass is a pure function of the edit and the options; there is no
//! state to get out of order. The edited value is validated up front, and
//! every intermediate is checked for finiteness so NaN never leaks into a
//! returned swatch.
//!
//! # Example
//!
//! ```rust
//! use tint_color::{sync, Edit};
//! use tint_core::{Cmyk, Model, Rgb};
//!
//! let out = sync(Edit::Cmyk(Cmyk::new(0.0, 100.0, 100.0, 0.0))).unwrap();
//! assert_eq!(out.swatch.rgb, Rgb::new(255.0, 0.0, 0.0));
//! assert_eq!(out.edited, Model::Cmyk);
//! ```

use tint_core::{Bounded, Channels, Cmyk, Lab, Model, Rgb, Xyz};
use tracing::{debug, trace};

use crate::convert::{cmyk_to_rgb, lab_to_xyz, rgb_to_cmyk, rgb_to_xyz, xyz_to_lab, xyz_to_rgb};
use crate::error::{ColorError, ColorResult};
use crate::range::RangeReport;

/// An edit to exactly one representation, carrying all of its channels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edit {
    /// RGB was edited.
    Rgb(Rgb),
    /// CMYK was edited.
    Cmyk(Cmyk),
    /// Lab was edited.
    Lab(Lab),
}

impl Edit {
    /// Label of the edited representation.
    pub fn model(&self) -> Model {
        match self {
            Edit::Rgb(_) => Model::Rgb,
            Edit::Cmyk(_) => Model::Cmyk,
            Edit::Lab(_) => Model::Lab,
        }
    }

    /// Rejects NaN and infinite channels.
    pub fn validate(&self) -> ColorResult<()> {
        let bad = match self {
            Edit::Rgb(v) => v.non_finite(),
            Edit::Cmyk(v) => v.non_finite(),
            Edit::Lab(v) => v.non_finite(),
        };
        match bad {
            Some((channel, value)) => Err(ColorError::InvalidNumericInput {
                model: self.model(),
                channel,
                value,
            }),
            None => Ok(()),
        }
    }

    /// Copy with the edited value clamped to its domain.
    ///
    /// Mirrors what a numeric field or slider does before handing a value
    /// over. [`sync`] itself never clamps the edited value.
    pub fn clamped(&self) -> Self {
        match self {
            Edit::Rgb(v) => Edit::Rgb(v.clamped()),
            Edit::Cmyk(v) => Edit::Cmyk(v.clamped()),
            Edit::Lab(v) => Edit::Lab(v.clamped()),
        }
    }
}

impl From<Rgb> for Edit {
    fn from(v: Rgb) -> Self {
        Edit::Rgb(v)
    }
}

impl From<Cmyk> for Edit {
    fn from(v: Cmyk) -> Self {
        Edit::Cmyk(v)
    }
}

impl From<Lab> for Edit {
    fn from(v: Lab) -> Self {
        Edit::Lab(v)
    }
}

/// The three user-facing representations of one color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    /// Device RGB.
    pub rgb: Rgb,
    /// Print CMYK.
    pub cmyk: Cmyk,
    /// CIE Lab.
    pub lab: Lab,
}

/// Coordinator settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Clamp derived representations to their domain.
    ///
    /// RGB derived from Lab is clamped before CMYK is derived from it. The
    /// edited representation is left untouched.
    pub clamp_derived: bool,
}

/// Result of one coordinator pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncOutcome {
    /// Representation the pass started from.
    pub edited: Model,
    /// All three representations.
    pub swatch: Swatch,
    /// XYZ pivot used on the RGB <-> Lab leg.
    pub xyz: Xyz,
    /// Range check over `swatch`.
    pub report: RangeReport,
    /// Whether clamping changed any derived channel.
    pub clamped: bool,
}

/// Runs one pass with default options.
pub fn sync(edit: Edit) -> ColorResult<SyncOutcome> {
    sync_with(edit, SyncOptions::default())
}

/// Runs one pass.
///
/// The range check runs on the values as computed. Without
/// `clamp_derived`, an in-range edit can still report a derived
/// representation that overshoots by float noise, e.g. Lab `L` of white.
///
/// # Errors
///
/// - [`ColorError::InvalidNumericInput`] if the edit has a NaN or infinite
///   channel. Nothing is computed.
/// - [`ColorError::NonFiniteResult`] if a step overflows on finite input.
pub fn sync_with(edit: Edit, options: SyncOptions) -> ColorResult<SyncOutcome> {
    edit.validate()?;

    let mut deriver = Deriver {
        clamp: options.clamp_derived,
        clamped: false,
    };

    let (swatch, xyz) = match edit {
        Edit::Rgb(rgb) => {
            let cmyk = deriver.derived("rgb_to_cmyk", rgb_to_cmyk(rgb))?;
            let xyz = step("rgb_to_xyz", rgb_to_xyz(rgb))?;
            let lab = deriver.derived("xyz_to_lab", xyz_to_lab(xyz))?;
            (Swatch { rgb, cmyk, lab }, xyz)
        }
        Edit::Cmyk(cmyk) => {
            let rgb = deriver.derived("cmyk_to_rgb", cmyk_to_rgb(cmyk))?;
            let xyz = step("rgb_to_xyz", rgb_to_xyz(rgb))?;
            let lab = deriver.derived("xyz_to_lab", xyz_to_lab(xyz))?;
            (Swatch { rgb, cmyk, lab }, xyz)
        }
        Edit::Lab(lab) => {
            let xyz = step("lab_to_xyz", lab_to_xyz(lab))?;
            let rgb = deriver.derived("xyz_to_rgb", xyz_to_rgb(xyz))?;
            let cmyk = deriver.derived("rgb_to_cmyk", rgb_to_cmyk(rgb))?;
            (Swatch { rgb, cmyk, lab }, xyz)
        }
    };

    let report = RangeReport::check(&swatch);
    debug!(
        edited = %edit.model(),
        violated = ?report.violated(),
        clamped = deriver.clamped,
        "sync pass complete"
    );

    Ok(SyncOutcome {
        edited: edit.model(),
        swatch,
        xyz,
        report,
        clamped: deriver.clamped,
    })
}

/// Checks one intermediate value for finiteness.
fn step<T: Channels + std::fmt::Debug>(name: &'static str, value: T) -> ColorResult<T> {
    trace!(step = name, ?value);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorError::NonFiniteResult { step: name })
    }
}

/// Applies the derived-value policy across one pass.
struct Deriver {
    clamp: bool,
    clamped: bool,
}

impl Deriver {
    fn derived<T>(&mut self, name: &'static str, value: T) -> ColorResult<T>
    where
        T: Bounded + PartialEq + std::fmt::Debug,
    {
        let value = step(name, value)?;
        if !self.clamp {
            return Ok(value);
        }
        let clamped = value.clamped();
        if clamped != value {
            trace!(step = name, ?clamped, "clamped derived value");
            self.clamped = true;
        }
        Ok(clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rgb_edit_path() {
        let out = sync(Edit::Rgb(Rgb::new(255.0, 0.0, 0.0))).unwrap();
        assert_eq!(out.swatch.cmyk, Cmyk::new(0.0, 100.0, 100.0, 0.0));
        assert_abs_diff_eq!(out.swatch.lab.l, 53.2408, epsilon = 1e-3);
        assert_abs_diff_eq!(out.xyz.x, 41.24564, epsilon = 1e-9);
        assert!(out.report.is_clean());
        assert!(!out.clamped);
    }

    #[test]
    fn test_cmyk_edit_path() {
        let out = sync(Edit::Cmyk(Cmyk::new(0.0, 0.0, 0.0, 100.0))).unwrap();
        assert_eq!(out.swatch.rgb, Rgb::BLACK);
        assert_eq!(out.swatch.lab, Lab::new(0.0, 0.0, 0.0));
        // The edited CMYK is returned as given, not re-derived.
        assert_eq!(out.swatch.cmyk, Cmyk::new(0.0, 0.0, 0.0, 100.0));
    }

    #[test]
    fn test_lab_edit_path() {
        let out = sync(Edit::Lab(Lab::new(100.0, 0.0, 0.0))).unwrap();
        assert_eq!(out.swatch.rgb, Rgb::WHITE);
        assert_eq!(out.swatch.cmyk, Cmyk::new(0.0, 0.0, 0.0, 0.0));
        assert_abs_diff_eq!(out.xyz.y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lab_out_of_range_reported() {
        let out = sync(Edit::Lab(Lab::new(150.0, 0.0, 0.0))).unwrap();
        assert!(out.report.contains(Model::Lab));
        // Derived RGB overshoots too; the engine does not clamp.
        assert!(out.report.contains(Model::Rgb));
        assert!(out.swatch.rgb.r > 255.0);
        assert!(out.report.message().unwrap().contains(crate::range::LAB_WARNING));
    }

    #[test]
    fn test_clamp_derived() {
        let options = SyncOptions { clamp_derived: true };
        let out = sync_with(Edit::Lab(Lab::new(150.0, 0.0, 0.0)), options).unwrap();
        assert!(out.clamped);
        assert_eq!(out.swatch.rgb, Rgb::WHITE);
        assert_eq!(out.swatch.cmyk, Cmyk::new(0.0, 0.0, 0.0, 0.0));
        // Edited value is never clamped.
        assert_eq!(out.swatch.lab.l, 150.0);
        assert_eq!(out.report.violated(), &[Model::Lab]);
    }

    #[test]
    fn test_nan_rejected() {
        let err = sync(Edit::Rgb(Rgb::new(f64::NAN, 0.0, 0.0))).unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidNumericInput { model: Model::Rgb, channel: "r", .. }
        ));
    }

    #[test]
    fn test_infinity_rejected() {
        let err = sync(Edit::Cmyk(Cmyk::new(0.0, 0.0, f64::INFINITY, 0.0))).unwrap_err();
        assert!(matches!(err, ColorError::InvalidNumericInput { channel: "y", .. }));
    }

    #[test]
    fn test_overflow_reported_as_step() {
        // Finite but large enough that a^3 overflows.
        let err = sync(Edit::Lab(Lab::new(50.0, 1e300, 0.0))).unwrap_err();
        assert_eq!(err, ColorError::NonFiniteResult { step: "lab_to_xyz" });
    }

    #[test]
    fn test_edit_clamped() {
        let edit = Edit::Lab(Lab::new(120.0, -300.0, 0.0)).clamped();
        assert_eq!(edit, Edit::Lab(Lab::new(100.0, -128.0, 0.0)));
        assert_eq!(Edit::from(Rgb::WHITE).model(), Model::Rgb);
    }
}
