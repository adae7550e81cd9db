//! Range validity policy.
//!
//! After each coordinator pass every representation is checked against its
//! nominal domain. Violations are collected in reporting order (RGB, CMYK,
//! Lab) together with a composite warning built from one fixed sentence per
//! violated representation.
//!
//! Bounds are inclusive and compared exactly. Derived values carry float
//! noise, so a plain white edit (`Rgb(255, 255, 255)`) derives
//! `L = 100.0000039` and reports [`LAB_WARNING`]. Set
//! [`SyncOptions::clamp_derived`](crate::SyncOptions::clamp_derived) to get
//! a clean report for such edits.

use std::fmt;

use tint_core::{Bounded, Model};

use crate::sync::Swatch;

/// Warning sentence for out-of-range RGB.
pub const RGB_WARNING: &str = "RGB value out of range (0-255).";
/// Warning sentence for out-of-range CMYK.
pub const CMYK_WARNING: &str = "CMYK value out of range (0-100).";
/// Warning sentence for out-of-range Lab.
pub const LAB_WARNING: &str = "LAB value out of range (L: 0-100, a: -128-127, b: -128-127).";

/// Fixed warning sentence for a representation.
pub const fn warning(model: Model) -> &'static str {
    match model {
        Model::Rgb => RGB_WARNING,
        Model::Cmyk => CMYK_WARNING,
        Model::Lab => LAB_WARNING,
    }
}

/// Outcome of the range check over one swatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeReport {
    violated: Vec<Model>,
}

impl RangeReport {
    /// Checks every representation of `swatch`.
    pub fn check(swatch: &Swatch) -> Self {
        let flags = [
            (Model::Rgb, swatch.rgb.in_range()),
            (Model::Cmyk, swatch.cmyk.in_range()),
            (Model::Lab, swatch.lab.in_range()),
        ];
        Self {
            violated: flags
                .into_iter()
                .filter(|(_, ok)| !ok)
                .map(|(m, _)| m)
                .collect(),
        }
    }

    /// Violated representations in reporting order.
    pub fn violated(&self) -> &[Model] {
        &self.violated
    }

    /// True when nothing is out of range.
    pub fn is_clean(&self) -> bool {
        self.violated.is_empty()
    }

    /// Whether `model` is out of range.
    pub fn contains(&self, model: Model) -> bool {
        self.violated.contains(&model)
    }

    /// Composite warning, `None` when nothing is out of range.
    pub fn message(&self) -> Option<String> {
        if self.is_clean() {
            return None;
        }
        let parts: Vec<&str> = self.violated.iter().map(|m| warning(*m)).collect();
        Some(parts.join(" "))
    }
}

impl fmt::Display for RangeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => f.write_str(&msg),
            None => f.write_str("in range"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_core::{Cmyk, Lab, Rgb};

    fn swatch(rgb: Rgb, cmyk: Cmyk, lab: Lab) -> Swatch {
        Swatch { rgb, cmyk, lab }
    }

    #[test]
    fn test_clean() {
        let report = RangeReport::check(&swatch(
            Rgb::new(255.0, 0.0, 0.0),
            Cmyk::new(0.0, 100.0, 100.0, 0.0),
            Lab::new(53.24, 80.09, 67.2),
        ));
        assert!(report.is_clean());
        assert_eq!(report.message(), None);
        assert_eq!(report.to_string(), "in range");
    }

    #[test]
    fn test_single_violation() {
        let report = RangeReport::check(&swatch(
            Rgb::default(),
            Cmyk::default(),
            Lab::new(150.0, 0.0, 0.0),
        ));
        assert_eq!(report.violated(), &[Model::Lab]);
        assert_eq!(report.message().as_deref(), Some(LAB_WARNING));
    }

    #[test]
    fn test_message_order() {
        let report = RangeReport::check(&swatch(
            Rgb::new(-1.0, 0.0, 0.0),
            Cmyk::new(0.0, 0.0, 0.0, 101.0),
            Lab::new(50.0, 0.0, -129.0),
        ));
        assert_eq!(report.violated(), &[Model::Rgb, Model::Cmyk, Model::Lab]);
        assert_eq!(
            report.message().unwrap(),
            format!("{} {} {}", RGB_WARNING, CMYK_WARNING, LAB_WARNING)
        );
    }

    #[test]
    fn test_skips_clean_models() {
        let report = RangeReport::check(&swatch(
            Rgb::new(256.0, 0.0, 0.0),
            Cmyk::default(),
            Lab::new(-1.0, 0.0, 0.0),
        ));
        assert!(report.contains(Model::Rgb));
        assert!(!report.contains(Model::Cmyk));
        assert_eq!(report.message().unwrap(), format!("{} {}", RGB_WARNING, LAB_WARNING));
    }
}
