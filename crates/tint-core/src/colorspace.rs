//! Representation labels and channel domains.
//!
//! Every user-facing color representation carries a [`Model`] label and a
//! nominal domain per channel. Values outside the domain are representable
//! (the conversion math never clamps) but are reported as out of range.
//!
//! # Domains
//!
//! | Model | Channels | Domain |
//! |-------|----------|--------|
//! | [`Model::Rgb`] | r, g, b | [0, 255] |
//! | [`Model::Cmyk`] | c, m, y, k | [0, 100] |
//! | [`Model::Lab`] | l / a, b | [0, 100] / [-128, 127] |
//!
//! # Usage
//!
//! ```
//! use tint_core::prelude::*;
//!
//! let rgb = Rgb::new(300.0, 10.0, 10.0);
//! assert!(!rgb.in_range());
//! assert_eq!(rgb.clamped(), Rgb::new(255.0, 10.0, 10.0));
//! ```

use std::fmt;

/// Label of a user-facing color representation.
///
/// The declaration order is the order in which range violations are
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Model {
    /// Device RGB, 0-255 per channel.
    Rgb,
    /// Print CMYK, 0-100% per channel.
    Cmyk,
    /// CIE L*a*b*.
    Lab,
}

impl Model {
    /// All models in reporting order.
    pub const ALL: [Model; 3] = [Model::Rgb, Model::Cmyk, Model::Lab];

    /// Display name, as used in warnings and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Model::Rgb => "RGB",
            Model::Cmyk => "CMYK",
            Model::Lab => "Lab",
        }
    }

    /// Channel names in storage order.
    pub const fn channel_names(self) -> &'static [&'static str] {
        match self {
            Model::Rgb => &["r", "g", "b"],
            Model::Cmyk => &["c", "m", "y", "k"],
            Model::Lab => &["l", "a", "b"],
        }
    }

    /// Nominal per-channel domains in storage order.
    pub const fn ranges(self) -> &'static [ChannelRange] {
        match self {
            Model::Rgb => &[RGB_RANGE, RGB_RANGE, RGB_RANGE],
            Model::Cmyk => &[CMYK_RANGE, CMYK_RANGE, CMYK_RANGE, CMYK_RANGE],
            Model::Lab => &[LAB_L_RANGE, LAB_AB_RANGE, LAB_AB_RANGE],
        }
    }

    /// Index of a channel by (case-insensitive) name.
    ///
    /// ```
    /// use tint_core::Model;
    ///
    /// assert_eq!(Model::Cmyk.channel_index("K"), Some(3));
    /// assert_eq!(Model::Rgb.channel_index("k"), None);
    /// ```
    pub fn channel_index(self, name: &str) -> Option<usize> {
        self.channel_names()
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
    }

    /// Parses a model label (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive nominal domain of one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl ChannelRange {
    /// Creates a range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `v` lies inside the range. NaN is never inside.
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Clamps `v` into the range.
    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }
}

/// RGB channel domain.
pub const RGB_RANGE: ChannelRange = ChannelRange::new(0.0, 255.0);
/// CMYK channel domain (percent).
pub const CMYK_RANGE: ChannelRange = ChannelRange::new(0.0, 100.0);
/// Lab lightness domain.
pub const LAB_L_RANGE: ChannelRange = ChannelRange::new(0.0, 100.0);
/// Lab a/b domain.
pub const LAB_AB_RANGE: ChannelRange = ChannelRange::new(-128.0, 127.0);

/// Indexed access to the channels of a color value.
pub trait Channels: Copy {
    /// Channel names in storage order.
    const NAMES: &'static [&'static str];

    /// Reads channel `i`. Panics if `i` is out of bounds.
    fn channel(&self, i: usize) -> f64;

    /// Writes channel `i`. Panics if `i` is out of bounds.
    fn set_channel(&mut self, i: usize, v: f64);

    /// Returns a copy with channel `i` replaced.
    fn with_channel(mut self, i: usize, v: f64) -> Self {
        self.set_channel(i, v);
        self
    }

    /// Iterates over channel values.
    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..Self::NAMES.len()).map(move |i| self.channel(i))
    }

    /// First channel that is NaN or infinite, as `(name, value)`.
    fn non_finite(&self) -> Option<(&'static str, f64)> {
        Self::NAMES
            .iter()
            .enumerate()
            .map(|(i, n)| (*n, self.channel(i)))
            .find(|(_, v)| !v.is_finite())
    }

    /// Whether every channel is finite.
    fn is_finite(&self) -> bool {
        self.non_finite().is_none()
    }
}

/// A user-facing representation with a nominal domain.
pub trait Bounded: Channels {
    /// Representation label.
    const MODEL: Model;

    /// Whether every channel lies within its domain.
    fn in_range(&self) -> bool {
        Self::MODEL
            .ranges()
            .iter()
            .enumerate()
            .all(|(i, r)| r.contains(self.channel(i)))
    }

    /// Copy with every channel clamped to its domain.
    ///
    /// This is the input-side clamp a UI field applies before handing the
    /// value over; conversions never call it.
    fn clamped(&self) -> Self {
        let mut out = *self;
        for (i, r) in Self::MODEL.ranges().iter().enumerate() {
            out.set_channel(i, r.clamp(self.channel(i)));
        }
        out
    }
}
