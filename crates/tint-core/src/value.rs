//! Color value types.
//!
//! Plain `Copy` structs with `f64` channels. None of them enforce their
//! domain on construction: a value may be out of range or even non-finite,
//! and it is up to the caller to validate (see [`Channels::non_finite`] and
//! [`Bounded::in_range`]).

use std::fmt;

use crate::colorspace::{Bounded, Channels, Model};

/// Device RGB color, channels nominally in [0, 255].
///
/// # Example
///
/// ```
/// use tint_core::Rgb;
///
/// let red = Rgb::new(255.0, 0.0, 0.0);
/// assert_eq!(red.to_array(), [255.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);

    /// Creates an RGB value.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates an RGB value from 8-bit channels.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r.into(), g.into(), b.into())
    }

    /// Creates from `[r, g, b]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Channels for Rgb {
    const NAMES: &'static [&'static str] = Model::Rgb.channel_names();

    fn channel(&self, i: usize) -> f64 {
        self.to_array()[i]
    }

    fn set_channel(&mut self, i: usize, v: f64) {
        match i {
            0 => self.r = v,
            1 => self.g = v,
            2 => self.b = v,
            _ => panic!("RGB channel index out of bounds: {i}"),
        }
    }
}

impl Bounded for Rgb {
    const MODEL: Model = Model::Rgb;
}

/// Print CMYK color, channels in percent, nominally [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    /// Cyan.
    pub c: f64,
    /// Magenta.
    pub m: f64,
    /// Yellow.
    pub y: f64,
    /// Key (black).
    pub k: f64,
}

impl Cmyk {
    /// Creates a CMYK value.
    #[inline]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Creates from `[c, m, y, k]`.
    #[inline]
    pub const fn from_array(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Returns `[c, m, y, k]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CMYK({}, {}, {}, {})", self.c, self.m, self.y, self.k)
    }
}

impl Channels for Cmyk {
    const NAMES: &'static [&'static str] = Model::Cmyk.channel_names();

    fn channel(&self, i: usize) -> f64 {
        self.to_array()[i]
    }

    fn set_channel(&mut self, i: usize, v: f64) {
        match i {
            0 => self.c = v,
            1 => self.m = v,
            2 => self.y = v,
            3 => self.k = v,
            _ => panic!("CMYK channel index out of bounds: {i}"),
        }
    }
}

impl Bounded for Cmyk {
    const MODEL: Model = Model::Cmyk;
}

/// CIE XYZ tristimulus values on the 0-100 scale (Y = 100 for white).
///
/// XYZ is the internal pivot between RGB and Lab and has no nominal
/// domain of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus.
    pub x: f64,
    /// Y tristimulus (luminance).
    pub y: f64,
    /// Z tristimulus.
    pub z: f64,
}

impl Xyz {
    /// Creates an XYZ value.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates from `[x, y, z]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XYZ({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Channels for Xyz {
    const NAMES: &'static [&'static str] = &["x", "y", "z"];

    fn channel(&self, i: usize) -> f64 {
        self.to_array()[i]
    }

    fn set_channel(&mut self, i: usize, v: f64) {
        match i {
            0 => self.x = v,
            1 => self.y = v,
            2 => self.z = v,
            _ => panic!("XYZ channel index out of bounds: {i}"),
        }
    }
}

/// CIE L*a*b* color. L in [0, 100]; a and b in [-128, 127].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness.
    pub l: f64,
    /// Green-red opponent axis.
    pub a: f64,
    /// Blue-yellow opponent axis.
    pub b: f64,
}

impl Lab {
    /// Creates a Lab value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Creates from `[l, a, b]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns `[l, a, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lab({}, {}, {})", self.l, self.a, self.b)
    }
}

impl Channels for Lab {
    const NAMES: &'static [&'static str] = Model::Lab.channel_names();

    fn channel(&self, i: usize) -> f64 {
        self.to_array()[i]
    }

    fn set_channel(&mut self, i: usize, v: f64) {
        match i {
            0 => self.l = v,
            1 => self.a = v,
            2 => self.b = v,
            _ => panic!("Lab channel index out of bounds: {i}"),
        }
    }
}

impl Bounded for Lab {
    const MODEL: Model = Model::Lab;
}
