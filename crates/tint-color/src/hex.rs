//! Hex color strings.
//!
//! Native color dialogs hand colors over as `#rrggbb`. Parsing accepts
//! `#rrggbb`, `rrggbb` and the short `#rgb` form, in either case.

use tint_core::{Bounded, Rgb};

use crate::convert::round_half_up;
use crate::error::{ColorError, ColorResult};

/// Parses a hex color string into integer RGB.
///
/// # Example
///
/// ```rust
/// use tint_color::hex;
/// use tint_core::Rgb;
///
/// assert_eq!(hex::parse("#ff8000").unwrap(), Rgb::new(255.0, 128.0, 0.0));
/// assert_eq!(hex::parse("0F0").unwrap(), Rgb::new(0.0, 255.0, 0.0));
/// assert!(hex::parse("#12345").is_err());
/// ```
pub fn parse(s: &str) -> ColorResult<Rgb> {
    let invalid = || ColorError::InvalidHex(s.to_string());
    let digits = s.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    let (r, g, b) = match digits.len() {
        6 => ((value >> 16) & 0xff, (value >> 8) & 0xff, value & 0xff),
        // Each nibble is doubled: 0xf -> 0xff
        3 => (
            ((value >> 8) & 0xf) * 0x11,
            ((value >> 4) & 0xf) * 0x11,
            (value & 0xf) * 0x11,
        ),
        _ => return Err(invalid()),
    };

    Ok(Rgb::new(r as f64, g as f64, b as f64))
}

/// Formats RGB as `#rrggbb`.
///
/// Channels are clamped to [0, 255] and rounded first, so any finite value
/// produces a valid string.
pub fn format(rgb: Rgb) -> String {
    let c = rgb.clamped();
    let byte = |v: f64| round_half_up(v) as u8;
    format!("#{:02x}{:02x}{:02x}", byte(c.r), byte(c.g), byte(c.b))
}
