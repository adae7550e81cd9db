//! # tint-transfer
//!
//! Nonlinear companding curves used by the color conversions.
//!
//! # Terminology
//!
//! - **EOTF**: Encoded -> Linear (sRGB decode)
//! - **OETF**: Linear -> Encoded (sRGB encode)
//!
//! # Supported Curves
//!
//! | Module | Use Case | Break point |
//! |--------|----------|-------------|
//! | [`srgb`] | sRGB device values <-> linear light | 0.04045 / 0.0031308 |
//! | [`cie`] | XYZ ratio <-> Lab companded value | 0.008856 |
//!
//! Both curves replace the power law with a linear segment near black so
//! the slope stays finite at zero.
//!
//! # Usage
//!
//! ```rust
//! use tint_transfer::{cie, srgb};
//!
//! let linear = srgb::eotf(0.5);
//! assert!((srgb::oetf(linear) - 0.5).abs() < 1e-12);
//!
//! assert!((cie::f(1.0) - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cie;
pub mod srgb;

pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
