//! # tint-core
//!
//! Core value types for tint color conversion.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - [`Rgb`], [`Cmyk`], [`Xyz`], [`Lab`] - Plain `f64` color values
//! - [`Model`] - Label of a user-facing representation (RGB, CMYK, Lab)
//! - [`ChannelRange`] - Nominal per-channel domain
//! - [`Channels`], [`Bounded`] - Indexed channel access, range checks, clamping
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The crates that carry color
//! values depend on it; `tint-transfer` works on bare `f64` and does not:
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-math (matrices, vectors from Rgb/Xyz)
//!    +-- tint-primaries (sRGB matrices, reference white)
//!    +-- tint-color (conversions, coordinator, validity)
//!
//! tint-transfer (companding curves, no tint dependencies)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Derive `Serialize`/`Deserialize` for value types and [`Model`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colorspace;
pub mod value;

pub use colorspace::*;
pub use value::*;

/// Prelude module for convenient imports.
///
/// ```
/// use tint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::colorspace::{Bounded, ChannelRange, Channels, Model};
    pub use crate::value::{Cmyk, Lab, Rgb, Xyz};
}
