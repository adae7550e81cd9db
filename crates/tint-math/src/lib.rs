//! # tint-math
//!
//! Math primitives for color conversion:
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ transforms
//! - [`Vec3`] - 3-component vectors for RGB and XYZ triplets
//!
//! # Design
//!
//! Everything is `f64` so that XYZ and Lab intermediates keep full
//! precision. Matrices use **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Matrix products run on [`glam`]'s double-precision types.
//!
//! # Usage
//!
//! ```rust
//! use tint_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(100.0, 100.0, 100.0);
//! assert!((xyz.y - 100.0).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
