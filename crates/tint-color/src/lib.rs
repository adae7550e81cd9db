//! # tint-color
//!
//! Conversion between RGB, CMYK, CIE XYZ and CIE L*a*b*, and the rules that
//! keep RGB, CMYK and Lab consistent when any one of them is edited.
//!
//! - **Conversion engine** ([`convert`]) - six pure functions
//! - **Coordinator** ([`sync`]) - derives the other two representations
//!   from an edit along fixed paths
//! - **Range policy** ([`RangeReport`]) - reports out-of-domain channels
//! - **State** ([`ColorState`]) - holds the last published swatch
//! - **Hex** ([`hex`]) - `#rrggbb` parsing and formatting
//!
//! # Architecture
//!
//! ```text
//!                    tint-color
//!                        |
//!     +------------------+------------------+
//!     |                  |                  |
//! tint-transfer    tint-primaries           |
//!                        |                  |
//!                    tint-math              |
//!                        |                  |
//!                        +--------+---------+
//!                                 |
//!                             tint-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tint_color::{sync, Edit};
//! use tint_core::{Lab, Model};
//!
//! let out = sync(Edit::Lab(Lab::new(150.0, 0.0, 0.0))).unwrap();
//! assert!(out.report.contains(Model::Lab));
//! println!("{}", out.report);
//! ```
//!
//! # Errors
//!
//! Non-finite input is rejected with [`ColorError::InvalidNumericInput`].
//! Out-of-range values are not errors; see [`RangeReport`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod range;
mod state;
pub mod convert;
pub mod hex;
pub mod sync;

pub use error::{ColorError, ColorResult};
pub use range::{CMYK_WARNING, LAB_WARNING, RGB_WARNING, RangeReport, warning};
pub use state::{ColorState, INITIAL_RGB};
pub use sync::{Edit, Swatch, SyncOptions, SyncOutcome, sync, sync_with};
pub use tint_core::{Bounded, Channels, Cmyk, Lab, Model, Rgb, Xyz};

// Re-export sub-crates for convenience
pub use tint_math as math;
pub use tint_primaries as primaries;
pub use tint_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::convert::{
        cmyk_to_rgb, lab_to_xyz, rgb_to_cmyk, rgb_to_xyz, xyz_to_lab, xyz_to_rgb,
    };
    pub use crate::{ColorError, ColorResult, ColorState, Edit, RangeReport, Swatch, SyncOutcome};
    pub use tint_core::prelude::*;
}
