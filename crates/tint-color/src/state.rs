//! Published color state.
//!
//! [`ColorState`] keeps the last swatch that made it through a pass, the
//! way a picker UI holds its three panels. Every edit runs a complete
//! [`sync_with`] pass first and only then replaces the held outcome, so a
//! failed edit leaves the previous swatch in place and a successful one
//! never exposes a half-updated triple.
//!
//! # Example
//!
//! ```rust
//! use tint_color::ColorState;
//! use tint_core::{Model, Rgb};
//!
//! let mut state = ColorState::new().unwrap();
//! state.set_channel(Model::Rgb, "g", 255.0).unwrap();
//! assert_eq!(state.swatch().rgb, Rgb::new(255.0, 255.0, 0.0));
//!
//! // Rejected edits keep the previous swatch.
//! assert!(state.set_channel(Model::Rgb, "b", f64::NAN).is_err());
//! assert_eq!(state.swatch().rgb, Rgb::new(255.0, 255.0, 0.0));
//! ```

use tint_core::{Channels, Model, Rgb};
use tracing::debug;

use crate::error::{ColorError, ColorResult};
use crate::hex;
use crate::range::RangeReport;
use crate::sync::{Edit, Swatch, SyncOptions, SyncOutcome, sync_with};

/// Initial color of a fresh state.
pub const INITIAL_RGB: Rgb = Rgb::new(255.0, 0.0, 0.0);

/// Holder of the last published swatch.
#[derive(Debug, Clone)]
pub struct ColorState {
    options: SyncOptions,
    current: SyncOutcome,
    /// Number of successful passes.
    edits: u64,
}

impl ColorState {
    /// Creates a state holding [`INITIAL_RGB`] with default options.
    pub fn new() -> ColorResult<Self> {
        Self::with_options(SyncOptions::default())
    }

    /// Creates a state holding [`INITIAL_RGB`].
    ///
    /// The initial swatch goes through the same pass as any edit, so its
    /// errors are the errors of [`sync_with`].
    pub fn with_options(options: SyncOptions) -> ColorResult<Self> {
        let current = sync_with(Edit::Rgb(INITIAL_RGB), options)?;
        Ok(Self {
            options,
            current,
            edits: 0,
        })
    }

    /// Coordinator options used for every pass.
    pub fn options(&self) -> SyncOptions {
        self.options
    }

    /// Currently published swatch.
    pub fn swatch(&self) -> &Swatch {
        &self.current.swatch
    }

    /// Range report of the published swatch.
    pub fn report(&self) -> &RangeReport {
        &self.current.report
    }

    /// Full outcome of the last successful pass.
    pub fn outcome(&self) -> &SyncOutcome {
        &self.current
    }

    /// Number of successful edits since creation.
    pub fn edits(&self) -> u64 {
        self.edits
    }

    /// Runs a pass and publishes it.
    ///
    /// On error the held state is unchanged.
    pub fn apply(&mut self, edit: Edit) -> ColorResult<&SyncOutcome> {
        let outcome = sync_with(edit, self.options)?;
        self.current = outcome;
        self.edits += 1;
        debug!(edits = self.edits, edited = %edit.model(), "published swatch");
        Ok(&self.current)
    }

    /// Replaces one channel of the held representation and applies it.
    ///
    /// Channel names are matched case-insensitively.
    pub fn set_channel(
        &mut self,
        model: Model,
        channel: &str,
        value: f64,
    ) -> ColorResult<&SyncOutcome> {
        let index = model
            .channel_index(channel)
            .ok_or_else(|| ColorError::UnknownChannel {
                model,
                channel: channel.to_string(),
            })?;

        let swatch = self.current.swatch;
        let edit = match model {
            Model::Rgb => Edit::Rgb(swatch.rgb.with_channel(index, value)),
            Model::Cmyk => Edit::Cmyk(swatch.cmyk.with_channel(index, value)),
            Model::Lab => Edit::Lab(swatch.lab.with_channel(index, value)),
        };
        self.apply(edit)
    }

    /// Parses a hex string and applies it as an RGB edit.
    pub fn set_hex(&mut self, s: &str) -> ColorResult<&SyncOutcome> {
        let rgb = hex::parse(s)?;
        self.apply(Edit::Rgb(rgb))
    }
}
