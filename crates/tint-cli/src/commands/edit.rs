//! One-shot edit commands: `rgb`, `cmyk`, `lab`, `hex`.

use anyhow::{Context, Result};
use tint_color::{Cmyk, Edit, Lab, Rgb, hex, sync_with};

use super::print_outcome;
use crate::{RunConfig, log_verbose};

/// Runs `tint rgb R G B`.
pub fn run_rgb(r: f64, g: f64, b: f64, config: RunConfig) -> Result<()> {
    run(Edit::Rgb(Rgb::new(r, g, b)), config)
}

/// Runs `tint cmyk C M Y K`.
pub fn run_cmyk(c: f64, m: f64, y: f64, k: f64, config: RunConfig) -> Result<()> {
    run(Edit::Cmyk(Cmyk::new(c, m, y, k)), config)
}

/// Runs `tint lab L A B`.
pub fn run_lab(l: f64, a: f64, b: f64, config: RunConfig) -> Result<()> {
    run(Edit::Lab(Lab::new(l, a, b)), config)
}

/// Runs `tint hex HEX`.
pub fn run_hex(s: &str, config: RunConfig) -> Result<()> {
    let rgb = hex::parse(s).with_context(|| format!("Invalid hex color '{}'", s))?;
    run(Edit::Rgb(rgb), config)
}

fn run(edit: Edit, config: RunConfig) -> Result<()> {
    let edit = if config.clamp_input {
        edit.clamped()
    } else {
        edit
    };
    log_verbose(&format!("Converting from {}", edit.model()));

    let out = sync_with(edit, config.sync).context("Incorrect color value")?;
    tracing::debug!(violated = ?out.report.violated(), clamped = out.clamped, "pass done");

    let stdout = std::io::stdout();
    print_outcome(&mut stdout.lock(), &out, config)
}
