//! CLI command implementations.

pub mod edit;
pub mod session;

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tint_color::{Model, SyncOutcome, hex};

use crate::RunConfig;

/// JSON form of one published pass.
#[derive(Serialize)]
struct Report<'a> {
    edited: Model,
    rgb: [f64; 3],
    cmyk: [f64; 4],
    xyz: [f64; 3],
    lab: [f64; 3],
    hex: String,
    violated: &'a [Model],
    warning: Option<String>,
    clamped: bool,
}

impl<'a> From<&'a SyncOutcome> for Report<'a> {
    fn from(out: &'a SyncOutcome) -> Self {
        Self {
            edited: out.edited,
            rgb: out.swatch.rgb.to_array(),
            cmyk: out.swatch.cmyk.to_array(),
            xyz: out.xyz.to_array(),
            lab: out.swatch.lab.to_array(),
            hex: hex::format(out.swatch.rgb),
            violated: out.report.violated(),
            warning: out.report.message(),
            clamped: out.clamped,
        }
    }
}

/// Renders an outcome as the text block printed by every command.
pub fn render_text(out: &SyncOutcome) -> String {
    let s = &out.swatch;
    let mut text = format!(
        "RGB   {:.0} {:.0} {:.0}\n\
         CMYK  {:.2} {:.2} {:.2} {:.2}\n\
         XYZ   {:.4} {:.4} {:.4}\n\
         Lab   {:.4} {:.4} {:.4}\n\
         Hex   {}",
        s.rgb.r,
        s.rgb.g,
        s.rgb.b,
        s.cmyk.c,
        s.cmyk.m,
        s.cmyk.y,
        s.cmyk.k,
        out.xyz.x,
        out.xyz.y,
        out.xyz.z,
        s.lab.l,
        s.lab.a,
        s.lab.b,
        hex::format(s.rgb),
    );
    if let Some(warning) = out.report.message() {
        text.push_str("\nWarning: ");
        text.push_str(&warning);
    }
    text
}

/// Writes an outcome to `w` as text or JSON.
pub fn print_outcome<W: Write>(w: &mut W, out: &SyncOutcome, config: RunConfig) -> Result<()> {
    if config.json {
        let json =
            serde_json::to_string(&Report::from(out)).context("Failed to serialize result")?;
        writeln!(w, "{}", json)?;
    } else {
        writeln!(w, "{}", render_text(out))?;
    }
    Ok(())
}
