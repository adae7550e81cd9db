//! tint - RGB / CMYK / Lab converter
//!
//! Edit one representation, get the other two kept in sync plus a range
//! warning when something falls outside its nominal domain.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tint_color::SyncOptions;

mod commands;

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "RGB / CMYK / Lab color converter")]
#[command(long_about = "
Converts between RGB (0-255), CMYK (0-100%) and CIE L*a*b*, keeping all
three consistent with the one you edit. XYZ is shown as the pivot.

Examples:
  tint rgb 255 0 0                 # Pure red
  tint cmyk 0 100 100 0            # Same red from CMYK
  tint lab 150 0 0                 # Out-of-range Lab, reported
  tint hex '#1a2b3c' --json        # Hex from a color dialog, JSON out
  tint --clamp-input lab 150 0 0   # Clamp the edit like a UI field would
  tint session                     # Read edits from stdin
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Clamp the edited value to its domain before converting
    #[arg(long, global = true)]
    clamp_input: bool,

    /// Clamp derived representations to their domain
    #[arg(long, global = true)]
    clamp_derived: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Edit RGB (0-255 per channel)
    #[command(allow_negative_numbers = true)]
    Rgb(RgbArgs),

    /// Edit CMYK (0-100 per channel)
    #[command(allow_negative_numbers = true)]
    Cmyk(CmykArgs),

    /// Edit Lab (L 0-100, a/b -128-127)
    #[command(allow_negative_numbers = true)]
    Lab(LabArgs),

    /// Edit RGB from a hex string (#rrggbb or #rgb)
    Hex(HexArgs),

    /// Apply edits read line by line from stdin
    #[command(visible_alias = "s")]
    Session,
}

/// Arguments for the `rgb` command.
#[derive(Args)]
struct RgbArgs {
    /// Red
    r: f64,
    /// Green
    g: f64,
    /// Blue
    b: f64,
}

/// Arguments for the `cmyk` command.
#[derive(Args)]
struct CmykArgs {
    /// Cyan
    c: f64,
    /// Magenta
    m: f64,
    /// Yellow
    y: f64,
    /// Key (black)
    k: f64,
}

/// Arguments for the `lab` command.
#[derive(Args)]
struct LabArgs {
    /// Lightness
    l: f64,
    /// Green-red axis
    a: f64,
    /// Blue-yellow axis
    b: f64,
}

/// Arguments for the `hex` command.
#[derive(Args)]
struct HexArgs {
    /// Hex color, e.g. '#ff8000'
    hex: String,
}

/// Output and edit settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Print JSON instead of text.
    pub json: bool,
    /// Clamp the edited value before the pass.
    pub clamp_input: bool,
    /// Coordinator options.
    pub sync: SyncOptions,
}

/// Installs the stderr tracing subscriber. `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Logs a progress message at info level.
pub fn log_verbose(msg: &str) {
    tracing::info!("{}", msg);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = RunConfig {
        json: cli.json,
        clamp_input: cli.clamp_input,
        sync: SyncOptions {
            clamp_derived: cli.clamp_derived,
        },
    };

    match cli.command {
        Commands::Rgb(a) => commands::edit::run_rgb(a.r, a.g, a.b, config),
        Commands::Cmyk(a) => commands::edit::run_cmyk(a.c, a.m, a.y, a.k, config),
        Commands::Lab(a) => commands::edit::run_lab(a.l, a.a, a.b, config),
        Commands::Hex(a) => commands::edit::run_hex(&a.hex, config),
        Commands::Session => commands::session::run(config),
    }
}
