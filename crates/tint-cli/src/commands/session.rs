//! Interactive session: one edit per line from stdin.
//!
//! Lines understood:
//!
//! ```text
//! rgb 18 52 86          whole representation
//! cmyk 0 50 50 10
//! lab 50 20 -30
//! hex #123456
//! lab.l 60              single channel of the held representation
//! show                  print the held swatch
//! quit                  stop (EOF works too)
//! ```
//!
//! A rejected line prints `Incorrect color value.` and keeps the held swatch.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};
use tint_color::{Cmyk, ColorState, Edit, Lab, Model, Rgb, hex};

use super::print_outcome;
use crate::{RunConfig, log_verbose};

/// One parsed session line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// Blank line or comment.
    Empty,
    /// Replace a whole representation.
    Edit(Edit),
    /// Replace one channel of the held representation.
    Channel {
        /// Representation to edit.
        model: Model,
        /// Channel name as typed.
        channel: String,
        /// New value.
        value: f64,
    },
    /// Hex RGB.
    Hex(String),
    /// Print the held swatch.
    Show,
    /// End the session.
    Quit,
}

/// Parses one input line.
pub fn parse_line(line: &str) -> Result<Line> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Line::Empty);
    };
    let rest: Vec<&str> = words.collect();
    let head_lower = head.to_ascii_lowercase();

    match head_lower.as_str() {
        "show" | "s" => return expect_no_args(&rest, Line::Show),
        "quit" | "q" | "exit" => return expect_no_args(&rest, Line::Quit),
        "hex" => {
            let [value] = rest.as_slice() else {
                bail!("hex expects one value");
            };
            return Ok(Line::Hex((*value).to_string()));
        }
        _ => {}
    }

    if let Some((model, channel)) = head.split_once('.') {
        let model = Model::from_name(model).ok_or_else(|| anyhow!("unknown model '{}'", model))?;
        let [value] = rest.as_slice() else {
            bail!("{}.{} expects one value", model, channel);
        };
        return Ok(Line::Channel {
            model,
            channel: channel.to_string(),
            value: parse_number(value)?,
        });
    }

    let model = Model::from_name(head).ok_or_else(|| anyhow!("unknown command '{}'", head))?;
    let values = rest
        .iter()
        .map(|s| parse_number(s))
        .collect::<Result<Vec<f64>>>()?;

    let edit = match (model, values.as_slice()) {
        (Model::Rgb, &[r, g, b]) => Edit::Rgb(Rgb::new(r, g, b)),
        (Model::Cmyk, &[c, m, y, k]) => Edit::Cmyk(Cmyk::new(c, m, y, k)),
        (Model::Lab, &[l, a, b]) => Edit::Lab(Lab::new(l, a, b)),
        (model, values) => bail!(
            "{} expects {} values, got {}",
            model,
            model.channel_names().len(),
            values.len()
        ),
    };
    Ok(Line::Edit(edit))
}

fn expect_no_args(rest: &[&str], line: Line) -> Result<Line> {
    if rest.is_empty() {
        Ok(line)
    } else {
        bail!("unexpected arguments: {}", rest.join(" "))
    }
}

fn parse_number(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .with_context(|| format!("'{}' is not a number", s))
}

/// Applies one parsed line to the state. Returns `false` on quit.
fn step<W: Write>(
    state: &mut ColorState,
    line: Line,
    out: &mut W,
    config: RunConfig,
) -> Result<bool> {
    let outcome = match line {
        Line::Empty => return Ok(true),
        Line::Quit => return Ok(false),
        Line::Show => state.outcome(),
        Line::Edit(edit) => {
            let edit = if config.clamp_input {
                edit.clamped()
            } else {
                edit
            };
            state.apply(edit)?
        }
        Line::Channel {
            model,
            channel,
            value,
        } => {
            let value = match (config.clamp_input, model.channel_index(&channel)) {
                (true, Some(i)) => model.ranges()[i].clamp(value),
                _ => value,
            };
            state.set_channel(model, &channel, value)?
        }
        Line::Hex(s) => {
            let rgb = hex::parse(&s)?;
            state.apply(Edit::Rgb(rgb))?
        }
    };
    print_outcome(out, outcome, config)?;
    Ok(true)
}

/// Runs `tint session` over stdin.
pub fn run(config: RunConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with(stdin.lock(), &mut stdout.lock(), config)
}

/// Session loop over any reader and writer.
pub fn run_with<R: BufRead, W: Write>(input: R, out: &mut W, config: RunConfig) -> Result<()> {
    let mut state =
        ColorState::with_options(config.sync).context("Failed to initialize color state")?;
    log_verbose(&format!("Session started at {}", state.swatch().rgb));
    print_outcome(out, state.outcome(), config)?;

    for (n, line) in input.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let result = parse_line(&line).and_then(|parsed| step(&mut state, parsed, out, config));
        match result {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                tracing::debug!(line = n + 1, error = %e, "rejected line");
                writeln!(out, "Incorrect color value. {}", e)?;
            }
        }
    }

    log_verbose(&format!("Session ended after {} edits", state.edits()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RunConfig {
        RunConfig {
            json: false,
            clamp_input: false,
            sync: Default::default(),
        }
    }

    fn session(input: &str, config: RunConfig) -> String {
        let mut out = Vec::new();
        run_with(input.as_bytes(), &mut out, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_whole_edits() {
        assert_eq!(
            parse_line("rgb 18 52 86").unwrap(),
            Line::Edit(Edit::Rgb(Rgb::new(18.0, 52.0, 86.0)))
        );
        assert_eq!(
            parse_line("  CMYK 0 50 50 10 ").unwrap(),
            Line::Edit(Edit::Cmyk(Cmyk::new(0.0, 50.0, 50.0, 10.0)))
        );
        assert_eq!(
            parse_line("lab 50 20 -30").unwrap(),
            Line::Edit(Edit::Lab(Lab::new(50.0, 20.0, -30.0)))
        );
    }

    #[test]
    fn test_parse_channel_and_commands() {
        assert_eq!(
            parse_line("lab.L 60").unwrap(),
            Line::Channel {
                model: Model::Lab,
                channel: "L".into(),
                value: 60.0
            }
        );
        assert_eq!(parse_line("hex #123456").unwrap(), Line::Hex("#123456".into()));
        assert_eq!(parse_line("show").unwrap(), Line::Show);
        assert_eq!(parse_line("quit").unwrap(), Line::Quit);
        assert_eq!(parse_line("   ").unwrap(), Line::Empty);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("rgb 1 2").is_err());
        assert!(parse_line("cmyk 1 2 3").is_err());
        assert!(parse_line("rgb 1 two 3").is_err());
        assert!(parse_line("hsv 1 2 3").is_err());
        assert!(parse_line("xyz.x 1").is_err());
        assert!(parse_line("show now").is_err());
    }

    #[test]
    fn test_session_keeps_state_on_error() {
        let text = session("rgb 18 52 86\nrgb nan 0 0\nshow\n", config());
        assert!(text.contains("Incorrect color value."));
        let shows: Vec<&str> = text.lines().filter(|l| l.starts_with("Hex")).collect();
        // initial, first edit, show
        assert_eq!(shows, ["Hex   #ff0000", "Hex   #123456", "Hex   #123456"]);
    }

    #[test]
    fn test_session_channel_edit_and_quit() {
        let text = session("cmyk.k 50\nquit\nrgb 0 0 0\n", config());
        let hexes: Vec<&str> = text.lines().filter(|l| l.starts_with("Hex")).collect();
        assert_eq!(hexes, ["Hex   #ff0000", "Hex   #800000"]);
    }

    #[test]
    fn test_session_clamp_input() {
        let mut cfg = config();
        cfg.clamp_input = true;
        let text = session("cmyk.k 150\n", cfg);
        assert!(!text.contains("Warning"));
        assert!(text.contains("Hex   #000000"));

        let text = session("cmyk.k 150\n", config());
        assert!(text.contains("Warning: RGB value out of range (0-255)."));
    }
}
