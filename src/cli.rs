// src/cli.rs
//! Argument resolution and output rendering for the `caesar` binary
//!
//! The binary only parses flags and does I/O. Everything that decides what
//! to run (flag vs config precedence, shift validation) and what to print
//! lives here so it can be tested without spawning a process.

use tracing::debug;

use crate::config::{Config, OutputFormat};
use crate::consts::ALPHABET;
use crate::core::{all_shifts, shifted_alphabet, to_json, transform, validate_user_shift, visualize};
use crate::enums::Mode;
use crate::error::Result;

/// Subcommand picked on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Encrypt,
    Decrypt,
    Brute,
}

/// Flags that override the config when present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub shift: Option<i64>,
    pub json: bool,
    pub alphabet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Encrypt or decrypt with a validated user shift
    Shift { mode: Mode, shift: u8 },
    /// List every decryption; no shift involved
    Brute,
}

/// Fully resolved run: what to do and how to print it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub action: Action,
    pub format: OutputFormat,
    pub show_alphabet: bool,
}

/// Merge subcommand, flags and config into a [`Plan`]
///
/// Flags win over the config. With no subcommand the configured mode is
/// used. The shift must lie in `1..=25` unless the task is `Brute`, which
/// ignores it.
pub fn resolve(task: Option<Task>, overrides: &Overrides, conf: &Config) -> Result<Plan> {
    let format = if overrides.json {
        OutputFormat::Json
    } else {
        conf.output.format
    };
    let show_alphabet = overrides.alphabet || conf.output.show_alphabet;

    let mode = match task {
        Some(Task::Brute) => {
            return Ok(Plan {
                action: Action::Brute,
                format,
                show_alphabet,
            })
        }
        Some(Task::Encrypt) => Mode::Encrypt,
        Some(Task::Decrypt) => Mode::Decrypt,
        None => conf.cipher.mode,
    };

    let shift = validate_user_shift(overrides.shift.unwrap_or(conf.cipher.shift))?;
    debug!(%mode, shift, ?format, "Resolved run");

    Ok(Plan {
        action: Action::Shift { mode, shift },
        format,
        show_alphabet,
    })
}

/// Remove one trailing `\n` or `\r\n`, as left by a shell pipe
pub fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Everything the binary prints for `plan` applied to `text`, without a final newline
pub fn render(plan: &Plan, text: &str) -> Result<String> {
    let (mode, shift) = match plan.action {
        Action::Brute => {
            let lines: Vec<String> = all_shifts(text)
                .into_iter()
                .map(|(shift, candidate)| format!("{shift:>2}: {candidate}"))
                .collect();
            return Ok(lines.join("\n"));
        }
        Action::Shift { mode, shift } => (mode, shift as i64),
    };

    if plan.format == OutputFormat::Json {
        return to_json(&visualize(text, shift, mode));
    }

    let output = transform(text, shift, mode);
    if plan.show_alphabet {
        Ok(format!(
            "{ALPHABET}\n{}\n\n{output}",
            shifted_alphabet(shift, mode)
        ))
    } else {
        Ok(output)
    }
}
