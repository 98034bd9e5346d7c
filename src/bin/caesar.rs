// src/bin/caesar.rs
//! caesar: encrypt, decrypt or brute-force text from the command line

use std::io::Read;

use anyhow::{Context, Result};
use caesar_shift::cli::{render, resolve, strip_trailing_newline, Overrides, Task};
use caesar_shift::config;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "caesar", version, about = "Caesar cipher encryption and decryption")]
struct Cli {
    /// Shift in 1..=25 (defaults to the configured shift)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    shift: Option<i64>,

    /// Print the full visualization as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print the plain and shifted alphabets above the result
    #[arg(long, global = true)]
    alphabet: bool,

    /// Text to run through the configured mode when no subcommand is given
    text: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shift letters forward
    Encrypt {
        /// Text to encrypt; read from stdin when omitted
        text: Option<String>,
    },
    /// Shift letters back
    Decrypt {
        /// Text to decrypt; read from stdin when omitted
        text: Option<String>,
    },
    /// Try every shift from 1 to 25
    Brute {
        /// Ciphertext; read from stdin when omitted
        text: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let conf = config::load();
    debug!(?conf, "Effective config");

    let (task, text) = match cli.command {
        Some(Command::Encrypt { text }) => (Some(Task::Encrypt), text),
        Some(Command::Decrypt { text }) => (Some(Task::Decrypt), text),
        Some(Command::Brute { text }) => (Some(Task::Brute), text),
        None => (None, cli.text),
    };

    let overrides = Overrides {
        shift: cli.shift,
        json: cli.json,
        alphabet: cli.alphabet,
    };
    let plan = resolve(task, &overrides, conf)?;
    let text = read_text(text)?;
    info!(action = ?plan.action, chars = text.chars().count(), "Running cipher");

    println!("{}", render(&plan, &text)?);
    Ok(())
}

fn read_text(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            Ok(strip_trailing_newline(buf))
        }
    }
}
