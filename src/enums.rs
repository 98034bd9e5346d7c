// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the small value enums that describe a cipher run:
//! the direction of the shift, how a character is classified, and which
//! band of the alphabet a letter falls in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Direction of a cipher run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

impl Mode {
    /// The other direction. Toggling twice gives back the original mode.
    pub fn opposite(self) -> Self {
        match self {
            Mode::Encrypt => Mode::Decrypt,
            Mode::Decrypt => Mode::Encrypt,
        }
    }

    /// Lowercase name, as used in config files and JSON
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" | "enc" | "e" => Ok(Mode::Encrypt),
            "decrypt" | "dec" | "d" => Ok(Mode::Decrypt),
            _ => Err(CoreError::InvalidMode(s.to_owned())),
        }
    }
}

/// Per-character classification used by the transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// `A`–`Z`
    Upper,
    /// `a`–`z`
    Lower,
    /// Everything else, passed through unchanged
    Other,
}

/// Third of the alphabet a character falls in
///
/// The visualizer colours letters by band; non-letters get their own bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphabetBand {
    /// A–I
    Early,
    /// J–R
    Middle,
    /// S–Z
    Late,
    NonLetter,
}
