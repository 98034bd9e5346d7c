// src/core/visual.rs
//! Derived data for visualising a shift
//!
//! Nothing here has its own cipher logic: the shifted alphabet and the
//! per-character mappings are all produced by calling [`transform`].

use serde::Serialize;

use crate::consts::{ALPHABET, EARLY_BAND_END, MIDDLE_BAND_END};
use crate::core::cipher::{effective_shift, normalize_shift, transform};
use crate::enums::{AlphabetBand, Mode};
use crate::error::Result;

/// The alphabet as it reads after applying the shift
///
/// `shifted_alphabet(3, Mode::Encrypt)` is `"DEFGHIJKLMNOPQRSTUVWXYZABC"`.
pub fn shifted_alphabet(shift: i64, mode: Mode) -> String {
    transform(ALPHABET, shift, mode)
}

/// Plain letter → substituted letter, in alphabet order
pub fn alphabet_pairs(shift: i64, mode: Mode) -> Vec<(char, char)> {
    ALPHABET
        .chars()
        .zip(shifted_alphabet(shift, mode).chars())
        .collect()
}

/// Which third of the alphabet `c` belongs to, ignoring case
pub fn band_of(c: char) -> AlphabetBand {
    if !c.is_ascii_alphabetic() {
        return AlphabetBand::NonLetter;
    }
    let index = c.to_ascii_uppercase() as u8 - b'A';
    if index < EARLY_BAND_END {
        AlphabetBand::Early
    } else if index < MIDDLE_BAND_END {
        AlphabetBand::Middle
    } else {
        AlphabetBand::Late
    }
}

/// One input character and what it became
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharMapping {
    pub original: char,
    pub transformed: char,
    pub original_band: AlphabetBand,
    pub transformed_band: AlphabetBand,
}

/// Position-by-position mapping of `text` through the shift
pub fn character_mappings(text: &str, shift: i64, mode: Mode) -> Vec<CharMapping> {
    let output = transform(text, shift, mode);
    text.chars()
        .zip(output.chars())
        .map(|(original, transformed)| CharMapping {
            original,
            transformed,
            original_band: band_of(original),
            transformed_band: band_of(transformed),
        })
        .collect()
}

/// Everything a visualizer needs for one run, ready to serialise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visualization {
    pub mode: Mode,
    pub shift: u8,
    pub effective_shift: u8,
    pub alphabet: String,
    pub shifted_alphabet: String,
    pub mappings: Vec<CharMapping>,
    pub output: String,
}

/// Run `text` through the shift and collect the alphabet and mapping views alongside the output
pub fn visualize(text: &str, shift: i64, mode: Mode) -> Visualization {
    let mappings = character_mappings(text, shift, mode);
    let output = mappings.iter().map(|m| m.transformed).collect();

    Visualization {
        mode,
        shift: normalize_shift(shift),
        effective_shift: effective_shift(shift, mode),
        alphabet: ALPHABET.to_owned(),
        shifted_alphabet: shifted_alphabet(shift, mode),
        mappings,
        output,
    }
}

/// Pretty-printed JSON for a [`Visualization`]
pub fn to_json(report: &Visualization) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
