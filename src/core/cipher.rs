// src/core/cipher.rs
//! Pure Caesar-shift primitives: no I/O, no config, no logging
//!
//! Everything here is total over its input: any `i64` shift is reduced
//! modulo 26 and any character that is not a basic-Latin letter passes
//! through untouched.

use serde::{Deserialize, Serialize};

use crate::consts::{ALPHABET_LEN, DEFAULT_SHIFT, MAX_USER_SHIFT, MIN_USER_SHIFT};
use crate::enums::{CharClass, Mode};
use crate::error::{CoreError, Result};

/// Reduce any shift into `0..26`
#[inline]
pub fn normalize_shift(shift: i64) -> u8 {
    // rem_euclid is never negative, so the cast is lossless
    shift.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// The shift actually applied: `shift` for encrypt, its additive inverse for decrypt
#[inline]
pub fn effective_shift(shift: i64, mode: Mode) -> u8 {
    let shift = normalize_shift(shift);
    match mode {
        Mode::Encrypt => shift,
        Mode::Decrypt => (ALPHABET_LEN - shift) % ALPHABET_LEN,
    }
}

#[inline]
pub fn classify(c: char) -> CharClass {
    if c.is_ascii_uppercase() {
        CharClass::Upper
    } else if c.is_ascii_lowercase() {
        CharClass::Lower
    } else {
        CharClass::Other
    }
}

/// Shift one character forward by `effective` positions, preserving case
///
/// `effective` is expected in `0..26`; larger values are reduced first.
pub fn shift_char(c: char, effective: u8) -> char {
    let base = match classify(c) {
        CharClass::Upper => b'A',
        CharClass::Lower => b'a',
        CharClass::Other => return c,
    };
    let offset = (c as u8 - base + effective % ALPHABET_LEN) % ALPHABET_LEN;
    (base + offset) as char
}

/// Apply the Caesar shift to every character of `text`
pub fn transform(text: &str, shift: i64, mode: Mode) -> String {
    let effective = effective_shift(shift, mode);
    text.chars().map(|c| shift_char(c, effective)).collect()
}

#[inline]
pub fn encrypt(text: &str, shift: i64) -> String {
    transform(text, shift, Mode::Encrypt)
}

#[inline]
pub fn decrypt(text: &str, shift: i64) -> String {
    transform(text, shift, Mode::Decrypt)
}

/// Every non-trivial decryption of `ciphertext`, as `(shift, plaintext)` pairs for shifts 1..=25
pub fn all_shifts(ciphertext: &str) -> Vec<(u8, String)> {
    (MIN_USER_SHIFT..=MAX_USER_SHIFT)
        .map(|s| (s as u8, decrypt(ciphertext, s)))
        .collect()
}

/// Check a shift picked by a user against the `1..=25` range
///
/// The transform accepts anything; this exists for front ends that want to
/// reject a 0 or out-of-range shift instead of silently normalising it.
pub fn validate_user_shift(shift: i64) -> Result<u8> {
    if (MIN_USER_SHIFT..=MAX_USER_SHIFT).contains(&shift) {
        Ok(shift as u8)
    } else {
        Err(CoreError::ShiftOutOfRange(shift))
    }
}

/// A shift and a direction bundled as one value
///
/// The stored shift is always in `0..26`, including after deserialising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCipher")]
pub struct Cipher {
    shift: u8,
    mode: Mode,
}

/// Wire shape of [`Cipher`] before the shift is normalised
#[derive(Deserialize)]
struct RawCipher {
    shift: i64,
    #[serde(default)]
    mode: Mode,
}

impl From<RawCipher> for Cipher {
    fn from(raw: RawCipher) -> Self {
        Cipher::new(raw.shift, raw.mode)
    }
}

impl Cipher {
    pub fn new(shift: i64, mode: Mode) -> Self {
        Self {
            shift: normalize_shift(shift),
            mode,
        }
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn effective_shift(&self) -> u8 {
        effective_shift(self.shift as i64, self.mode)
    }

    pub fn apply(&self, text: &str) -> String {
        transform(text, self.shift as i64, self.mode)
    }

    /// Same shift, opposite direction: `c.inverse().apply(&c.apply(t)) == t`
    pub fn inverse(&self) -> Self {
        Self {
            shift: self.shift,
            mode: self.mode.opposite(),
        }
    }
}

impl Default for Cipher {
    fn default() -> Self {
        Self::new(DEFAULT_SHIFT, Mode::default())
    }
}
