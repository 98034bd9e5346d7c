// src/consts.rs
//! Shared constants: the alphabet, shift bounds and defaults

/// The 26-letter basic-Latin alphabet, upper case
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters every shift is reduced modulo
pub const ALPHABET_LEN: u8 = 26;

/// Shift used when neither the caller nor the config provide one
pub const DEFAULT_SHIFT: i64 = 3;

/// Smallest shift a user may pick (0 is a valid no-op for the transform itself)
pub const MIN_USER_SHIFT: i64 = 1;

/// Largest shift a user may pick
pub const MAX_USER_SHIFT: i64 = 25;

/// Letters with alphabet index below this fall in the early band (A–I)
pub const EARLY_BAND_END: u8 = 9;

/// Letters with alphabet index below this (and not early) fall in the middle band (J–R)
pub const MIDDLE_BAND_END: u8 = 18;

/// Config file looked up in the working directory when `CAESAR_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "caesar.toml";
