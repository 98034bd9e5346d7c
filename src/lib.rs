// src/lib.rs
//! caesar-shift: Caesar cipher transform and shift visualization data
//!
//! Features:
//! - Total, pure `transform(text, shift, mode)` over any `&str`
//! - Shift normalisation for negative and out-of-range values
//! - Shifted alphabet and per-character mappings for visualizers
//! - TOML config with env overrides
//!
//! ```
//! use caesar_shift::{transform, Mode};
//!
//! assert_eq!(transform("HELLO", 3, Mode::Encrypt), "KHOOR");
//! assert_eq!(transform("KHOOR", 3, Mode::Decrypt), "HELLO");
//! ```

pub mod cli;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crate::core::{
    all_shifts, character_mappings, decrypt, encrypt, shifted_alphabet, to_json, transform,
    visualize, Cipher, CharMapping, Visualization,
};
pub use enums::{AlphabetBand, CharClass, Mode};
pub use error::{CoreError, Result};
