// src/error.rs
//! Public error type for the entire crate
//!
//! The cipher transform itself never fails. These variants cover the outer
//! surfaces only: parsing user input, reading config, emitting JSON.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown mode {0:?}, expected \"encrypt\" or \"decrypt\"")]
    InvalidMode(String),

    #[error("Shift {0} is outside the allowed range 1..=25")]
    ShiftOutOfRange(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
