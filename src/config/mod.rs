// src/config/mod.rs
//! Configuration system for caesar-shift
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{
    apply_env_overrides, config_path, load, load_from, CipherSection, Config, OutputFormat,
    OutputSection,
};

mod app;
mod defaults;
