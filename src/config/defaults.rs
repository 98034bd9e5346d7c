// src/config/defaults.rs
use crate::config::app::{CipherSection, Config, OutputFormat, OutputSection};
use crate::consts::DEFAULT_SHIFT;
use crate::enums::Mode;

pub fn default_shift() -> i64 {
    DEFAULT_SHIFT
}

pub fn default_cipher() -> CipherSection {
    CipherSection {
        shift: default_shift(),
        mode: Mode::default(),
    }
}

pub fn default_output() -> OutputSection {
    OutputSection {
        format: OutputFormat::default(),
        show_alphabet: false,
    }
}

pub fn default_config() -> Config {
    Config {
        cipher: default_cipher(),
        output: default_output(),
    }
}
