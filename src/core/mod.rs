// src/core/mod.rs
pub mod cipher;
pub mod visual;

pub use cipher::*;
pub use visual::*;
