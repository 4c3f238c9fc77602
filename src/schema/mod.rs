//! Schema module - scene configuration types.

mod config;

pub use config::*;
