//! Bidirectional symbol ↔ code table.
//!
//! The forward mapping is loaded from an embedded TOML file (or a custom one
//! installed via `MorseTable::init_custom`); the inverse is derived from it
//! once, at construction.

mod config;
mod symbols;

pub use config::{is_code, parse_morse_toml, MorseConfigError};
pub use symbols::MorseTable;

pub const DEFAULT_TOML: &str = include_str!("default_morse.toml");

pub(crate) const PROSIGN_OPEN: char = '<';
pub(crate) const PROSIGN_CLOSE: char = '>';
