//! Morse translation engine.
//!
//! `MorseEngine` shares one immutable `MorseTable` between callers and
//! exposes the text ↔ code conversions from `morse_core`.

mod engine;
mod trace_init;

pub use engine::MorseEngine;
pub use morse_core::{MorseConfigError, MorseError, MorseTable};
pub use trace_init::init_tracing;
