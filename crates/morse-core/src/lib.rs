//! Text ↔ International Morse code translation.
//!
//! `table` holds the bidirectional symbol/code mapping, `tokenizer` splits
//! text into atomic symbols (characters and `<PROSIGN>`s), and `convert`
//! composes the two into whole-string conversions.

pub mod convert;
mod error;
pub mod table;
pub mod tokenizer;

pub use convert::{decode_string, decode_words, encode_bytes, encode_string, encode_words};
pub use error::MorseError;
pub use table::{MorseConfigError, MorseTable};
