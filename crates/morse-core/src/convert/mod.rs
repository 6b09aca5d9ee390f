//! Whole-string conversions built on the tokenizer and the symbol table.
//!
//! Encoding writes each code followed by one space; a space in the input
//! writes two more, so adjacent words end up three spaces apart. Decoding
//! splits on single spaces, so the output of a multi-word `encode_string`
//! does not decode (the empty tokens between words fail with `EmptyInput`);
//! use `encode_words` / `decode_words` for sentences.

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::tokenizer::{next_symbol, symbols};
use crate::{MorseError, MorseTable};

const WORD_SEPARATOR: &str = " ";
const WORD_GAP: &str = "  ";
const LETTER_GAP: char = ' ';

/// Encode text into space-separated codes.
pub fn encode_string(table: &MorseTable, text: &str) -> Result<String, MorseError> {
    let _span = debug_span!("encode", bytes = text.len()).entered();

    let mut code = String::with_capacity(text.len() * 5);
    for symbol in symbols(text) {
        push_symbol(table, &mut code, symbol)?;
    }

    debug!(code_len = code.len());
    Ok(code)
}

/// Encode UTF-8 bytes into space-separated codes.
///
/// Fails with `MalformedInput` at the first byte offset where no symbol can
/// be decoded.
pub fn encode_bytes(table: &MorseTable, text: &[u8]) -> Result<String, MorseError> {
    let _span = debug_span!("encode_bytes", bytes = text.len()).entered();

    let mut code = String::with_capacity(text.len() * 5);
    let mut offset = 0;
    while offset < text.len() {
        let (symbol, width) = next_symbol(&text[offset..]);
        if width == 0 {
            return Err(MorseError::MalformedInput { offset });
        }
        offset += width;
        push_symbol(table, &mut code, &symbol)?;
    }

    debug!(code_len = code.len());
    Ok(code)
}

/// Append one symbol's code and letter gap, or the word gap for a space.
fn push_symbol(table: &MorseTable, code: &mut String, symbol: &str) -> Result<(), MorseError> {
    if symbol == WORD_SEPARATOR {
        code.push_str(WORD_GAP);
    } else {
        code.push_str(table.resolve_code(symbol)?);
        code.push(LETTER_GAP);
    }
    Ok(())
}

/// Encode each space-delimited word of `text` separately.
///
/// Splits on every single space, so consecutive spaces produce empty
/// entries, and an empty `text` yields one empty entry.
pub fn encode_words(table: &MorseTable, text: &str) -> Result<Vec<String>, MorseError> {
    let _span = debug_span!("encode_words", bytes = text.len()).entered();
    text.split(WORD_SEPARATOR)
        .map(|word| encode_string(table, word))
        .collect()
}

/// Decode space-separated codes into uppercase text.
///
/// Surrounding whitespace is trimmed first. Every token between single
/// spaces must resolve, including empty ones, so `""` fails with `EmptyInput`.
pub fn decode_string(table: &MorseTable, code: &str) -> Result<String, MorseError> {
    let _span = debug_span!("decode", bytes = code.len()).entered();
    code.trim()
        .split(LETTER_GAP)
        .map(|token| table.resolve_symbol(token))
        .collect()
}

/// Decode per-word code strings and join the words with a single space.
pub fn decode_words<S: AsRef<str>>(table: &MorseTable, words: &[S]) -> Result<String, MorseError> {
    let _span = debug_span!("decode_words", words = words.len()).entered();
    let decoded = words
        .iter()
        .map(|word| decode_string(table, word.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(decoded.join(WORD_SEPARATOR))
}
