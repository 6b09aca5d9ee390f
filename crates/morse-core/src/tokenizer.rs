//! Splits text into atomic symbols: single characters, or whole
//! `<PROSIGN>` tokens including both brackets.
//!
//! Works over raw bytes so callers can advance a cursor by the number of
//! bytes each symbol occupied, and so malformed UTF-8 is reported as a stop
//! rather than a panic.

use crate::table::{PROSIGN_CLOSE, PROSIGN_OPEN};

/// Decode the first character of `bytes`.
///
/// Returns the character and its width in bytes, or `None` when `bytes` is
/// empty or does not start with a valid UTF-8 sequence.
pub fn decode_char(bytes: &[u8]) -> Option<(char, usize)> {
    let head = &bytes[..bytes.len().min(4)];
    let valid = match std::str::from_utf8(head) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&head[..e.valid_up_to()]).ok()?,
    };
    let ch = valid.chars().next()?;
    Some((ch, ch.len_utf8()))
}

/// Extract the next symbol from the start of `input`.
///
/// Returns the symbol and the number of bytes it consumed. A `<` opens a
/// prosign and accumulation continues through the matching `>`; an
/// unterminated prosign swallows everything up to the end of input (or the
/// first malformed byte). Empty or malformed input yields `("", 0)`.
pub fn next_symbol(input: &[u8]) -> (String, usize) {
    let mut symbol = String::new();
    let mut consumed = 0;
    let mut in_prosign = false;

    while let Some((ch, width)) = decode_char(&input[consumed..]) {
        consumed += width;
        symbol.push(ch);
        if ch == PROSIGN_OPEN {
            in_prosign = true;
            continue;
        }
        if in_prosign && ch != PROSIGN_CLOSE {
            continue;
        }
        break;
    }

    (symbol, consumed)
}

/// Iterator over the symbols of a `&str`.
///
/// Valid UTF-8 never produces a zero-width step, so this always reaches the
/// end of the input.
pub struct Symbols<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Symbols<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let (_, width) = next_symbol(self.rest.as_bytes());
        let (symbol, rest) = self.rest.split_at(width);
        self.rest = rest;
        Some(symbol)
    }
}

pub fn symbols(text: &str) -> Symbols<'_> {
    Symbols { rest: text }
}
