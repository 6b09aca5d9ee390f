use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::{PROSIGN_CLOSE, PROSIGN_OPEN};

#[derive(Deserialize)]
struct MorseConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MorseConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(String),
    #[error("symbol listed more than once: {0}")]
    DuplicateSymbol(String),
    #[error("symbol must be uppercase: {0}")]
    NotUppercase(String),
    #[error("invalid code for {symbol}: {code:?}")]
    InvalidCode { symbol: String, code: String },
    #[error("code {code} assigned to both {first} and {second}")]
    DuplicateCode {
        code: String,
        first: String,
        second: String,
    },
    #[error("morse table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a validated, sorted `BTreeMap<symbol, code>`.
pub fn parse_morse_toml(toml_str: &str) -> Result<BTreeMap<String, String>, MorseConfigError> {
    let config: MorseConfig =
        toml::from_str(toml_str).map_err(|e| MorseConfigError::Parse(e.to_string()))?;
    validate_mappings(&config.mappings)?;
    Ok(config.mappings)
}

/// Check a symbol → code mapping before it is turned into a table.
///
/// Symbols must be one non-space character or a `<NAME>` prosign, already
/// uppercase. Codes must be nonempty dot/dash strings, unique across the map.
pub(super) fn validate_mappings(mappings: &BTreeMap<String, String>) -> Result<(), MorseConfigError> {
    if mappings.is_empty() {
        return Err(MorseConfigError::Empty);
    }

    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(mappings.len());
    for (symbol, code) in mappings {
        if !is_symbol(symbol) {
            return Err(MorseConfigError::InvalidSymbol(symbol.clone()));
        }
        if symbol.to_uppercase() != *symbol {
            return Err(MorseConfigError::NotUppercase(symbol.clone()));
        }
        if !is_code(code) {
            return Err(MorseConfigError::InvalidCode {
                symbol: symbol.clone(),
                code: code.clone(),
            });
        }
        if let Some(first) = seen.insert(code, symbol) {
            return Err(MorseConfigError::DuplicateCode {
                code: code.clone(),
                first: first.to_string(),
                second: symbol.clone(),
            });
        }
    }
    Ok(())
}

/// Whether `s` is a nonempty string over `{'.', '-'}`.
pub fn is_code(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'.' || b == b'-')
}

fn is_symbol(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => !c.is_whitespace() && c != PROSIGN_OPEN,
        (Some(PROSIGN_OPEN), Some(_)) => {
            let Some(name) = s
                .strip_prefix(PROSIGN_OPEN)
                .and_then(|rest| rest.strip_suffix(PROSIGN_CLOSE))
            else {
                return false;
            };
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| !c.is_whitespace() && c != PROSIGN_OPEN && c != PROSIGN_CLOSE)
        }
        _ => false,
    }
}
