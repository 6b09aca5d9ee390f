use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_morse_toml, validate_mappings, MorseConfigError};
use super::DEFAULT_TOML;
use crate::MorseError;

static INSTANCE: OnceLock<MorseTable> = OnceLock::new();

/// Immutable symbol ↔ code mapping.
///
/// `forward` is keyed by uppercase symbol; `reverse` is derived from it by
/// inverting every entry exactly once, so codes are unique by construction.
#[derive(Debug, Clone)]
pub struct MorseTable {
    forward: BTreeMap<String, String>,
    reverse: HashMap<String, String>,
}

impl MorseTable {
    /// Install a custom table as the global singleton.
    ///
    /// Must run before the first `global()` call; once the singleton exists
    /// (default or custom) this fails with `AlreadyInitialized`. Invalid TOML
    /// is reported first either way.
    pub fn init_custom(toml_content: String) -> Result<(), MorseConfigError> {
        let table = Self::from_toml(&toml_content)?;
        INSTANCE
            .set(table)
            .map_err(|_| MorseConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static MorseTable {
        INSTANCE.get_or_init(|| {
            let map = parse_morse_toml(DEFAULT_TOML).expect("morse TOML must be valid");
            Self::build(map)
        })
    }

    /// Build a standalone table from TOML text, bypassing the global singleton.
    pub fn from_toml(toml_str: &str) -> Result<Self, MorseConfigError> {
        parse_morse_toml(toml_str).map(Self::build)
    }

    /// Build a standalone table from `(symbol, code)` pairs.
    pub fn from_mappings<I, S, C>(mappings: I) -> Result<Self, MorseConfigError>
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<String>,
    {
        let mut forward = BTreeMap::new();
        for (symbol, code) in mappings {
            let symbol = symbol.into();
            if forward.contains_key(&symbol) {
                return Err(MorseConfigError::DuplicateSymbol(symbol));
            }
            forward.insert(symbol, code.into());
        }
        validate_mappings(&forward)?;
        Ok(Self::build(forward))
    }

    /// `forward` must already be validated.
    fn build(forward: BTreeMap<String, String>) -> Self {
        let reverse: HashMap<String, String> = forward
            .iter()
            .map(|(symbol, code)| (code.clone(), symbol.clone()))
            .collect();
        debug_assert_eq!(reverse.len(), forward.len(), "duplicate morse code");
        debug!(symbols = forward.len(), "morse table built");
        Self { forward, reverse }
    }

    /// Look up the code for one symbol (a character or a `<PROSIGN>`).
    /// Lookup is case-insensitive.
    pub fn resolve_code(&self, symbol: &str) -> Result<&str, MorseError> {
        if symbol.is_empty() {
            return Err(MorseError::EmptyInput);
        }
        self.forward
            .get(&symbol.to_uppercase())
            .map(String::as_str)
            .ok_or_else(|| MorseError::UnknownSymbol(symbol.to_string()))
    }

    /// Look up the uppercase symbol for one dot/dash code.
    pub fn resolve_symbol(&self, code: &str) -> Result<&str, MorseError> {
        if code.is_empty() {
            return Err(MorseError::EmptyInput);
        }
        self.reverse
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| MorseError::UnknownCode(code.to_string()))
    }

    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.forward.contains_key(&symbol.to_uppercase())
    }

    /// `(symbol, code)` pairs in symbol order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forward.iter().map(|(s, c)| (s.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter() {
        let table = MorseTable::global();
        assert_eq!(table.resolve_code("A"), Ok(".-"));
        assert_eq!(table.resolve_symbol("-..."), Ok("B"));
    }

    #[test]
    fn test_case_insensitive() {
        let table = MorseTable::global();
        assert_eq!(table.resolve_code("a"), table.resolve_code("A"));
        assert_eq!(table.resolve_code("<sk>"), Ok("...-.-"));
    }

    #[test]
    fn test_empty_input() {
        let table = MorseTable::global();
        assert_eq!(table.resolve_code(""), Err(MorseError::EmptyInput));
        assert_eq!(table.resolve_symbol(""), Err(MorseError::EmptyInput));
    }

    #[test]
    fn test_unknown() {
        let table = MorseTable::global();
        assert_eq!(
            table.resolve_code("ZZ"),
            Err(MorseError::UnknownSymbol("ZZ".into()))
        );
        assert_eq!(
            table.resolve_symbol("ZZ"),
            Err(MorseError::UnknownCode("ZZ".into()))
        );
        assert_eq!(
            table.resolve_symbol("........"),
            Err(MorseError::UnknownCode("........".into()))
        );
    }

    #[test]
    fn test_prosigns() {
        let table = MorseTable::global();
        for (prosign, code) in [
            ("<BT>", "-...-"),
            ("<AR>", ".-.-."),
            ("<BK>", "-...-.-"),
            ("<SK>", "...-.-"),
        ] {
            assert_eq!(table.resolve_code(prosign), Ok(code));
            assert_eq!(table.resolve_symbol(code), Ok(prosign));
        }
    }

    #[test]
    fn test_punctuation() {
        let table = MorseTable::global();
        assert_eq!(table.resolve_code("."), Ok(".-.-.-"));
        assert_eq!(table.resolve_code(","), Ok("--..--"));
        assert_eq!(table.resolve_code("?"), Ok("..--.."));
        assert_eq!(table.resolve_code("/"), Ok("-..-."));
        assert_eq!(table.resolve_code(":"), Ok("---..."));
    }

    #[test]
    fn test_all_mappings_roundtrip() {
        let table = MorseTable::global();
        for (symbol, code) in table.entries() {
            assert_eq!(table.resolve_code(symbol), Ok(code));
            assert_eq!(table.resolve_symbol(code), Ok(symbol));
            assert_eq!(
                table.resolve_symbol(table.resolve_code(&symbol.to_lowercase()).unwrap()),
                Ok(symbol),
                "lowercase roundtrip failed for {symbol}"
            );
        }
    }

    #[test]
    fn test_bijection() {
        let table = MorseTable::global();
        let mut codes: Vec<&str> = table.entries().map(|(_, c)| c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), table.len());
    }

    #[test]
    fn test_contents() {
        let table = MorseTable::global();
        assert_eq!(table.len(), 45);
        assert!(!table.is_empty());
        for c in ('A'..='Z').chain('0'..='9') {
            assert!(table.contains_symbol(&c.to_string()), "missing {c}");
        }
        assert!(table.contains_symbol("<ar>"));
        assert!(!table.contains_symbol("#"));
    }

    #[test]
    fn test_from_mappings() {
        let table = MorseTable::from_mappings([("E", "."), ("T", "-")]).unwrap();
        assert_eq!(table.resolve_code("e"), Ok("."));
        assert_eq!(table.resolve_symbol("-"), Ok("T"));
        assert_eq!(
            table.resolve_code("A"),
            Err(MorseError::UnknownSymbol("A".into()))
        );
    }

    #[test]
    fn test_from_mappings_rejects_duplicates() {
        let err = MorseTable::from_mappings([("E", "."), ("I", ".")]).unwrap_err();
        assert!(matches!(err, MorseConfigError::DuplicateCode { .. }));

        let err = MorseTable::from_mappings([("E", "."), ("E", "-")]).unwrap_err();
        assert!(matches!(err, MorseConfigError::DuplicateSymbol(ref s) if s == "E"));
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
[mappings]
"<KN>" = "-.--."
"#;
        let table = MorseTable::from_toml(toml).unwrap();
        assert_eq!(table.resolve_code("<KN>"), Ok("-.--."));
        assert!(MorseTable::from_toml("[mappings]\n").is_err());
    }

    #[test]
    fn test_init_custom_rejects_invalid() {
        let err = MorseTable::init_custom("[mappings]\n".to_string()).unwrap_err();
        assert!(matches!(err, MorseConfigError::Empty));
    }
}
