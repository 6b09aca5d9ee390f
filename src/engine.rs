use std::sync::{Arc, OnceLock};

use morse_core::{convert, MorseConfigError, MorseError, MorseTable};
use tracing::debug_span;

/// Shared handle to a symbol table plus the conversions that use it.
///
/// Cloning is cheap; clones share the same table and can be used from
/// any number of threads.
#[derive(Debug, Clone)]
pub struct MorseEngine {
    table: Arc<MorseTable>,
}

impl MorseEngine {
    pub fn new(table: Arc<MorseTable>) -> Self {
        Self { table }
    }

    /// Engine over the process-wide table. Every such engine shares one
    /// `Arc`, cloned from `MorseTable::global()` on first use.
    pub fn global() -> Self {
        static SHARED: OnceLock<Arc<MorseTable>> = OnceLock::new();
        let table = SHARED.get_or_init(|| Arc::new(MorseTable::global().clone()));
        Self::new(Arc::clone(table))
    }

    /// Engine over a table parsed from TOML (`[mappings]` section).
    pub fn from_toml(toml_str: &str) -> Result<Self, MorseConfigError> {
        let _span = debug_span!("engine_from_toml", bytes = toml_str.len()).entered();
        MorseTable::from_toml(toml_str).map(|table| Self::new(Arc::new(table)))
    }

    pub fn table(&self) -> &MorseTable {
        &self.table
    }

    /// Symbol → code.
    pub fn char_to_code(&self, symbol: &str) -> Result<String, MorseError> {
        self.table.resolve_code(symbol).map(str::to_string)
    }

    /// Code → symbol.
    pub fn code_to_char(&self, code: &str) -> Result<String, MorseError> {
        self.table.resolve_symbol(code).map(str::to_string)
    }

    /// Text → space-joined codes.
    pub fn string_to_code(&self, text: &str) -> Result<String, MorseError> {
        convert::encode_string(&self.table, text)
    }

    /// Raw bytes → space-joined codes. Malformed UTF-8 is an error.
    pub fn bytes_to_code(&self, text: &[u8]) -> Result<String, MorseError> {
        convert::encode_bytes(&self.table, text)
    }

    /// Space-separated codes → text.
    pub fn code_to_string(&self, code: &str) -> Result<String, MorseError> {
        convert::decode_string(&self.table, code)
    }

    /// Text → one code string per space-delimited word.
    pub fn string_to_code_words(&self, text: &str) -> Result<Vec<String>, MorseError> {
        convert::encode_words(&self.table, text)
    }

    /// Per-word code strings → text with words separated by single spaces.
    pub fn code_words_to_string<S: AsRef<str>>(&self, words: &[S]) -> Result<String, MorseError> {
        convert::decode_words(&self.table, words)
    }
}

impl Default for MorseEngine {
    fn default() -> Self {
        Self::global()
    }
}
