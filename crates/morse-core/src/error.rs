/// Failure of a single lookup or a whole conversion.
///
/// Conversions are all-or-nothing: the first failing symbol or code aborts
/// the call and no partial output is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MorseError {
    #[error("empty input")]
    EmptyInput,

    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("unknown morse sequence: {0}")]
    UnknownCode(String),

    #[error("malformed UTF-8 at byte {offset}")]
    MalformedInput { offset: usize },
}
