use thiserror::Error;

/// Why a piece of text is not a numeral, and where the scanner noticed.
///
/// `offset` counts code units of the original input: bytes for `&str`,
/// UTF-16 units for `&[u16]`. Leading whitespace is included in the count.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct ParseNumberError {
    pub(crate) kind: SyntaxError,
    pub(crate) offset: usize,
}

impl ParseNumberError {
    pub(crate) fn new(kind: SyntaxError, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The syntax rule that was violated.
    #[must_use]
    pub fn kind(&self) -> SyntaxError {
        self.kind
    }

    /// Position of the offending code unit in the original input.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// The ways a numeral can fail to match the grammar.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// Nothing but whitespace.
    #[error("empty numeral")]
    Empty,
    /// A character that cannot continue the numeral read so far.
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    /// The input ended before the numeral was complete, e.g. `"0x"` or `"1e"`.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A complete numeral was read but more text follows it.
    #[error("unexpected trailing character '{0}'")]
    TrailingCharacter(char),
}
