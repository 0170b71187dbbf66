use thiserror::Error;

/// A failed parse: what went wrong and where.
///
/// `offset` is the byte index at which the failure was detected. `line` and
/// `column` are 1-based and derived from it, counting `\n` as the line break
/// and columns in bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct ParserError {
    pub(crate) source: SyntaxError,
    /// Byte offset into the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, in bytes.
    pub column: usize,
}

impl ParserError {
    pub(crate) fn new(source: SyntaxError, offset: usize, input: &[u8]) -> Self {
        let consumed = &input[..offset.min(input.len())];
        let line = 1 + consumed.iter().filter(|&&b| b == b'\n').count();
        let column = match consumed.iter().rposition(|&b| b == b'\n') {
            Some(newline) => offset - newline,
            None => offset + 1,
        };
        Self {
            source,
            offset,
            line,
            column,
        }
    }

    /// The category of the failure.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.source
    }
}

/// The category of a [`ParserError`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// Input ended in the middle of a value.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A specific structural byte was required but another one was found.
    #[error("expected '{}', found '{}'", .expected.escape_ascii(), .found.escape_ascii())]
    UnexpectedCharacter {
        /// The byte the grammar required.
        expected: u8,
        /// The byte actually present.
        found: u8,
    },
    /// A string had no closing quote.
    #[error("unterminated string")]
    UnterminatedString,
    /// A number had no digit where one was required.
    #[error("expected digit, found '{}'", .0.escape_ascii())]
    MissingDigit(u8),
    /// A literal was misspelled. Only reported with strict literals.
    #[error("invalid literal, expected `{0}`")]
    InvalidLiteral(&'static str),
    /// Containers were nested deeper than the configured limit.
    #[error("nesting exceeds {0} levels")]
    NestingTooDeep(usize),
    /// Something other than whitespace followed the value. Only reported when
    /// trailing content is rejected.
    #[error("trailing content after value")]
    TrailingContent,
}
