//! Scanner: a byte cursor over the caller's input.
//!
//! Every sub-parser reads through these primitives. The scanner never
//! retains the input past the parse and never fails on its own; the
//! fallible helpers turn an absent or wrong byte into a positioned
//! [`ParserError`].

use super::error::{ParserError, SyntaxError};

/// Whitespace as C's `isspace` sees it: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[derive(Debug, Clone)]
pub(crate) struct Scanner<'src> {
    input: &'src [u8],
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(input: &'src [u8]) -> Self {
        Self { input, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The unread part of the input.
    pub(crate) fn remaining(&self) -> &'src [u8] {
        self.input.get(self.pos..).unwrap_or_default()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// End check: the next byte, or an end-of-input failure.
    pub(crate) fn require(&self) -> Result<u8, ParserError> {
        self.peek()
            .ok_or_else(|| self.error(SyntaxError::UnexpectedEndOfInput))
    }

    /// Consumes `expected`, failing on any other byte or at the end.
    pub(crate) fn expect(&mut self, expected: u8) -> Result<(), ParserError> {
        let found = self.require()?;
        if found != expected {
            return Err(self.error(SyntaxError::UnexpectedCharacter { expected, found }));
        }
        self.pos += 1;
        Ok(())
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consumes one byte already inspected with [`peek`](Self::peek).
    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    /// Consumes `n` bytes, failing if fewer remain.
    pub(crate) fn advance(&mut self, n: usize) -> Result<(), ParserError> {
        if self.remaining().len() < n {
            return Err(self.end_of_input());
        }
        self.pos += n;
        Ok(())
    }

    pub(crate) fn error(&self, source: SyntaxError) -> ParserError {
        self.error_at(self.pos, source)
    }

    pub(crate) fn error_at(&self, offset: usize, source: SyntaxError) -> ParserError {
        ParserError::new(source, offset, self.input)
    }

    /// An end-of-input failure positioned at the end of the buffer.
    pub(crate) fn end_of_input(&self) -> ParserError {
        self.error_at(self.input.len(), SyntaxError::UnexpectedEndOfInput)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn skip_whitespace_covers_the_isspace_set() {
        let mut s = Scanner::new(b" \t\n\x0b\x0c\rx");
        s.skip_whitespace();
        assert_eq!(s.position(), 6);
        assert_eq!(s.peek(), Some(b'x'));
        // Never fails, even at the end.
        s.bump();
        s.skip_whitespace();
        assert!(s.is_at_end());
    }

    #[test]
    fn expect_consumes_only_on_match() {
        let mut s = Scanner::new(b"{}");
        assert!(s.expect(b'{').is_ok());
        let err = s.expect(b',').unwrap_err();
        assert_eq!(
            *err.kind(),
            SyntaxError::UnexpectedCharacter {
                expected: b',',
                found: b'}'
            }
        );
        assert_eq!(err.offset, 1);
        assert_eq!(s.position(), 1);
        assert!(s.expect(b'}').is_ok());
        assert_eq!(
            *s.expect(b'}').unwrap_err().kind(),
            SyntaxError::UnexpectedEndOfInput
        );
    }

    #[test]
    fn advance_refuses_to_run_past_the_end() {
        let mut s = Scanner::new(b"tru");
        let err = s.advance(4).unwrap_err();
        assert_eq!(err.offset, 3);
        assert_eq!(s.position(), 0);
        assert!(s.advance(3).is_ok());
        assert!(s.remaining().is_empty());
    }

    #[test]
    fn errors_report_line_and_column() {
        let s = Scanner::new(b"{\n  \"a\": x\n}");
        let err = s.error_at(9, SyntaxError::MissingDigit(b'x'));
        assert_eq!((err.line, err.column), (2, 8));
        assert_eq!(err.to_string(), "expected digit, found 'x' at 2:8");
    }
}
