use super::{
    error::{ParserError, SyntaxError},
    scanner::Scanner,
};
use crate::Value;

/// One of the three keyword literals, identified by its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Literal {
    True,
    False,
    Null,
}

impl Literal {
    pub(crate) fn from_first_byte(byte: u8) -> Option<Self> {
        match byte {
            b't' => Some(Self::True),
            b'f' => Some(Self::False),
            b'n' => Some(Self::Null),
            _ => None,
        }
    }

    pub(crate) const fn text(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
        }
    }

    fn into_value(self) -> Value {
        match self {
            Self::True => Value::True,
            Self::False => Value::False,
            Self::Null => Value::Null,
        }
    }
}

/// Consumes a literal starting at the cursor.
///
/// Without `strict`, only the length is checked: the bytes after the first
/// one are skipped unread.
pub(crate) fn parse_literal(
    scanner: &mut Scanner<'_>,
    literal: Literal,
    strict: bool,
) -> Result<Value, ParserError> {
    let text = literal.text().as_bytes();
    let available = scanner.remaining();
    if strict {
        let checked = text.len().min(available.len());
        if available[..checked] != text[..checked] {
            return Err(scanner.error(SyntaxError::InvalidLiteral(literal.text())));
        }
    }
    scanner.advance(text.len())?;
    Ok(literal.into_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(input: &[u8]) -> Result<Value, ParserError> {
        let mut scanner = Scanner::new(input);
        let literal = Literal::from_first_byte(input[0]).unwrap();
        parse_literal(&mut scanner, literal, false)
    }

    fn strict(input: &[u8]) -> Result<Value, ParserError> {
        let mut scanner = Scanner::new(input);
        let literal = Literal::from_first_byte(input[0]).unwrap();
        parse_literal(&mut scanner, literal, true)
    }

    #[test]
    fn lenient_mode_skips_by_length() {
        assert_eq!(lenient(b"tXXX"), Ok(Value::True));
        assert_eq!(lenient(b"f1234"), Ok(Value::False));
        assert_eq!(lenient(b"n..."), Ok(Value::Null));
    }

    #[test]
    fn lenient_mode_still_needs_enough_bytes() {
        let err = lenient(b"fals").unwrap_err();
        assert_eq!(*err.kind(), SyntaxError::UnexpectedEndOfInput);
        assert_eq!(err.offset, 4);
    }

    #[test]
    fn strict_mode_checks_spelling() {
        assert_eq!(strict(b"true"), Ok(Value::True));
        assert_eq!(strict(b"null"), Ok(Value::Null));
        let err = strict(b"tXXX").unwrap_err();
        assert_eq!(*err.kind(), SyntaxError::InvalidLiteral("true"));
        assert_eq!(err.offset, 0);
        // A correct but truncated prefix is an end-of-input failure.
        assert_eq!(
            *strict(b"fal").unwrap_err().kind(),
            SyntaxError::UnexpectedEndOfInput
        );
        assert_eq!(
            *strict(b"nul!").unwrap_err().kind(),
            SyntaxError::InvalidLiteral("null")
        );
    }
}
