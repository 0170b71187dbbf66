use alloc::vec::Vec;

use bstr::BString;

use super::{
    error::{ParserError, SyntaxError},
    scanner::Scanner,
};

/// Parses a quoted string in two passes.
///
/// The first pass finds the closing quote and counts the output bytes; the
/// second copies them into storage of exactly that size. A backslash is an
/// escape marker: it is dropped and the byte after it is copied as is, so
/// escapes are skipped but never decoded (`\n` yields `n`, `\"` yields `"`).
pub(crate) fn parse_string(scanner: &mut Scanner<'_>) -> Result<BString, ParserError> {
    scanner.expect(b'"')?;
    let start = scanner.position();
    let body = scanner.remaining();

    let mut end = 0;
    let mut count = 0;
    loop {
        match body.get(end) {
            None => {
                let offset = start + end.min(body.len());
                return Err(scanner.error_at(offset, SyntaxError::UnterminatedString));
            }
            Some(b'"') => break,
            Some(b'\\') => end += 2,
            Some(_) => end += 1,
        }
        count += 1;
    }

    let mut bytes = Vec::with_capacity(count);
    let mut raw = body[..end].iter().copied();
    while let Some(byte) = raw.next() {
        bytes.push(if byte == b'\\' {
            raw.next().unwrap_or(byte)
        } else {
            byte
        });
    }
    debug_assert_eq!(bytes.len(), count);

    scanner.advance(end)?;
    scanner.expect(b'"')?;
    Ok(BString::from(bytes))
}
