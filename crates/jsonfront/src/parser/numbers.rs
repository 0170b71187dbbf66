use super::{
    error::{ParserError, SyntaxError},
    scanner::Scanner,
};

/// Parses an optionally negative decimal integer.
///
/// At least one digit is required. Digits accumulate by multiply-and-add in
/// two's complement, so values outside the `i64` range wrap instead of
/// failing.
pub(crate) fn parse_integer(scanner: &mut Scanner<'_>) -> Result<i64, ParserError> {
    let negative = scanner.require()? == b'-';
    if negative {
        scanner.bump();
    }

    let first = scanner.require()?;
    if !first.is_ascii_digit() {
        return Err(scanner.error(SyntaxError::MissingDigit(first)));
    }

    let mut value: i64 = 0;
    while let Some(digit) = scanner.peek().filter(u8::is_ascii_digit) {
        value = value.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'));
        scanner.bump();
    }
    Ok(if negative { value.wrapping_neg() } else { value })
}
