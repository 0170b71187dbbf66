//! A recursive-descent JSON parser that turns a byte buffer into an owned,
//! order-preserving value tree.
//!
//! The parser accepts objects, arrays, quoted strings, signed decimal
//! integers and the `true`/`false`/`null` literals. It is deliberately
//! lenient in a few places:
//!
//! - String escapes are not decoded. A backslash is dropped and the byte that
//!   follows it is copied verbatim, so `\n` becomes `n` and `\"` becomes `"`.
//! - Literals are recognized by their first byte and skipped by length unless
//!   [`ParserOptions::strict_literals`] is set, so `tXXX` reads as `true`.
//! - Integers wrap on overflow; there are no floating point literals.
//! - Anything after the first value is ignored unless
//!   [`ParserOptions::reject_trailing_content`] is set.
//!
//! ```
//! use jsonfront::{Tag, lookup, parse};
//!
//! let value = parse(br#"{"reboot": {"delay": 5}, "ping": [1, 2, 3]}"#);
//! assert_eq!(value.tag(), Tag::Object);
//!
//! let delay = lookup(&value, "reboot").and_then(|reboot| reboot.get("delay"));
//! assert_eq!(delay.and_then(jsonfront::Value::as_i64), Some(5));
//!
//! // Failures never yield "nothing", only an error-tagged value.
//! assert!(parse(b"{").is_error());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod lifecycle;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use lifecycle::release;
pub use parser::{DEFAULT_MAX_DEPTH, Parser, ParserError, ParserOptions, SyntaxError};
pub use value::{Array, INITIAL_ARRAY_CAPACITY, Member, Members, Object, Tag, Value};

pub use bstr::{BStr, BString};

/// Parses `input` with the default [`ParserOptions`].
///
/// Always returns a usable value: on any syntax failure the partially built
/// tree is dropped and [`Value::Error`] is returned instead. Use
/// [`try_parse`] to learn where and why parsing failed.
#[must_use]
pub fn parse(input: impl AsRef<[u8]>) -> Value {
    parse_with_options(input, ParserOptions::default())
}

/// Parses `input` with explicit options. See [`parse`].
#[must_use]
pub fn parse_with_options(input: impl AsRef<[u8]>, options: ParserOptions) -> Value {
    match try_parse_with_options(input, options) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(
                offset = err.offset,
                line = err.line,
                column = err.column,
                error = %err.kind(),
                "JSON parse failed"
            );
            Value::Error
        }
    }
}

/// Parses `input` with the default [`ParserOptions`], reporting failures as a
/// [`ParserError`] that carries the byte offset and category.
///
/// # Errors
///
/// Returns an error if `input` is not a well-formed document.
pub fn try_parse(input: impl AsRef<[u8]>) -> Result<Value, ParserError> {
    try_parse_with_options(input, ParserOptions::default())
}

/// Parses `input` with explicit options. See [`try_parse`].
///
/// # Errors
///
/// Returns an error if `input` is not a well-formed document under `options`.
pub fn try_parse_with_options(
    input: impl AsRef<[u8]>,
    options: ParserOptions,
) -> Result<Value, ParserError> {
    Parser::new(input.as_ref(), options).parse()
}

/// Returns the value of the first member of `value` whose key equals `key`
/// byte for byte.
///
/// Returns `None` when `value` is not an object or no member matches. The
/// lookup is linear in the number of members and never allocates.
#[must_use]
pub fn lookup(value: &Value, key: impl AsRef<[u8]>) -> Option<&Value> {
    value.get(key)
}
