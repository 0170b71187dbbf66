//! Recursive-descent JSON parser.
//!
//! The value dispatcher is the hub: it skips whitespace, looks at one byte
//! and hands off to the object, array, string, literal or integer parser.
//! Objects and arrays call back into the dispatcher for every member value
//! and element, so recursion follows the nesting of the input. The
//! [`ParserOptions::max_depth`] limit keeps that recursion bounded.
//!
//! Every sub-parser returns a `Result`. A failure unwinds through `?`, and
//! whatever was built on the way down (members, elements, strings) is
//! dropped on the way out, so a failed parse leaves nothing behind.

mod error;
mod literal;
mod numbers;
mod options;
mod scanner;
mod strings;


use alloc::boxed::Box;

pub use error::{ParserError, SyntaxError};
use literal::Literal;
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
use scanner::Scanner;

use crate::value::{Array, Member, Object, Value};

/// Parser state for one input buffer.
///
/// The input is borrowed for the duration of the parse only; the returned
/// tree owns all of its data.
///
/// ```
/// use jsonfront::{Parser, ParserOptions, SyntaxError};
///
/// let options = ParserOptions { strict_literals: true, ..Default::default() };
/// let err = Parser::new(b"[true, tru3]", options).parse().unwrap_err();
/// assert_eq!(*err.kind(), SyntaxError::InvalidLiteral("true"));
/// assert_eq!(err.offset, 7);
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    scanner: Scanner<'src>,
    options: ParserOptions,
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `input`.
    #[must_use]
    pub fn new(input: &'src [u8], options: ParserOptions) -> Self {
        Self {
            scanner: Scanner::new(input),
            options,
            depth: 0,
        }
    }

    /// Parses one value, including the whitespace around it.
    ///
    /// # Errors
    ///
    /// Returns the first syntax failure encountered. No part of the tree
    /// survives a failure.
    pub fn parse(mut self) -> Result<Value, ParserError> {
        let value = self.parse_element()?;
        if self.options.reject_trailing_content && !self.scanner.is_at_end() {
            return Err(self.scanner.error(SyntaxError::TrailingContent));
        }
        Ok(value)
    }

    /// Value dispatcher, with leading and trailing whitespace.
    fn parse_element(&mut self) -> Result<Value, ParserError> {
        self.scanner.skip_whitespace();
        let value = self.parse_value()?;
        self.scanner.skip_whitespace();
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, ParserError> {
        match self.scanner.require()? {
            b'{' => self.nested(Self::parse_object).map(Value::Object),
            b'[' => self.nested(Self::parse_array).map(Value::Array),
            b'"' => strings::parse_string(&mut self.scanner).map(Value::String),
            byte => match Literal::from_first_byte(byte) {
                Some(literal) => literal::parse_literal(
                    &mut self.scanner,
                    literal,
                    self.options.strict_literals,
                ),
                None => numbers::parse_integer(&mut self.scanner).map(Value::Integer),
            },
        }
    }

    /// Runs a container parser one nesting level down.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParserError>,
    ) -> Result<T, ParserError> {
        if self.depth >= self.options.max_depth {
            return Err(self
                .scanner
                .error(SyntaxError::NestingTooDeep(self.options.max_depth)));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn parse_object(&mut self) -> Result<Object, ParserError> {
        self.scanner.expect(b'{')?;
        self.scanner.skip_whitespace();

        let mut object = Object::new();
        if self.scanner.require()? == b'}' {
            self.scanner.bump();
            return Ok(object);
        }

        // Members are appended at the tail so the chain keeps source order.
        let mut tail = &mut object.head;
        loop {
            let member = self.parse_member()?;
            tail = &mut tail.insert(Box::new(member)).next;
            object.len += 1;

            if self.scanner.require()? == b'}' {
                self.scanner.bump();
                return Ok(object);
            }
            self.scanner.expect(b',')?;
        }
    }

    fn parse_member(&mut self) -> Result<Member, ParserError> {
        self.scanner.skip_whitespace();
        let key = strings::parse_string(&mut self.scanner)?;
        self.scanner.skip_whitespace();
        self.scanner.expect(b':')?;
        let value = self.parse_element()?;
        Ok(Member::new(key, value))
    }

    fn parse_array(&mut self) -> Result<Array, ParserError> {
        self.scanner.expect(b'[')?;
        self.scanner.skip_whitespace();

        let mut array = Array::new();
        if self.scanner.require()? == b']' {
            self.scanner.bump();
            return Ok(array);
        }

        loop {
            array.push(self.parse_element()?);

            if self.scanner.require()? == b']' {
                self.scanner.bump();
                return Ok(array);
            }
            self.scanner.expect(b',')?;
        }
    }
}
