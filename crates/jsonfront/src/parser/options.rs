/// Nesting limit used by [`ParserOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the parser.
///
/// The defaults reproduce the lenient behavior documented at the crate root;
/// each flag tightens one aspect of it.
///
/// # Default
///
/// `max_depth` is [`DEFAULT_MAX_DEPTH`]; every flag is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// How many objects and arrays may enclose one another.
    ///
    /// The parser descends recursively, so this bounds its stack usage on
    /// hostile input. A value nested deeper fails with
    /// [`SyntaxError::NestingTooDeep`](super::SyntaxError::NestingTooDeep).
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_DEPTH`]
    pub max_depth: usize,

    /// Whether `true`, `false` and `null` must be spelled out.
    ///
    /// By default a literal is recognized by its first byte and the parser
    /// skips its length without looking at the remaining bytes, so `tXXX`
    /// reads as `true` and `nope` as `null`. When set, the bytes must match
    /// exactly or parsing fails with
    /// [`SyntaxError::InvalidLiteral`](super::SyntaxError::InvalidLiteral).
    ///
    /// # Default
    ///
    /// `false`
    pub strict_literals: bool,

    /// Whether anything but whitespace may follow the top-level value.
    ///
    /// By default the parser stops after the first value and ignores the
    /// rest of the buffer, so `{} garbage` is an empty object.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_trailing_content: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_literals: false,
            reject_trailing_content: false,
        }
    }
}
