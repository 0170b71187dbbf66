use alloc::string::ToString;

use rstest::rstest;

use crate::{ParserError, SyntaxError, parse, try_parse};

fn assert_err(err: &ParserError, kind: SyntaxError, offset: usize) {
    assert_eq!(*err.kind(), kind, "{err}");
    assert_eq!(err.offset, offset, "{err}");
}

#[rstest]
#[case::empty_document("", SyntaxError::UnexpectedEndOfInput, 0)]
#[case::whitespace_only(" \n ", SyntaxError::UnexpectedEndOfInput, 3)]
#[case::unclosed_object("{", SyntaxError::UnexpectedEndOfInput, 1)]
#[case::unclosed_array("[1", SyntaxError::UnexpectedEndOfInput, 2)]
#[case::unclosed_member(r#"{"a":1"#, SyntaxError::UnexpectedEndOfInput, 6)]
#[case::unterminated_string(r#""abc"#, SyntaxError::UnterminatedString, 4)]
#[case::unterminated_key(r#"{"abc"#, SyntaxError::UnterminatedString, 5)]
#[case::escaped_closing_quote(r#"["abc\"]"#, SyntaxError::UnterminatedString, 8)]
#[case::lone_minus("-", SyntaxError::UnexpectedEndOfInput, 1)]
#[case::minus_without_digit("-x", SyntaxError::MissingDigit(b'x'), 1)]
#[case::unknown_byte("x", SyntaxError::MissingDigit(b'x'), 0)]
#[case::plus_sign("+1", SyntaxError::MissingDigit(b'+'), 0)]
#[case::stray_closer("]", SyntaxError::MissingDigit(b']'), 0)]
#[case::trailing_comma_in_array("[1,]", SyntaxError::MissingDigit(b']'), 3)]
#[case::missing_comma("[1 2]", SyntaxError::UnexpectedCharacter { expected: b',', found: b'2' }, 3)]
#[case::missing_colon(r#"{"a" 1}"#, SyntaxError::UnexpectedCharacter { expected: b':', found: b'1' }, 5)]
#[case::unquoted_key("{a:1}", SyntaxError::UnexpectedCharacter { expected: b'"', found: b'a' }, 1)]
#[case::trailing_comma_in_object(r#"{"a":1,}"#, SyntaxError::UnexpectedCharacter { expected: b'"', found: b'}' }, 7)]
#[case::object_closed_by_bracket(r#"{"a":1]"#, SyntaxError::UnexpectedCharacter { expected: b',', found: b']' }, 6)]
#[case::truncated_literal("[tru", SyntaxError::UnexpectedEndOfInput, 4)]
#[case::float_in_array("[1.5]", SyntaxError::UnexpectedCharacter { expected: b',', found: b'.' }, 2)]
fn malformed_input(#[case] input: &str, #[case] kind: SyntaxError, #[case] offset: usize) {
    let err = try_parse(input).unwrap_err();
    assert_err(&err, kind, offset);
    assert!(parse(input).is_error());
}

#[test]
fn failure_deep_inside_a_tree_discards_everything() {
    let input = r#"{"a": [1, 2, {"b": ["x", "y", {"c": -}]}], "d": "e"}"#;
    let err = try_parse(input).unwrap_err();
    assert_err(&err, SyntaxError::MissingDigit(b'}'), 37);
    assert!(parse(input).is_error());
}

#[test]
fn error_display_includes_position() {
    let err = try_parse("[1,\n 2\n x]").unwrap_err();
    assert_eq!(err.to_string(), "expected ',', found 'x' at 3:2");
    assert_eq!((err.line, err.column, err.offset), (3, 2, 8));
}

#[test]
fn non_ascii_bytes_are_escaped_in_messages() {
    let err = try_parse(b"[1\xff]").unwrap_err();
    assert_eq!(err.to_string(), r"expected ',', found '\xff' at 1:3");
}
