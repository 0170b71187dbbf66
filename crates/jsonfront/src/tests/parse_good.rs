use alloc::{format, string::ToString, vec::Vec};

use crate::{Tag, Value, parse, release};

#[test]
fn parse_always_returns_a_value() {
    for input in ["", "{", "[1,", "\"abc", "-", "}", "{\"a\"}"] {
        assert_eq!(parse(input).tag(), Tag::Error, "input: {input:?}");
    }
}

#[test]
fn negative_integer() {
    assert_eq!(parse("-42"), Value::Integer(-42));
    assert_eq!(parse("  -42  ").as_i64(), Some(-42));
}

#[test]
fn strings_at_top_level() {
    let value = parse(r#""hello world""#);
    assert_eq!(value.as_str(), Some("hello world"));
}

#[test]
fn escapes_are_preserved_as_raw_copies() {
    let value = parse(r#"{"path": "C:\\dir\\file", "quote": "\"q\"", "nl": "a\nb", "u": "\u00e9"}"#);
    assert_eq!(value.get("path").and_then(Value::as_str), Some(r"C:\dir\file"));
    assert_eq!(value.get("quote").and_then(Value::as_str), Some(r#""q""#));
    assert_eq!(value.get("nl").and_then(Value::as_str), Some("anb"));
    assert_eq!(value.get("u").and_then(Value::as_str), Some("u00e9"));
}

#[test]
fn raw_utf8_in_strings_and_keys() {
    let value = parse("{\"clé\": \"日本\"}");
    assert_eq!(value.get("clé").and_then(Value::as_str), Some("日本"));
}

#[test]
fn literal_skip_accepts_any_bytes_after_the_first() {
    // `t` followed by any three bytes reads as `true`.
    assert_eq!(parse("tXXX"), Value::True);
    assert_eq!(parse("f????"), Value::False);
    assert_eq!(parse("nope"), Value::Null);
}

#[test]
fn array_past_the_initial_capacity() {
    let source: Vec<i64> = (-10..30).map(|i| i * 1_000_003).collect();
    let text = format!(
        "[{}]",
        source.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    );
    let value = parse(&text);
    let array = value.as_array().expect("array");
    assert_eq!(array.len(), source.len());
    let parsed: Vec<i64> = array.iter().filter_map(Value::as_i64).collect();
    assert_eq!(parsed, source);
}

#[test]
fn tool_call_document() {
    let value = parse(
        br#"{
            "reboot": {"delay": 5, "force": false},
            "notify": {"targets": ["ops", "dev"], "message": "going down"},
            "ping": []
        }"#,
    );
    let object = value.as_object().expect("object");
    let names: Vec<_> = object.keys().map(|k| k.to_string()).collect();
    assert_eq!(names, ["reboot", "notify", "ping"]);

    let targets = value
        .get("notify")
        .and_then(|n| n.get("targets"))
        .and_then(Value::as_array)
        .expect("targets");
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[1].as_str(), Some("dev"));
    assert_eq!(
        value.get("reboot").and_then(|r| r.get("force")),
        Some(&Value::False)
    );

    release(value);
}

#[test]
fn display_output_parses_back() {
    let text = r#"{"a":[1,-2,{"b":"x\"y"}],"c":true,"d":null,"e":{}}"#;
    let value = parse(text);
    assert_eq!(value.to_string(), text);
    assert_eq!(parse(value.to_string()), value);
}
