#![no_main]
use arbitrary::Arbitrary;
use jsonfront::{ParserOptions, parse_with_options, try_parse_with_options};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    max_depth: u8,
    strict_literals: bool,
    reject_trailing_content: bool,
    data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let options = ParserOptions {
        max_depth: usize::from(input.max_depth),
        strict_literals: input.strict_literals,
        reject_trailing_content: input.reject_trailing_content,
    };

    let value = parse_with_options(input.data, options);
    match try_parse_with_options(input.data, options) {
        Ok(tree) => {
            assert_eq!(tree, value);
            // Re-parsing the rendered text must be stable whenever the
            // strings survived rendering unchanged.
            let text = tree.to_string();
            if text.is_ascii() {
                let again = parse_with_options(&text, ParserOptions { max_depth: 255, ..options });
                assert_eq!(again.to_string(), text);
            }
        }
        Err(_) => assert!(value.is_error()),
    }
});
