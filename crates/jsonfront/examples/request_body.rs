//! Reads an HTTP request from stdin, parses its body as JSON and lists the
//! top-level keys of the object it carries, one "function name" per line.
//!
//! The transport is left to the shell:
//!
//! ```bash
//! printf 'POST /call HTTP/1.1\r\nHost: localhost\r\n\r\n{"reboot":{},"ping":[1]}' \
//!     | RUST_LOG=jsonfront=debug cargo run -p jsonfront --example request_body
//! ```

use std::io::{self, Read};

use jsonfront::parse;
use tracing_subscriber::EnvFilter;

/// Returns what follows the first empty line, or nothing if the headers never
/// end.
fn body(request: &[u8]) -> &[u8] {
    let mut rest = request;
    while let Some(newline) = rest.iter().position(|&b| b == b'\n') {
        let line = &rest[..newline];
        rest = &rest[newline + 1..];
        if line.is_empty() || line == b"\r" {
            return rest;
        }
    }
    &[]
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut request = Vec::new();
    io::stdin().read_to_end(&mut request)?;

    let value = parse(body(&request));
    let Some(object) = value.as_object() else {
        eprintln!("request body is not a JSON object (got {})", value.tag());
        return Ok(());
    };
    for member in object {
        println!("function name: {}", member.key());
    }
    Ok(())
}
