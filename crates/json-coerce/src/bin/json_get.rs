//! `json-get`: print one value of a JSON document, coerced to a type.
//!
//! Usage:
//!   json-get <key | index | /pointer> [--type int|float|bool|string|json] [--options '<json>']
//!
//! Built only with the `cli` feature (`cargo install json-coerce --features
//! cli`). The document is read from stdin. Set `RUST_LOG=json_coerce=trace` to see
//! why a lookup missed.

use json_coerce::cli::{lookup, parse_args};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match lookup(buf.trim(), &args) {
        Ok(result) => {
            let mut out = io::stdout().lock();
            if writeln!(out, "{result}").is_err() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
