//! Converts each command-line argument the way `Number(text)` would and
//! explains any rejection.
//!
//! ```bash
//! cargo run -p strnum --example to_number -- " 42 " 0x1F 010 1e999 "100 junk"
//! ```
//!
//! Set `STRNUM_EXTENDED=1` to also strip Unicode whitespace and accept
//! `0b`/`0o` numerals.

use strnum::{NumericParser, ParserOptions};

fn main() {
    let extended = std::env::var_os("STRNUM_EXTENDED").is_some_and(|v| v == "1");
    let parser = NumericParser::new(ParserOptions {
        allow_unicode_whitespace: extended,
        allow_binary_and_octal: extended,
        ..Default::default()
    });

    for arg in std::env::args().skip(1) {
        match parser.scan(&arg) {
            Ok(numeral) => {
                let value = parser.parse(&arg);
                println!("{arg:?} -> {value:?} ({:?})", numeral.kind);
            }
            Err(err) => println!("{arg:?} -> NaN ({err})"),
        }
    }
}
