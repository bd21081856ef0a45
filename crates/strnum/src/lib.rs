//! String-to-number conversion for script-engine numerals.
//!
//! This crate converts text such as `" -12.5e3\n"`, `"0x1F"`, `"010"` or
//! `"+Infinity"` into an `f64`, exactly as a script engine does when it
//! coerces a string to a number:
//!
//! - whitespace around the numeral is ignored, whitespace inside it is not;
//! - a leading zero never means octal (`"010"` is ten);
//! - out-of-range magnitudes saturate to infinity or to a signed zero;
//! - anything that is not a numeral (including the text `"NaN"`) converts to
//!   NaN rather than producing an error.
//!
//! ```rust
//! use strnum::parse_numeric_string;
//!
//! assert_eq!(parse_numeric_string(" 123\t"), 123.0);
//! assert_eq!(parse_numeric_string("0x00f"), 15.0);
//! assert_eq!(parse_numeric_string("5e-2"), 0.05);
//! assert_eq!(parse_numeric_string("1e999"), f64::INFINITY);
//! assert!(parse_numeric_string("-1e-999").is_sign_negative());
//! assert!(parse_numeric_string("").is_nan());
//! ```
//!
//! [`NumericParser`] adds opt-in behaviour through [`ParserOptions`] and
//! diagnostic variants that say *why* a string was rejected.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod convert;
mod error;
mod numeral;
mod options;
mod parser;
mod scanner;
mod units;

#[cfg(test)]
mod tests;

pub use error::{ParseNumberError, SyntaxError};
pub use numeral::{Numeral, NumeralKind};
pub use options::ParserOptions;
pub use parser::NumericParser;

/// Converts `text` to a number with the default options.
///
/// Returns NaN if `text` is not a numeral; never panics.
#[must_use]
pub fn parse_numeric_string(text: &str) -> f64 {
    NumericParser::default().parse(text)
}

/// Converts UTF-16 code units to a number with the default options.
///
/// ```rust
/// let units: Vec<u16> = "\u{000B}-0x10\u{000C}".encode_utf16().collect();
/// assert_eq!(strnum::parse_numeric_utf16(&units), -16.0);
/// ```
#[must_use]
pub fn parse_numeric_utf16(units: &[u16]) -> f64 {
    NumericParser::default().parse_utf16(units)
}
