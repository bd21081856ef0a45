//! The string-to-number conversion.
//!
//! [`NumericParser`] converts the text of a numeral into an `f64` the way a
//! script engine coerces a string to a number: surrounding whitespace is
//! ignored, decimal, hexadecimal and `Infinity` forms are accepted with an
//! optional sign, and anything else becomes NaN.
//!
//! # Examples
//!
//! ```rust
//! use strnum::{NumericParser, ParserOptions};
//!
//! let parser = NumericParser::new(ParserOptions::default());
//! assert_eq!(parser.parse(" 0x1F\n"), 31.0);
//! assert_eq!(parser.parse("010"), 10.0);
//! assert_eq!(parser.parse("-Infinity"), f64::NEG_INFINITY);
//! assert!(parser.parse("100 junk").is_nan());
//! ```

use log::{debug, trace};

use crate::{
    convert,
    error::{ParseNumberError, SyntaxError},
    numeral::{Numeral, NumeralKind},
    options::ParserOptions,
    scanner,
    units::CodeUnits,
};

/// Converts numeral strings to `f64`.
///
/// The parser holds nothing but its options, so it is cheap to copy and can
/// be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericParser {
    options: ParserOptions,
}

impl NumericParser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was created with.
    #[must_use]
    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Converts `text`, returning NaN if it is not a numeral.
    #[must_use]
    pub fn parse(&self, text: &str) -> f64 {
        self.convert(text)
    }

    /// Converts UTF-16 code units, returning NaN if they are not a numeral.
    #[must_use]
    pub fn parse_utf16(&self, units: &[u16]) -> f64 {
        self.convert(units)
    }

    /// Converts `text`, reporting why it is not a numeral on failure.
    ///
    /// On success the value is bit-identical to what [`parse`](Self::parse)
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseNumberError`] locating the first code unit that
    /// does not fit the grammar.
    pub fn try_parse(&self, text: &str) -> Result<f64, ParseNumberError> {
        self.try_convert(text)
    }

    /// UTF-16 counterpart of [`try_parse`](Self::try_parse).
    ///
    /// # Errors
    ///
    /// As for [`try_parse`](Self::try_parse); offsets count UTF-16 units.
    pub fn try_parse_utf16(&self, units: &[u16]) -> Result<f64, ParseNumberError> {
        self.try_convert(units)
    }

    /// Recognizes the numeral in `text` without converting it.
    ///
    /// ```rust
    /// use strnum::{NumeralKind, NumericParser};
    ///
    /// let numeral = NumericParser::default().scan("  -0100 ").unwrap();
    /// assert_eq!(numeral.kind, NumeralKind::LeadingZeroDecimal);
    /// assert!(numeral.negative);
    /// assert_eq!(numeral.span, 2..7);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`ParseNumberError`] if `text` is not a numeral. Empty input
    /// is [`SyntaxError::Empty`] even when
    /// [`ParserOptions::empty_as_zero`] is set.
    pub fn scan(&self, text: &str) -> Result<Numeral, ParseNumberError> {
        scanner::scan(text, self.options)
    }

    /// UTF-16 counterpart of [`scan`](Self::scan).
    ///
    /// # Errors
    ///
    /// As for [`scan`](Self::scan).
    pub fn scan_utf16(&self, units: &[u16]) -> Result<Numeral, ParseNumberError> {
        scanner::scan(units, self.options)
    }

    fn convert<U: CodeUnits + ?Sized>(&self, units: &U) -> f64 {
        self.try_convert(units).unwrap_or_else(|err| {
            trace!("not a numeral: {err}");
            f64::NAN
        })
    }

    fn try_convert<U: CodeUnits + ?Sized>(&self, units: &U) -> Result<f64, ParseNumberError> {
        match scanner::scan(units, self.options) {
            Ok(numeral) => Ok(numeral_value(units, &numeral)),
            Err(err) if err.kind() == SyntaxError::Empty && self.options.empty_as_zero => Ok(0.0),
            Err(err) => Err(err),
        }
    }
}

/// Computes the value of a numeral the scanner accepted in `units`.
fn numeral_value<U: CodeUnits + ?Sized>(units: &U, numeral: &Numeral) -> f64 {
    let magnitude = match numeral.kind {
        NumeralKind::Infinity => f64::INFINITY,
        NumeralKind::Hexadecimal | NumeralKind::Binary | NumeralKind::Octal => {
            let bits = numeral.kind.bits_per_digit().unwrap_or(4);
            let digits = numeral
                .digits
                .clone()
                .filter_map(|i| units.ascii_at(i))
                .map(convert::digit_value);
            convert::radix_pow2_to_f64(digits, bits)
        }
        NumeralKind::LeadingZeroDecimal | NumeralKind::Integer | NumeralKind::Decimal => {
            convert::decimal_to_f64(&units.ascii_str(numeral.digits.clone()))
        }
    };

    if magnitude.is_infinite() && numeral.kind != NumeralKind::Infinity {
        debug!(
            "{:?} numeral at {:?} saturated to infinity",
            numeral.kind, numeral.span
        );
    }

    if numeral.negative {
        -magnitude
    } else {
        magnitude
    }
}
