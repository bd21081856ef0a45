//! Recognizer for the numeral grammar.
//!
//! ```text
//! numeral   ::= ws* [sign] body ws*
//! body      ::= "Infinity"
//!             | "0" ("x" | "X") hexdigit+
//!             | "0" ("b" | "B") bindigit+          (opt-in)
//!             | "0" ("o" | "O") octdigit+          (opt-in)
//!             | mantissa [("e" | "E") [sign] digit+]
//! mantissa  ::= digit+ ["." digit*] | "." digit+
//! ```
//!
//! The scanner walks the trimmed input once with a single unit of lookahead
//! and never backtracks. It records the shape of what it read but does no
//! arithmetic; see [`crate::convert`] for that.

use core::ops::Range;

use crate::{
    error::{ParseNumberError, SyntaxError},
    numeral::{Numeral, NumeralKind},
    options::ParserOptions,
    units::CodeUnits,
};

const INFINITY: &[u8] = b"Infinity";

type DigitPred = fn(&u8) -> bool;

/// Is `ch` stripped from the ends of a numeral?
pub(crate) fn is_trim_whitespace(ch: char, allow_unicode: bool) -> bool {
    match ch {
        ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' => true,
        // NEL is `White_Space` but never a script-engine line terminator.
        '\u{85}' => false,
        '\u{FEFF}' => allow_unicode,
        ch => allow_unicode && ch.is_whitespace(),
    }
}

/// Range of `units` left after stripping trim whitespace from both ends.
pub(crate) fn trim<U: CodeUnits + ?Sized>(units: &U, allow_unicode: bool) -> Range<usize> {
    let mut start = 0;
    let mut end = units.unit_len();
    while start < end {
        match units.char_at(start) {
            Some((ch, width)) if is_trim_whitespace(ch, allow_unicode) => start += width,
            _ => break,
        }
    }
    while end > start {
        match units.char_before(end) {
            Some((ch, width)) if is_trim_whitespace(ch, allow_unicode) => end -= width,
            _ => break,
        }
    }
    start..end
}

/// Recognize the numeral in `units`.
pub(crate) fn scan<U: CodeUnits + ?Sized>(
    units: &U,
    options: ParserOptions,
) -> Result<Numeral, ParseNumberError> {
    let span = trim(units, options.allow_unicode_whitespace);
    if span.is_empty() {
        return Err(ParseNumberError::new(SyntaxError::Empty, 0));
    }
    let mut scanner = Scanner {
        units,
        pos: span.start,
        end: span.end,
        options,
    };

    let negative = match scanner.peek() {
        Peeked::Ascii(b'-') => {
            scanner.bump();
            true
        }
        Peeked::Ascii(b'+') => {
            scanner.bump();
            false
        }
        _ => false,
    };

    let body_start = scanner.pos;
    let (kind, digits) = match (scanner.peek(), scanner.radix_prefix()) {
        (Peeked::Ascii(b'I'), _) => {
            scanner.literal(INFINITY)?;
            (NumeralKind::Infinity, scanner.pos..scanner.pos)
        }
        (Peeked::Ascii(b'0'), Some((kind, is_digit))) => {
            // `0` and the prefix letter
            scanner.bump();
            scanner.bump();
            let digits_start = scanner.pos;
            scanner.digits(is_digit)?;
            (kind, digits_start..scanner.pos)
        }
        (Peeked::Ascii(b'0'..=b'9' | b'.'), _) => {
            let kind = scanner.decimal()?;
            (kind, body_start..scanner.pos)
        }
        _ => return Err(scanner.unexpected()),
    };

    if scanner.pos < scanner.end {
        return Err(scanner.trailing());
    }

    Ok(Numeral {
        kind,
        negative,
        span,
        digits,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The unit under the cursor.
enum Peeked {
    /// Past the end of the trimmed numeral.
    End,
    Ascii(u8),
    /// Anything outside ASCII; never part of a numeral.
    Other,
}

struct Scanner<'a, U: ?Sized> {
    units: &'a U,
    pos: usize,
    end: usize,
    options: ParserOptions,
}

impl<U: CodeUnits + ?Sized> Scanner<'_, U> {
    fn peek_at(&self, index: usize) -> Peeked {
        if index >= self.end {
            return Peeked::End;
        }
        self.units.ascii_at(index).map_or(Peeked::Other, Peeked::Ascii)
    }

    #[inline]
    fn peek(&self) -> Peeked {
        self.peek_at(self.pos)
    }

    /// Advance past an ASCII unit the caller has already peeked.
    #[inline]
    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat_while(&mut self, pred: DigitPred) -> usize {
        let start = self.pos;
        while let Peeked::Ascii(b) = self.peek() {
            if !pred(&b) {
                break;
            }
            self.bump();
        }
        self.pos - start
    }

    /// One or more digits accepted by `pred`.
    fn digits(&mut self, pred: DigitPred) -> Result<(), ParseNumberError> {
        if self.eat_while(pred) == 0 {
            return Err(self.unexpected());
        }
        Ok(())
    }

    fn literal(&mut self, expected: &[u8]) -> Result<(), ParseNumberError> {
        for &b in expected {
            if self.peek() != Peeked::Ascii(b) {
                return Err(self.unexpected());
            }
            self.bump();
        }
        Ok(())
    }

    /// The radix form introduced by the `0?` at the cursor, if any.
    fn radix_prefix(&self) -> Option<(NumeralKind, DigitPred)> {
        let allow_bin_oct = self.options.allow_binary_and_octal;
        match self.peek_at(self.pos + 1) {
            Peeked::Ascii(b'x' | b'X') => {
                Some((NumeralKind::Hexadecimal, u8::is_ascii_hexdigit as DigitPred))
            }
            Peeked::Ascii(b'b' | b'B') if allow_bin_oct => {
                Some((NumeralKind::Binary, is_binary_digit as DigitPred))
            }
            Peeked::Ascii(b'o' | b'O') if allow_bin_oct => {
                Some((NumeralKind::Octal, is_octal_digit as DigitPred))
            }
            _ => None,
        }
    }

    /// Mantissa and optional exponent. The cursor is on a digit or `.`.
    fn decimal(&mut self) -> Result<NumeralKind, ParseNumberError> {
        let int_start = self.pos;
        let int_digits = self.eat_while(u8::is_ascii_digit);
        let mut kind = if int_digits > 1 && self.units.ascii_at(int_start) == Some(b'0') {
            NumeralKind::LeadingZeroDecimal
        } else {
            NumeralKind::Integer
        };

        if self.peek() == Peeked::Ascii(b'.') {
            self.bump();
            let frac_digits = self.eat_while(u8::is_ascii_digit);
            if int_digits + frac_digits == 0 {
                return Err(self.unexpected());
            }
            kind = NumeralKind::Decimal;
        }

        if let Peeked::Ascii(b'e' | b'E') = self.peek() {
            self.bump();
            if let Peeked::Ascii(b'+' | b'-') = self.peek() {
                self.bump();
            }
            self.digits(u8::is_ascii_digit)?;
            kind = NumeralKind::Decimal;
        }

        Ok(kind)
    }

    fn char_here(&self) -> char {
        self.units
            .char_at(self.pos)
            .map_or(char::REPLACEMENT_CHARACTER, |(ch, _)| ch)
    }

    /// The numeral cannot continue with what is under the cursor.
    fn unexpected(&self) -> ParseNumberError {
        let kind = if self.pos >= self.end {
            SyntaxError::UnexpectedEndOfInput
        } else {
            SyntaxError::InvalidCharacter(self.char_here())
        };
        ParseNumberError::new(kind, self.pos)
    }

    /// A complete numeral has been read and something follows it.
    fn trailing(&self) -> ParseNumberError {
        ParseNumberError::new(SyntaxError::TrailingCharacter(self.char_here()), self.pos)
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_binary_digit(b: &u8) -> bool {
    matches!(*b, b'0' | b'1')
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_octal_digit(b: &u8) -> bool {
    matches!(*b, b'0'..=b'7')
}
