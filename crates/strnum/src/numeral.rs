use core::ops::Range;

/// Lexical shape of a recognized numeral.
///
/// Callers that only need to know whether a string *would* convert, or need
/// to tell integers from floats before converting, can get this from
/// [`NumericParser::scan`](crate::NumericParser::scan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumeralKind {
    /// `Infinity`, optionally signed.
    Infinity,
    /// `0x` / `0X` followed by hex digits.
    Hexadecimal,
    /// `0b` / `0B` followed by binary digits.
    Binary,
    /// `0o` / `0O` followed by octal digits.
    Octal,
    /// Two or more decimal digits starting with `0`, such as `010`. Read as
    /// decimal.
    LeadingZeroDecimal,
    /// Decimal digits with no point and no exponent.
    Integer,
    /// Decimal digits with a point, an exponent, or both.
    Decimal,
}

impl NumeralKind {
    /// Whether the numeral spells an integer, i.e. has no fraction or
    /// exponent and is finite.
    #[must_use]
    pub fn is_integer(self) -> bool {
        !matches!(self, Self::Infinity | Self::Decimal)
    }

    /// Bits per digit for the power-of-two radix forms.
    pub(crate) fn bits_per_digit(self) -> Option<u32> {
        match self {
            Self::Hexadecimal => Some(4),
            Self::Octal => Some(3),
            Self::Binary => Some(1),
            Self::Infinity | Self::LeadingZeroDecimal | Self::Integer | Self::Decimal => None,
        }
    }
}

/// A numeral found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    /// Which production matched.
    pub kind: NumeralKind,
    /// Whether a leading `-` was present.
    pub negative: bool,
    /// The numeral without surrounding whitespace, as code-unit offsets into
    /// the input.
    pub span: Range<usize>,
    /// Digits to convert: after the sign and any radix prefix.
    pub(crate) digits: Range<usize>,
}
