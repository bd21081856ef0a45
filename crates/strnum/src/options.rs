/// Configuration options for the numeric string parser.
///
/// The defaults implement the conversion exactly as the conformance suite
/// pins it down: ASCII trim set only, no `0b`/`0o` prefixes, and an empty
/// string converts to NaN.
///
/// # Examples
///
/// ```rust
/// use strnum::{NumericParser, ParserOptions};
///
/// let parser = NumericParser::new(ParserOptions {
///     allow_binary_and_octal: true,
///     ..Default::default()
/// });
/// assert_eq!(parser.parse("0b101"), 5.0);
/// assert_eq!(parser.parse("0o17"), 15.0);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserOptions {
    /// Whether to strip any Unicode whitespace around the numeral.
    ///
    /// By default, only the six ASCII trim characters are recognized: space
    /// (U+0020), horizontal tab (U+0009), line feed (U+000A), vertical tab
    /// (U+000B), form feed (U+000C) and carriage return (U+000D). When
    /// enabled, every other `White_Space` code point except NEL (U+0085) is
    /// stripped too, as is the byte order mark (U+FEFF).
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    /// Whether to accept `0b`/`0B` binary and `0o`/`0O` octal numerals.
    ///
    /// These take an optional sign like hexadecimal numerals do. This never
    /// changes how a leading `0` is read: `"010"` is ten either way.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_binary_and_octal: bool,

    /// Whether an empty or whitespace-only string converts to `0`.
    ///
    /// # Default
    ///
    /// `false`, so `""` converts to NaN.
    pub empty_as_zero: bool,
}
