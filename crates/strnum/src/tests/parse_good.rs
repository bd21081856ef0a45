use std::format;

use rstest::rstest;

use super::{TRIM_SET, assert_converts};
use crate::{NumericParser, ParserOptions, parse_numeric_string, parse_numeric_utf16};

/// Generates an unsigned, a `+` and a `-` test for each numeral.
macro_rules! signed_cases {
    ($($name:ident: $text:literal => $value:expr;)*) => {
        paste::paste! {
            $(
                #[test]
                fn [<unsigned_ $name>]() {
                    assert_converts($text, $value);
                }

                #[test]
                fn [<plus_ $name>]() {
                    assert_converts(concat!("+", $text), $value);
                }

                #[test]
                fn [<minus_ $name>]() {
                    assert_converts(concat!("-", $text), -($value));
                }
            )*
        }
    };
}

signed_cases! {
    zero: "0" => 0.0;
    one: "1" => 1.0;
    two: "2" => 2.0;
    pi: "3.1415926" => 3.141_592_6;
    trailing_point: "5." => 5.0;
    exponent: "5e2" => 500.0;
    exponent_plus: "5e+2" => 500.0;
    exponent_minus: "5e-2" => 0.05;
    upper_exponent: "5E2" => 500.0;
    fraction_only: ".00001" => 0.000_01;
    fraction_exponent: ".00001e5" => 1.0;
    fraction_exponent_plus: ".00001e+5" => 1.0;
    fraction_exponent_minus: ".001e-2" => 0.000_01;
    integer_exponent: "1234e4" => 12_340_000.0;
    integer_exponent_plus: "1234e+4" => 12_340_000.0;
    integer_exponent_minus: "1234e-4" => 0.1234;
    point_exponent: "5.e1" => 50.0;
    infinity: "Infinity" => f64::INFINITY;
    hex: "0x1f" => 31.0;
    hex_upper: "0XFF" => 255.0;
    leading_zero: "010" => 10.0;
    overflow: "1e999" => f64::INFINITY;
    underflow: "1e-999" => 0.0;
}

#[rstest]
#[case(" 123")]
#[case("\n123")]
#[case("\r123")]
#[case("\t123")]
#[case("\u{0C}123")]
#[case("\u{0B}123")]
#[case("123 ")]
#[case("123\n")]
#[case("123\r")]
#[case("123\t")]
#[case("123\u{0C}")]
#[case("123\u{0B}")]
#[case(" 123 ")]
#[case("\n123\n")]
#[case("\r123\r")]
#[case("\t123\t")]
#[case("\u{0C}123\u{0C}")]
#[case("\u{0B}123\u{0B}")]
#[case("  \t\t123\r\n\r\n")]
#[case(" \n\r\t\u{0C}\u{0B}123\u{0B}\u{0C}\t\r\n ")]
fn whitespace_around_numeral_is_ignored(#[case] text: &str) {
    assert_converts(text, 123.0);
}

#[rstest]
#[case(" Infinity ", f64::INFINITY)]
#[case(" -Infinity ", f64::NEG_INFINITY)]
#[case(" +Infinity ", f64::INFINITY)]
#[case("Infinity ", f64::INFINITY)]
#[case("-Infinity ", f64::NEG_INFINITY)]
#[case("+Infinity ", f64::INFINITY)]
#[case("\n-Infinity\t", f64::NEG_INFINITY)]
fn infinity_literal(#[case] text: &str, #[case] expected: f64) {
    assert_converts(text, expected);
}

#[rstest]
#[case("0x0", 0.0)]
#[case("0x1", 1.0)]
#[case("0x2", 2.0)]
#[case("0x9", 9.0)]
#[case("0xa", 10.0)]
#[case("0xb", 11.0)]
#[case("0xf", 15.0)]
#[case("0xA", 10.0)]
#[case("0xB", 11.0)]
#[case("0xF", 15.0)]
#[case("0X0", 0.0)]
#[case("0X9", 9.0)]
#[case("0Xa", 10.0)]
#[case("0XA", 10.0)]
#[case("0Xf", 15.0)]
#[case("0XF", 15.0)]
#[case("0x000", 0.0)]
#[case("0x009", 9.0)]
#[case("0x00a", 10.0)]
#[case("0x00A", 10.0)]
#[case("0x00f", 15.0)]
#[case("0x00F", 15.0)]
#[case("0xdeadBEEF", 3_735_928_559.0)]
#[case("-0x0", -0.0)]
fn hexadecimal(#[case] text: &str, #[case] expected: f64) {
    assert_converts(text, expected);
}

#[test]
fn every_hex_digit_in_both_cases() {
    for n in 0_u8..16 {
        let expected = f64::from(n);
        assert_converts(&format!("0x{n:x}"), expected);
        assert_converts(&format!("0X{n:X}"), expected);
        assert_converts(&format!("0x00{n:x}"), expected);
    }
}

#[rstest]
#[case("00", 0.0)]
#[case("01", 1.0)]
#[case("02", 2.0)]
#[case("08", 8.0)]
#[case("09", 9.0)]
#[case("010", 10.0)]
#[case("0100", 100.0)]
#[case("000100", 100.0)]
#[case("-010", -10.0)]
#[case("00.5", 0.5)]
#[case("010e1", 100.0)]
fn leading_zeros_are_decimal(#[case] text: &str, #[case] expected: f64) {
    assert_converts(text, expected);
}

#[test]
fn signed_zeros() {
    assert_eq!(1.0 / parse_numeric_string("+0"), f64::INFINITY);
    assert_eq!(1.0 / parse_numeric_string("0"), f64::INFINITY);
    assert_eq!(1.0 / parse_numeric_string("-0"), f64::NEG_INFINITY);
    assert_eq!(1.0 / parse_numeric_string("-0.0e7"), f64::NEG_INFINITY);
}

#[test]
fn overflow_and_underflow_saturate() {
    assert_eq!(parse_numeric_string("1e999"), f64::INFINITY);
    assert_eq!(parse_numeric_string("-1e999"), f64::NEG_INFINITY);
    assert_eq!(parse_numeric_string("1e-999"), 0.0);
    assert_eq!(parse_numeric_string("-1e-999"), 0.0);
    assert_eq!(1.0 / parse_numeric_string("1e-999"), f64::INFINITY);
    assert_eq!(1.0 / parse_numeric_string("-1e-999"), f64::NEG_INFINITY);
    assert_eq!(
        parse_numeric_string("1e99999999999999999999"),
        f64::INFINITY
    );
}

#[rstest]
#[case("1.7976931348623157e308", f64::MAX)]
#[case("2.2250738585072014e-308", f64::MIN_POSITIVE)]
#[case("5e-324", f64::from_bits(1))]
#[case("0.1", 0.1)]
#[case("9007199254740993", 9_007_199_254_740_992.0)]
fn decimal_rounding_is_correct(#[case] text: &str, #[case] expected: f64) {
    assert_converts(text, expected);
}

#[test]
fn repeated_conversion_is_bit_identical() {
    for text in ["0.1", "-0", "0x1f", " 1e-999 ", "Infinity", "junk", ""] {
        let first = parse_numeric_string(text).to_bits();
        for _ in 0..4 {
            assert_eq!(parse_numeric_string(text).to_bits(), first, "{text:?}");
        }
    }
}

#[test]
fn every_trim_character_pads_every_form() {
    let forms = ["123", "-5e-2", "0xF", "010", ".5", "5.", "-Infinity"];
    for form in forms {
        let bare = parse_numeric_string(form);
        for ch in TRIM_SET {
            for text in [
                format!("{ch}{form}"),
                format!("{form}{ch}"),
                format!("{ch}{ch}{form}{ch}{ch}"),
            ] {
                assert_converts(&text, bare);
            }
        }
    }
}

#[test]
fn utf16_matches_utf8() {
    for text in ["\u{0B}42\u{0C}", "-0", "0x00F", ".001e-2", "+Infinity"] {
        let units: std::vec::Vec<u16> = text.encode_utf16().collect();
        assert_eq!(
            parse_numeric_utf16(&units).to_bits(),
            parse_numeric_string(text).to_bits(),
            "{text:?}"
        );
    }
}

#[rstest]
#[case("\u{A0}42", 42.0)]
#[case("42\u{3000}", 42.0)]
#[case("\u{FEFF}42", 42.0)]
#[case("\u{2028}\u{2029}-7\u{1680}", -7.0)]
#[case("\u{2000}\u{200A}0x10\u{202F}\u{205F}", 16.0)]
fn unicode_whitespace_when_enabled(#[case] text: &str, #[case] expected: f64) {
    let parser = NumericParser::new(ParserOptions {
        allow_unicode_whitespace: true,
        ..Default::default()
    });
    assert_eq!(parser.parse(text).to_bits(), expected.to_bits(), "{text:?}");
    assert!(parse_numeric_string(text).is_nan(), "{text:?}");
}

#[rstest]
#[case("0b0", 0.0)]
#[case("0b101", 5.0)]
#[case("0B11", 3.0)]
#[case("-0b1", -1.0)]
#[case("0o17", 15.0)]
#[case("+0O777", 511.0)]
#[case(" 0o0010 ", 8.0)]
fn binary_and_octal_when_enabled(#[case] text: &str, #[case] expected: f64) {
    let parser = NumericParser::new(ParserOptions {
        allow_binary_and_octal: true,
        ..Default::default()
    });
    assert_eq!(parser.parse(text).to_bits(), expected.to_bits(), "{text:?}");
    assert!(parse_numeric_string(text).is_nan(), "{text:?}");
    // Leading zeros stay decimal with the option on.
    assert_eq!(parser.parse("010"), 10.0);
}
