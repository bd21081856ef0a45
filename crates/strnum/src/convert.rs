//! Digit strings to `f64`.
//!
//! Both conversions are correctly rounded (nearest, ties to even) no matter
//! how many digits the numeral has. Magnitudes past `f64::MAX` come out as
//! infinity and magnitudes below the smallest subnormal come out as zero.

/// Value of an ASCII hex digit. The scanner has already checked `b`.
#[inline]
pub(crate) fn digit_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

/// Converts an unsigned integer written in radix `1 << bits_per_digit`.
///
/// Up to 64 significant bits are kept exactly. Digits beyond that only
/// contribute their count (as a binary exponent) and whether any of them
/// was non-zero (the sticky bit), which is all rounding needs.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn radix_pow2_to_f64(digits: impl IntoIterator<Item = u8>, bits_per_digit: u32) -> f64 {
    debug_assert!((1..=4).contains(&bits_per_digit));
    let full = 64 - bits_per_digit;

    let mut mantissa: u64 = 0;
    let mut dropped_bits: u32 = 0;
    let mut sticky = false;
    for digit in digits {
        if mantissa >> full == 0 {
            mantissa = (mantissa << bits_per_digit) | u64::from(digit);
        } else {
            dropped_bits = dropped_bits.saturating_add(bits_per_digit);
            sticky |= digit != 0;
        }
    }

    if mantissa == 0 {
        return 0.0;
    }

    let width = u64::BITS - mantissa.leading_zeros();
    if width <= f64::MANTISSA_DIGITS {
        // Exact; nothing can have been dropped below a value this narrow.
        return scale_pow2(mantissa as f64, dropped_bits);
    }

    let shift = width - f64::MANTISSA_DIGITS;
    let mut kept = mantissa >> shift;
    let rest = mantissa & ((1 << shift) - 1);
    let half = 1 << (shift - 1);
    if rest > half || (rest == half && (sticky || kept & 1 == 1)) {
        // May carry into bit 53; 2^53 is still exact.
        kept += 1;
    }
    scale_pow2(kept as f64, shift + dropped_bits)
}

/// `value * 2^exp` for an integral `value` below 2^54.
///
/// Each step multiplies by an exact power of two, so the only rounding that
/// can happen is the final overflow to infinity.
fn scale_pow2(mut value: f64, mut exp: u32) -> f64 {
    const MAX_STEP: u32 = 1023;
    while exp > 0 && value.is_finite() {
        let step = exp.min(MAX_STEP);
        value *= f64::from_bits(u64::from(1023 + step) << 52);
        exp -= step;
    }
    value
}

/// Converts a decimal lexeme the scanner has accepted.
///
/// The lexeme is a subset of what `core` accepts for `f64`, so this never
/// fails in practice; NaN is returned rather than panicking if it ever did.
pub(crate) fn decimal_to_f64(lexeme: &str) -> f64 {
    lexeme.parse::<f64>().unwrap_or(f64::NAN)
}
