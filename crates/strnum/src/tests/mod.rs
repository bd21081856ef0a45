mod parse_good;

/// The trim set, in the order the conformance suite lists it plus vertical tab.
pub(crate) const TRIM_SET: [char; 6] = [' ', '\n', '\r', '\t', '\u{0C}', '\u{0B}'];

/// Asserts bit equality so that `0.0` and `-0.0` are told apart.
#[track_caller]
pub(crate) fn assert_converts(text: &str, expected: f64) {
    let actual = crate::parse_numeric_string(text);
    assert_eq!(
        actual.to_bits(),
        expected.to_bits(),
        "{text:?} converted to {actual:?}, expected {expected:?}"
    );
}

#[track_caller]
pub(crate) fn assert_nan(text: &str) {
    let actual = crate::parse_numeric_string(text);
    assert!(actual.is_nan(), "{text:?} converted to {actual:?}, expected NaN");
}

/// Number of quickcheck cases per property.
pub(crate) fn quickcheck_tests() -> u64 {
    if cfg!(miri) {
        10
    } else if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}
