#![no_main]
use std::cell::RefCell;
use std::fmt::Write;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, RngCore, SeedableRng};
use strnum::{NumericParser, ParserOptions};

const HEADER: usize = 1; // option flags

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&str] = &[
    " ", "\t", "\n", "\r", "\u{0B}", "\u{0C}", // trim set
    "\u{A0}", "\u{85}", "\u{FEFF}", "\u{1680}", "\u{2000}", "\u{200A}", "\u{2028}", "\u{2029}",
    "\u{202F}", "\u{205F}", "\u{3000}",
];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// A numeral-shaped body, so the fuzzer spends most of its time near the
/// grammar instead of on random bytes.
#[derive(Arbitrary, Debug)]
enum Body {
    Decimal {
        int: Option<u64>,
        leading_zeros: u8,
        frac: Option<u32>,
        exp: Option<(bool, i16)>,
    },
    Radix {
        prefix: u8,
        digits: u128,
    },
    Infinity,
    Junk(String),
}

#[derive(Arbitrary, Debug)]
struct ArbitraryNumeral {
    sign: Option<bool>,
    body: Body,
}

impl ArbitraryNumeral {
    fn render(&self, out: &mut String) {
        match self.sign {
            Some(true) => out.push('-'),
            Some(false) => out.push('+'),
            None => {}
        }
        match &self.body {
            Body::Decimal {
                int,
                leading_zeros,
                frac,
                exp,
            } => {
                out.extend(std::iter::repeat_n('0', usize::from(leading_zeros % 4)));
                if let Some(int) = int {
                    let _ = write!(out, "{int}");
                }
                if let Some(frac) = frac {
                    let _ = write!(out, ".{frac}");
                }
                if let Some((upper, exp)) = exp {
                    out.push(if *upper { 'E' } else { 'e' });
                    let _ = write!(out, "{exp:+}");
                }
            }
            Body::Radix { prefix, digits } => {
                let _ = match prefix % 6 {
                    0 => write!(out, "0x{digits:x}"),
                    1 => write!(out, "0X{digits:X}"),
                    2 => write!(out, "0b{digits:b}"),
                    3 => write!(out, "0B{digits:b}"),
                    4 => write!(out, "0o{digits:o}"),
                    _ => write!(out, "0O{digits:o}"),
                };
            }
            Body::Infinity => out.push_str("Infinity"),
            Body::Junk(junk) => out.push_str(junk),
        }
    }
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x07);

        let mut text = String::new();
        append_whitespace(&mut text);
        append_numeral(&mut text, size.max(16));
        append_whitespace(&mut text);

        let len = text.len().min(max_size - HEADER);
        data[HEADER..HEADER + len].copy_from_slice(&text.as_bytes()[..len]);
        HEADER + len
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append 0‒4 whitespace code points drawn from `WS_TABLE`.
fn append_whitespace(out: &mut String) {
    with_rng(|rng| {
        for _ in 0..rng.random_range(0..=4) {
            out.push_str(WS_TABLE[rng.random_range(0..WS_TABLE.len())]);
        }
    });
}

fn append_numeral(out: &mut String, size: usize) {
    let numeral = loop {
        let bytes: Vec<u8> = with_rng(|rng| (0..size).map(|_| rng.random::<u8>()).collect());
        if let Ok(numeral) = ArbitraryNumeral::arbitrary(&mut arbitrary::Unstructured::new(&bytes))
        {
            break numeral;
        }
    };
    numeral.render(out);
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn same_result(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

fn parser(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let text = String::from_utf8_lossy(&data[HEADER..]).into_owned();

    let options = ParserOptions {
        allow_unicode_whitespace: flags & 1 != 0,
        allow_binary_and_octal: flags & 2 != 0,
        empty_as_zero: flags & 4 != 0,
    };
    let parser = NumericParser::new(options);

    let value = parser.parse(&text);
    assert!(same_result(value, parser.parse(&text)), "not deterministic");

    match parser.try_parse(&text) {
        Ok(v) => assert_eq!(v.to_bits(), value.to_bits(), "try_parse disagrees"),
        Err(err) => {
            assert!(value.is_nan(), "try_parse rejected {text:?}: {err}");
            assert!(err.offset() <= text.len());
        }
    }

    let units: Vec<u16> = text.encode_utf16().collect();
    assert!(
        same_result(value, parser.parse_utf16(&units)),
        "UTF-16 disagrees on {text:?}"
    );

    let padded = format!(" \u{0B}{text}\u{0C}\n");
    assert!(
        same_result(value, parser.parse(&padded)),
        "padding changed {text:?}"
    );

    assert!(parser.parse(&format!("{text} junk")).is_nan());

    // Every JSON number is also a numeral; check the value against a
    // correctly rounding reference.
    if let Ok(expected) = serde_json::from_str::<f64>(&text) {
        assert!(
            value == expected,
            "{text:?}: got {value:?}, serde_json says {expected:?}"
        );
    }
}

fuzz_target!(|data: &[u8]| parser(data));
