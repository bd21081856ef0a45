//! Code-unit views over the two input encodings.
//!
//! The grammar itself is pure ASCII, so the scanner only ever needs three
//! things from its input: the ASCII byte at a position (if there is one),
//! full characters at the two ends for whitespace trimming and error
//! reporting, and the text of a range it has already validated. UTF-8 input
//! hands out borrowed slices; UTF-16 input has to narrow into an owned
//! string.

use alloc::{borrow::Cow, string::String};
use core::ops::Range;

/// A sequence of code units the scanner can walk.
///
/// Positions are code-unit indices: bytes for `str`, 16-bit units for
/// `[u16]`. All positions the scanner passes in lie on character boundaries.
pub(crate) trait CodeUnits {
    fn unit_len(&self) -> usize;

    /// The unit at `index` if it is an ASCII character.
    fn ascii_at(&self, index: usize) -> Option<u8>;

    /// The character starting at `index` and its width in code units.
    fn char_at(&self, index: usize) -> Option<(char, usize)>;

    /// The character ending at `end` and its width in code units.
    fn char_before(&self, end: usize) -> Option<(char, usize)>;

    /// Text of a range that has been checked to be all ASCII.
    fn ascii_str(&self, range: Range<usize>) -> Cow<'_, str>;
}

impl CodeUnits for str {
    #[inline]
    fn unit_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn ascii_at(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied().filter(u8::is_ascii)
    }

    fn char_at(&self, index: usize) -> Option<(char, usize)> {
        let ch = self.get(index..)?.chars().next()?;
        Some((ch, ch.len_utf8()))
    }

    fn char_before(&self, end: usize) -> Option<(char, usize)> {
        let ch = self.get(..end)?.chars().next_back()?;
        Some((ch, ch.len_utf8()))
    }

    fn ascii_str(&self, range: Range<usize>) -> Cow<'_, str> {
        Cow::Borrowed(self.get(range).unwrap_or_default())
    }
}

impl CodeUnits for [u16] {
    #[inline]
    fn unit_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn ascii_at(&self, index: usize) -> Option<u8> {
        let unit = *self.get(index)?;
        u8::try_from(unit).ok().filter(u8::is_ascii)
    }

    fn char_at(&self, index: usize) -> Option<(char, usize)> {
        let tail = self.get(index..)?;
        match char::decode_utf16(tail.iter().copied()).next()? {
            Ok(ch) => Some((ch, ch.len_utf16())),
            // Lone surrogate
            Err(_) => Some((char::REPLACEMENT_CHARACTER, 1)),
        }
    }

    fn char_before(&self, end: usize) -> Option<(char, usize)> {
        let last = *self.get(end.checked_sub(1)?)?;
        if let Some(Ok(ch)) = char::decode_utf16([last]).next() {
            return Some((ch, 1));
        }
        let pair = end
            .checked_sub(2)
            .and_then(|i| self.get(i))
            .and_then(|&high| char::decode_utf16([high, last]).next())
            .and_then(Result::ok)
            .filter(|ch| ch.len_utf16() == 2);
        Some(pair.map_or((char::REPLACEMENT_CHARACTER, 1), |ch| (ch, 2)))
    }

    fn ascii_str(&self, range: Range<usize>) -> Cow<'_, str> {
        let units = self.get(range).unwrap_or_default();
        let text: String = units
            .iter()
            .map(|&unit| u8::try_from(unit).map_or(char::REPLACEMENT_CHARACTER, char::from))
            .collect();
        Cow::Owned(text)
    }
}
