//! Lead-byte classification.
//!
//! A rune's length is declared by the run of leading one bits in its lead
//! byte. The scan is bounded at four bits: RFC 3629 retired the five- and
//! six-byte forms of the original UTF-8 proposal, so `11111xxx` is rejected
//! together with the continuation pattern `10xxxxxx`.

use crate::error::ScanError;

/// Longest rune RFC 3629 allows.
pub const MAX_RUNE_LEN: usize = 4;

/// Returns the number of bytes of the rune opened by `lead`.
///
/// ```
/// use utf8rune::{rune_len, ScanError};
///
/// assert_eq!(rune_len(b'a'), Ok(1));
/// assert_eq!(rune_len(0xE8), Ok(3));
/// assert_eq!(rune_len(0x9A), Err(ScanError::InvalidStart(0x9A)));
/// ```
///
/// # Errors
///
/// [`ScanError::InvalidStart`] for continuation bytes and for bytes with
/// more than four leading ones.
#[inline]
#[expect(clippy::cast_possible_truncation)]
pub const fn rune_len(lead: u8) -> Result<u8, ScanError> {
    match lead.leading_ones() {
        0 => Ok(1),
        n @ 2..=4 => Ok(n as u8),
        _ => Err(ScanError::InvalidStart(lead)),
    }
}

/// `true` for bytes of the form `10xxxxxx`.
#[inline]
#[must_use]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// `true` for lead bytes RFC 3629 forbids outright: `C0` and `C1` could only
/// start overlong two-byte forms, `F5..=FF` would encode values above
/// `U+10FFFF` or are not lead bytes at all.
#[inline]
#[must_use]
pub const fn is_reserved_lead(byte: u8) -> bool {
    matches!(byte, 0xC0 | 0xC1 | 0xF5..=0xFF)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::ascii(0x00..=0x7F, Some(1))]
    #[case::continuation(0x80..=0xBF, None)]
    #[case::two(0xC0..=0xDF, Some(2))]
    #[case::three(0xE0..=0xEF, Some(3))]
    #[case::four(0xF0..=0xF7, Some(4))]
    #[case::too_long(0xF8..=0xFF, None)]
    fn lengths_by_range(
        #[case] bytes: core::ops::RangeInclusive<u8>,
        #[case] expected: Option<u8>,
    ) {
        for b in bytes {
            match expected {
                Some(len) => assert_eq!(rune_len(b), Ok(len), "byte 0x{b:02X}"),
                None => assert_eq!(rune_len(b), Err(ScanError::InvalidStart(b))),
            }
        }
    }

    #[test]
    fn continuation_pattern() {
        assert!(is_continuation(0x80));
        assert!(is_continuation(0xBF));
        assert!(!is_continuation(0x7F));
        assert!(!is_continuation(0xC0));
    }

    #[test]
    fn reserved_leads() {
        let reserved: alloc::vec::Vec<u8> =
            (0..=u8::MAX).filter(|&b| is_reserved_lead(b)).collect();
        let mut expected = alloc::vec![0xC0, 0xC1];
        expected.extend(0xF5..=0xFF);
        assert_eq!(reserved, expected);
    }
}
