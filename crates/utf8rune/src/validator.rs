//! RFC 3629 well-formedness of a single candidate rune.

use crate::{
    codec::{MAX_CODEPOINT, is_surrogate, min_codepoint, unpack},
    rune::Rune,
    scan::{is_continuation, is_reserved_lead, rune_len},
};

/// Whether `rune` is well-formed UTF-8.
///
/// Rejects reserved lead bytes (`C0`, `C1`, `F5..=FF`), continuation bytes
/// that do not match `10xxxxxx`, overlong forms, surrogates and values above
/// `U+10FFFF`.
///
/// ```
/// use utf8rune::{is_valid, Rune};
///
/// assert!(is_valid(Rune::from('的')));
/// assert!(!is_valid(Rune::from_bytes(&[0xC0, 0xAF]).unwrap()));
/// ```
#[must_use]
pub fn is_valid(rune: Rune) -> bool {
    checked_codepoint(rune.as_bytes()).is_some()
}

/// The codepoint of `bytes` if they form exactly one well-formed rune.
pub(crate) fn checked_codepoint(bytes: &[u8]) -> Option<u32> {
    let (&lead, tail) = bytes.split_first()?;
    let len = rune_len(lead).ok()?;
    if usize::from(len) != bytes.len() || is_reserved_lead(lead) {
        return None;
    }
    if !tail.iter().all(|&b| is_continuation(b)) {
        return None;
    }

    let cp = unpack(bytes);
    if cp < min_codepoint(len) || cp > MAX_CODEPOINT || is_surrogate(cp) {
        return None;
    }
    Some(cp)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn rune(bytes: &[u8]) -> Rune {
        Rune::from_bytes(bytes).unwrap()
    }

    #[rstest]
    #[case::ascii(&[0x41])]
    #[case::nul(&[0x00])]
    #[case::two(&[0xC2, 0xA9])]
    #[case::three(&[0xE8, 0x9A, 0x84])]
    #[case::four(&[0xF0, 0x9F, 0x98, 0x80])]
    #[case::max(&[0xF4, 0x8F, 0xBF, 0xBF])]
    fn accepts(#[case] bytes: &[u8]) {
        assert!(is_valid(rune(bytes)));
    }

    #[rstest]
    #[case::c0(&[0xC0, 0x80])]
    #[case::c1(&[0xC1, 0xBF])]
    #[case::f5(&[0xF5, 0x80, 0x80, 0x80])]
    #[case::f7(&[0xF7, 0xBF, 0xBF, 0xBF])]
    #[case::ascii_continuation(&[0xC2, 0x41])]
    #[case::lead_as_continuation(&[0xE8, 0xC2, 0x84])]
    #[case::overlong_three(&[0xE0, 0x9F, 0xBF])]
    #[case::overlong_four(&[0xF0, 0x80, 0x80, 0x80])]
    #[case::surrogate_low(&[0xED, 0xA0, 0x80])]
    #[case::surrogate_high(&[0xED, 0xBF, 0xBF])]
    #[case::above_max(&[0xF4, 0x90, 0x80, 0x80])]
    fn rejects(#[case] bytes: &[u8]) {
        assert!(!is_valid(rune(bytes)));
    }

    #[test]
    fn every_reserved_lead_is_rejected() {
        for lead in [0xC0_u8, 0xC1, 0xF5, 0xF6, 0xF7] {
            let len = usize::from(rune_len(lead).unwrap());
            let mut bytes = [0x80_u8; 4];
            bytes[0] = lead;
            // Pick continuation bytes that would otherwise be acceptable.
            for b in &mut bytes[1..len] {
                *b = 0xBF;
            }
            assert!(!is_valid(rune(&bytes[..len])), "lead 0x{lead:02X}");
        }
    }

    #[test]
    fn checked_codepoint_needs_exact_length() {
        assert_eq!(checked_codepoint(&[0xC2, 0xA9]), Some(0xA9));
        assert_eq!(checked_codepoint(&[0xC2, 0xA9, 0x41]), None);
        assert_eq!(checked_codepoint(&[0xC2]), None);
        assert_eq!(checked_codepoint(&[]), None);
    }
}
