//! Packing and unpacking of single runes.
//!
//! A rune of `N > 1` bytes is `N` ones, a zero and the top `7 - N` payload
//! bits in the lead byte, followed by `N - 1` continuation bytes of the form
//! `10xxxxxx` carrying six payload bits each, most significant first.

use crate::{
    error::{DecodeError, EncodeError},
    rune::Rune,
    scan::MAX_RUNE_LEN,
    validator,
};

/// Largest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

#[inline]
pub(crate) const fn is_surrogate(cp: u32) -> bool {
    matches!(cp, 0xD800..=0xDFFF)
}

/// Smallest codepoint that needs `len` bytes. Anything smaller encoded in
/// `len` bytes is an overlong form.
///
/// Returns `0` for lengths outside `1..=4`.
#[must_use]
pub const fn min_codepoint(len: u8) -> u32 {
    match len {
        2 => 0x80,
        3 => 0x800,
        4 => 0x1_0000,
        _ => 0,
    }
}

/// Number of bytes needed to encode `cp`.
///
/// # Errors
///
/// [`EncodeError::OutOfRange`] for surrogates and values above
/// [`MAX_CODEPOINT`].
pub const fn encoded_len(cp: u32) -> Result<usize, EncodeError> {
    match cp {
        0..0x80 => Ok(1),
        0x80..0x800 => Ok(2),
        0xD800..=0xDFFF => Err(EncodeError::OutOfRange(cp)),
        0x800..0x1_0000 => Ok(3),
        0x1_0000..=MAX_CODEPOINT => Ok(4),
        _ => Err(EncodeError::OutOfRange(cp)),
    }
}

/// Encodes `cp` as a [`Rune`].
///
/// ```
/// use utf8rune::{encode, EncodeError};
///
/// assert_eq!(encode(0x7684).unwrap().as_bytes(), &[0xE7, 0x9A, 0x84]);
/// assert_eq!(encode(0x11_0000), Err(EncodeError::OutOfRange(0x11_0000)));
/// ```
///
/// # Errors
///
/// [`EncodeError::OutOfRange`] for surrogates and values above
/// [`MAX_CODEPOINT`].
#[expect(clippy::cast_possible_truncation)]
pub fn encode(cp: u32) -> Result<Rune, EncodeError> {
    let mut bytes = [0; MAX_RUNE_LEN];
    let len = encode_into(cp, &mut bytes)?;
    Ok(Rune::from_parts(bytes, len as u8))
}

/// Writes the encoding of `cp` to the front of `buf` and returns the number
/// of bytes written. Bytes past that count are left untouched.
///
/// # Errors
///
/// [`EncodeError::OutOfRange`] for surrogates and values above
/// [`MAX_CODEPOINT`]; `buf` is not modified.
#[expect(clippy::cast_possible_truncation)]
pub fn encode_into(cp: u32, buf: &mut [u8; MAX_RUNE_LEN]) -> Result<usize, EncodeError> {
    let len = encoded_len(cp)?;
    if len == 1 {
        buf[0] = cp as u8;
        return Ok(1);
    }

    let header = (0xFF00_u16 >> len) as u8;
    buf[0] = header | (cp >> (6 * (len - 1))) as u8;
    for (i, byte) in buf[1..len].iter_mut().enumerate() {
        let shift = 6 * (len - 2 - i);
        *byte = 0b1000_0000 | ((cp >> shift) & 0b0011_1111) as u8;
    }
    Ok(len)
}

/// Reassembles the payload bits of a rune whose shape has been checked:
/// `bytes` holds between one and four bytes and the lead byte declares
/// `bytes.len()`.
pub(crate) fn unpack(bytes: &[u8]) -> u32 {
    let Some((&lead, tail)) = bytes.split_first() else {
        return 0;
    };
    if tail.is_empty() {
        return u32::from(lead);
    }
    let payload = 0x7F_u8 >> bytes.len();
    tail.iter().fold(u32::from(lead & payload), |cp, &b| {
        (cp << 6) | u32::from(b & 0b0011_1111)
    })
}

/// Decodes a rune.
///
/// # Errors
///
/// [`DecodeError::Malformed`] if [`is_valid`](crate::is_valid) would reject
/// the rune.
pub fn decode(rune: Rune) -> Result<u32, DecodeError> {
    decode_bytes(rune.as_bytes())
}

/// Decodes exactly one rune held in `bytes`.
///
/// ```
/// use utf8rune::{decode_bytes, DecodeError};
///
/// assert_eq!(decode_bytes(&[0xE7, 0x9A, 0x84]), Ok(0x7684));
/// assert_eq!(decode_bytes(&[0xE8, 0x9A, 0x84]), Ok(0x8684));
/// assert_eq!(decode_bytes(&[0xE8, 0x9A]), Err(DecodeError::Malformed));
/// ```
///
/// # Errors
///
/// [`DecodeError::Malformed`] unless `bytes` is one complete, well-formed
/// rune.
pub fn decode_bytes(bytes: &[u8]) -> Result<u32, DecodeError> {
    validator::checked_codepoint(bytes).ok_or(DecodeError::Malformed)
}
