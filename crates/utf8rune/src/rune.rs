use core::fmt;

use bstr::BStr;

use crate::{
    codec,
    error::{DecodeError, EncodeError, RuneError},
    scan::{MAX_RUNE_LEN, rune_len},
    validator,
};

/// One encoded UTF-8 character: up to four bytes in wire order plus their
/// count.
///
/// A `Rune` always agrees with its lead byte about its length, but it is not
/// necessarily well-formed: `C0 80` is a two-byte rune that
/// [`is_valid`](Rune::is_valid) rejects. Runes built from a `char` or by
/// [`encode`](crate::encode) are always valid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rune {
    // Bytes past `len` stay zero so derived equality and hashing hold.
    bytes: [u8; MAX_RUNE_LEN],
    len: u8,
}

impl Rune {
    /// Copies `bytes` into a rune after checking that the lead byte declares
    /// exactly `bytes.len()` bytes.
    ///
    /// # Errors
    ///
    /// [`RuneError::Empty`], [`RuneError::InvalidStart`] or
    /// [`RuneError::LengthMismatch`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RuneError> {
        let &lead = bytes.first().ok_or(RuneError::Empty)?;
        let declared = rune_len(lead)?;
        if usize::from(declared) != bytes.len() {
            return Err(RuneError::LengthMismatch {
                declared,
                actual: bytes.len(),
            });
        }
        let mut buf = [0; MAX_RUNE_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self::from_parts(buf, declared))
    }

    /// Callers guarantee `len` matches the lead byte and the tail is zeroed.
    pub(crate) const fn from_parts(bytes: [u8; MAX_RUNE_LEN], len: u8) -> Self {
        Self { bytes, len }
    }

    /// The encoded bytes, lead byte first.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    /// Number of bytes, between 1 and 4.
    #[inline]
    #[must_use]
    #[expect(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// The first byte.
    #[inline]
    #[must_use]
    pub fn lead(&self) -> u8 {
        self.bytes[0]
    }

    /// Whether the rune is well-formed per RFC 3629.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validator::is_valid(*self)
    }

    /// Decodes the rune.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Malformed`] if the rune is not well-formed.
    pub fn codepoint(&self) -> Result<u32, DecodeError> {
        codec::decode(*self)
    }

    /// Decodes the rune into a `char`, or `None` if it is not well-formed.
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        self.codepoint().ok().and_then(char::from_u32)
    }
}

impl From<char> for Rune {
    #[expect(clippy::cast_possible_truncation)]
    fn from(ch: char) -> Self {
        let mut bytes = [0; MAX_RUNE_LEN];
        let len = ch.encode_utf8(&mut bytes).len();
        Self::from_parts(bytes, len as u8)
    }
}

impl TryFrom<u32> for Rune {
    type Error = EncodeError;

    fn try_from(cp: u32) -> Result<Self, Self::Error> {
        codec::encode(cp)
    }
}

impl TryFrom<&[u8]> for Rune {
    type Error = RuneError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Rune {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Rune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rune")
            .field(&BStr::new(self.as_bytes()))
            .finish()
    }
}

/// Writes the character, or U+FFFD if the rune is not well-formed.
impl fmt::Display for Rune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_char().unwrap_or(char::REPLACEMENT_CHARACTER), f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rune {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(self.as_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rune {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let bytes: alloc::vec::Vec<u8> = serde::Deserialize::deserialize(deserializer)?;
        Rune::from_bytes(&bytes).map_err(D::Error::custom)
    }
}
