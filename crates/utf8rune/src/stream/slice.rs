use core::convert::Infallible;

use super::ByteSource;
use crate::error::PushbackError;

/// A [`ByteSource`] over borrowed bytes.
///
/// Pushback rewinds the cursor, so it only accepts the bytes that were just
/// read, in reverse order.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Starts reading at the first byte.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Number of bytes read so far, net of pushback.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The bytes not read yet.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    type Error = Infallible;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let byte = self.bytes.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }

    fn unread_byte(&mut self, byte: u8) -> Result<(), PushbackError> {
        match self.pos.checked_sub(1) {
            Some(prev) if self.bytes[prev] == byte => {
                self.pos = prev;
                Ok(())
            }
            _ => Err(PushbackError::PushbackUnsupported {
                requested: 1,
                available: 0,
            }),
        }
    }

    fn pushback_capacity(&self) -> usize {
        self.pos
    }

    fn can_unread(&self, bytes: &[u8]) -> bool {
        self.pos
            .checked_sub(bytes.len())
            .is_some_and(|start| &self.bytes[start..self.pos] == bytes)
    }
}
