use alloc::collections::VecDeque;

use super::ByteSource;
use crate::{error::PushbackError, scan::MAX_RUNE_LEN};

/// Adds a bounded pushback stack to any [`ByteSource`].
///
/// Pushed-back bytes are served before the wrapped source is read again,
/// last pushed first. With the default capacity of [`MAX_RUNE_LEN`] bytes any
/// single rune can be pushed back, whatever the wrapped source supports.
#[derive(Debug, Clone)]
pub struct PushbackBuffer<S> {
    inner: S,
    pending: VecDeque<u8>,
    capacity: usize,
}

impl<S: ByteSource> PushbackBuffer<S> {
    /// Wraps `inner` with room for one rune.
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self::with_capacity(inner, MAX_RUNE_LEN)
    }

    /// Wraps `inner` with room for `capacity` pushed-back bytes.
    #[must_use]
    pub fn with_capacity(inner: S, capacity: usize) -> Self {
        Self {
            inner,
            pending: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of pushed-back bytes waiting to be read.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// The wrapped source.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// The wrapped source. Reading from it directly skips pushed-back bytes.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwraps the source, dropping any pushed-back bytes.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ByteSource> ByteSource for PushbackBuffer<S> {
    type Error = S::Error;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        match self.pending.pop_front() {
            Some(byte) => Ok(Some(byte)),
            None => self.inner.read_byte(),
        }
    }

    fn unread_byte(&mut self, byte: u8) -> Result<(), PushbackError> {
        if self.pending.len() >= self.capacity {
            return Err(PushbackError::PushbackUnsupported {
                requested: 1,
                available: 0,
            });
        }
        self.pending.push_front(byte);
        Ok(())
    }

    fn pushback_capacity(&self) -> usize {
        self.capacity - self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParseResult, SliceSource, encode, read_rune, unread_rune};

    #[test]
    fn pending_bytes_come_first_in_stack_order() {
        let mut source = PushbackBuffer::new(SliceSource::new(b"c"));
        source.unread_byte(b'b').unwrap();
        source.unread_byte(b'a').unwrap();
        assert_eq!(source.pending(), 2);
        assert_eq!(source.pushback_capacity(), 2);
        assert_eq!(source.read_byte(), Ok(Some(b'a')));
        assert_eq!(source.read_byte(), Ok(Some(b'b')));
        assert_eq!(source.read_byte(), Ok(Some(b'c')));
        assert_eq!(source.read_byte(), Ok(None));
    }

    #[test]
    fn full_buffer_refuses_more() {
        let mut source = PushbackBuffer::with_capacity(SliceSource::new(b""), 1);
        assert_eq!(source.unread_byte(1), Ok(()));
        assert_eq!(
            source.unread_byte(2),
            Err(PushbackError::PushbackUnsupported {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn four_byte_rune_round_trips() {
        let mut source = PushbackBuffer::new(SliceSource::new("\u{1F600}".as_bytes()));
        let ParseResult::Codepoint(cp) = read_rune(&mut source).unwrap() else {
            panic!("expected a codepoint");
        };
        unread_rune(&mut source, encode(cp).unwrap()).unwrap();
        assert_eq!(source.pushback_capacity(), 0);
        assert_eq!(read_rune(&mut source), Ok(ParseResult::Codepoint(0x1_F600)));
        assert_eq!(read_rune(&mut source), Ok(ParseResult::EndOfInput));
        assert!(source.into_inner().remaining().is_empty());
    }
}
