use std::io::{self, ErrorKind, Read};

use super::ByteSource;
use crate::error::PushbackError;

/// A [`ByteSource`] over any [`std::io::Read`], pulling one byte per call.
///
/// Like C's `ungetc` it holds at most one pushed-back byte. Wrap it in a
/// [`PushbackBuffer`](crate::PushbackBuffer) to push back whole runes, and
/// give it a buffered reader to avoid a system call per byte.
#[derive(Debug)]
pub struct IoSource<R> {
    reader: R,
    unread: Option<u8>,
}

impl<R: Read> IoSource<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            unread: None,
        }
    }

    /// Unwraps the reader, dropping a pushed-back byte if there is one.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    type Error = io::Error;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if let Some(byte) = self.unread.take() {
            return Ok(Some(byte));
        }
        let mut buf = [0; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }

    fn unread_byte(&mut self, byte: u8) -> Result<(), PushbackError> {
        if self.unread.is_some() {
            return Err(PushbackError::PushbackUnsupported {
                requested: 1,
                available: 0,
            });
        }
        self.unread = Some(byte);
        Ok(())
    }

    fn pushback_capacity(&self) -> usize {
        usize::from(self.unread.is_none())
    }
}
