//! Rune reading and pushback against sequential byte sources.
//!
//! [`read_rune`] follows the same steps as the cursor parser but pulls one
//! byte at a time, so a source that runs dry mid-rune reports `Short`. Bytes
//! already pulled for a failed rune stay consumed.
//!
//! [`unread_rune`] pushes a rune's bytes back last byte first so the next
//! [`read_rune`] sees it again. Most sources can only undo a single byte;
//! wrap them in a [`PushbackBuffer`] to push back whole runes.

#[cfg(feature = "std")]
mod io;
mod pushback;
mod slice;

#[cfg(feature = "std")]
pub use io::IoSource;
pub use pushback::PushbackBuffer;
pub use slice::SliceSource;

use crate::{
    error::PushbackError,
    parser::ParseResult,
    rune::Rune,
    scan::{MAX_RUNE_LEN, rune_len},
    validator::checked_codepoint,
};

/// A sequential byte input that can take bytes back.
pub trait ByteSource {
    /// Failure of the underlying input. In-memory sources use
    /// [`core::convert::Infallible`].
    type Error;

    /// Pulls the next byte, or `None` at the end of the input.
    ///
    /// # Errors
    ///
    /// Whatever the underlying input reports.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Pushes `byte` back so the next [`read_byte`](Self::read_byte) returns
    /// it.
    ///
    /// # Errors
    ///
    /// [`PushbackError::PushbackUnsupported`] if the source has no room for
    /// another byte or cannot take this one back.
    fn unread_byte(&mut self, byte: u8) -> Result<(), PushbackError>;

    /// How many more bytes [`unread_byte`](Self::unread_byte) can accept.
    fn pushback_capacity(&self) -> usize;

    /// Whether `bytes`, pushed back last byte first, would all be accepted.
    ///
    /// Defaults to a capacity check. Sources that only take back specific
    /// bytes override it so a refused pushback leaves them untouched.
    fn can_unread(&self, bytes: &[u8]) -> bool {
        bytes.len() <= self.pushback_capacity()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).read_byte()
    }

    fn unread_byte(&mut self, byte: u8) -> Result<(), PushbackError> {
        (**self).unread_byte(byte)
    }

    fn pushback_capacity(&self) -> usize {
        (**self).pushback_capacity()
    }

    fn can_unread(&self, bytes: &[u8]) -> bool {
        (**self).can_unread(bytes)
    }
}

/// Reads one rune from `stream`.
///
/// ```
/// use utf8rune::{read_rune, ParseResult, SliceSource};
///
/// let mut source = SliceSource::new(&[0xE7, 0x9A, 0x84, 0xE8]);
/// assert_eq!(read_rune(&mut source), Ok(ParseResult::Codepoint(0x7684)));
/// assert_eq!(read_rune(&mut source), Ok(ParseResult::Short));
/// assert_eq!(read_rune(&mut source), Ok(ParseResult::EndOfInput));
/// ```
///
/// # Errors
///
/// Errors of the underlying source are passed through; malformed input is
/// reported in the [`ParseResult`].
pub fn read_rune<S: ByteSource + ?Sized>(stream: &mut S) -> Result<ParseResult, S::Error> {
    let Some(lead) = stream.read_byte()? else {
        return Ok(ParseResult::EndOfInput);
    };
    let Ok(len) = rune_len(lead) else {
        return Ok(ParseResult::InvalidStart);
    };
    let len = usize::from(len);

    let mut bytes = [0; MAX_RUNE_LEN];
    bytes[0] = lead;
    for slot in &mut bytes[1..len] {
        match stream.read_byte()? {
            Some(b) => *slot = b,
            None => return Ok(ParseResult::Short),
        }
    }

    Ok(match checked_codepoint(&bytes[..len]) {
        Some(cp) => ParseResult::Codepoint(cp),
        None => ParseResult::Invalid,
    })
}

/// Pushes `rune` back onto `stream`.
///
/// Nothing is pushed unless [`ByteSource::can_unread`] accepts the whole rune.
///
/// # Errors
///
/// [`PushbackError::PushbackUnsupported`] when the stream cannot take the
/// whole rune back.
pub fn unread_rune<S: ByteSource + ?Sized>(
    stream: &mut S,
    rune: Rune,
) -> Result<(), PushbackError> {
    let bytes = rune.as_bytes();
    if !stream.can_unread(bytes) {
        let requested = bytes.len();
        // Room for the rune but not for these bytes counts as no room.
        let available = match stream.pushback_capacity() {
            room if room < requested => room,
            _ => 0,
        };
        log::debug!(
            "utf8rune pushback refused: {requested} bytes requested, {available} available"
        );
        return Err(PushbackError::PushbackUnsupported {
            requested,
            available,
        });
    }
    for &byte in bytes.iter().rev() {
        stream.unread_byte(byte)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::encode;

    fn read_all<S>(mut source: S) -> Vec<ParseResult>
    where
        S: ByteSource<Error = core::convert::Infallible>,
    {
        let mut out = Vec::new();
        loop {
            let Ok(result) = read_rune(&mut source);
            out.push(result);
            if result == ParseResult::EndOfInput {
                return out;
            }
        }
    }

    #[test]
    fn reads_runes_in_order() {
        let text = "a\u{7684}\u{1F600}";
        assert_eq!(
            read_all(SliceSource::new(text.as_bytes())),
            [
                ParseResult::Codepoint(0x61),
                ParseResult::Codepoint(0x7684),
                ParseResult::Codepoint(0x1_F600),
                ParseResult::EndOfInput
            ]
        );
    }

    #[test]
    fn errors_consume_bytes_and_reading_goes_on() {
        // InvalidStart consumes the stray continuation byte; Invalid consumes
        // the whole declared length.
        assert_eq!(
            read_all(SliceSource::new(&[0x9A, 0x41, 0xC0, 0x80, 0x42])),
            [
                ParseResult::InvalidStart,
                ParseResult::Codepoint(0x41),
                ParseResult::Invalid,
                ParseResult::Codepoint(0x42),
                ParseResult::EndOfInput
            ]
        );
    }

    #[test]
    fn stream_ending_mid_rune_is_short() {
        assert_eq!(
            read_all(SliceSource::new(&[0xF0, 0x9F, 0x98])),
            [ParseResult::Short, ParseResult::EndOfInput]
        );
    }

    #[test]
    fn unread_then_read_reproduces_rune() {
        let mut source = PushbackBuffer::new(SliceSource::new(b"xy"));
        let rune = encode(0x7684).unwrap();
        assert_eq!(unread_rune(&mut source, rune), Ok(()));
        assert_eq!(read_rune(&mut source), Ok(ParseResult::Codepoint(0x7684)));
        assert_eq!(read_rune(&mut source), Ok(ParseResult::Codepoint(0x78)));
    }

    #[test]
    fn refused_pushback_leaves_stream_untouched() {
        let mut source = PushbackBuffer::with_capacity(SliceSource::new(b"z"), 2);
        let rune = encode(0x7684).unwrap();
        assert_eq!(
            unread_rune(&mut source, rune),
            Err(PushbackError::PushbackUnsupported {
                requested: 3,
                available: 2
            })
        );
        assert_eq!(read_rune(&mut source), Ok(ParseResult::Codepoint(0x7A)));
    }

    #[test]
    fn works_through_mutable_reference() {
        let mut source = SliceSource::new(b"q");
        let by_ref: &mut dyn ByteSource<Error = core::convert::Infallible> = &mut source;
        assert_eq!(read_rune(by_ref), Ok(ParseResult::Codepoint(0x71)));
    }
}
