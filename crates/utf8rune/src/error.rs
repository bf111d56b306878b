use thiserror::Error;

/// A lead byte that cannot open a rune.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// Continuation bytes (`10xxxxxx`) and bytes with five or more leading
    /// ones (`11111xxx`) never begin a rune.
    #[error("invalid start byte 0x{0:02X}")]
    InvalidStart(u8),
}

/// The codepoint has no UTF-8 encoding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Above `U+10FFFF` or inside the surrogate range.
    #[error("codepoint 0x{0:X} is not a Unicode scalar value")]
    OutOfRange(u32),
}

impl EncodeError {
    /// The rejected codepoint.
    #[must_use]
    pub fn codepoint(&self) -> u32 {
        match *self {
            EncodeError::OutOfRange(cp) => cp,
        }
    }

    /// Returns `true` if the codepoint was rejected for being a surrogate
    /// rather than for exceeding [`MAX_CODEPOINT`](crate::MAX_CODEPOINT).
    #[must_use]
    pub fn is_surrogate(&self) -> bool {
        crate::codec::is_surrogate(self.codepoint())
    }
}

/// The rune's bytes do not reconstruct a scalar value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Bad lead byte, bad continuation byte, overlong form, surrogate or a
    /// value above `U+10FFFF`.
    #[error("malformed rune")]
    Malformed,
}

/// Raw bytes cannot be held by a [`Rune`](crate::Rune).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuneError {
    /// No bytes were given.
    #[error("empty rune")]
    Empty,
    /// The first byte cannot open a rune.
    #[error("invalid start byte 0x{0:02X}")]
    InvalidStart(u8),
    /// The lead byte declares a different length than the slice has.
    #[error("lead byte declares {declared} bytes but {actual} were given")]
    LengthMismatch {
        /// Length declared by the lead byte.
        declared: u8,
        /// Length of the given slice.
        actual: usize,
    },
}

impl From<ScanError> for RuneError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::InvalidStart(b) => RuneError::InvalidStart(b),
        }
    }
}

/// A stream refused to take bytes back.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushbackError {
    /// The stream can hold fewer pushed-back bytes than were requested.
    #[error("cannot push back {requested} bytes, stream accepts {available}")]
    PushbackUnsupported {
        /// Bytes the caller tried to push back.
        requested: usize,
        /// Bytes the stream could still accept. Zero when it has room but
        /// cannot take these particular bytes back.
        available: usize,
    },
}

/// A terminating failure of the [`Parser`](crate::Parser), located by the
/// byte offset of the offending rune's lead byte.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The byte at `offset` cannot begin a rune.
    #[error("invalid start byte at offset {offset}")]
    InvalidStart {
        /// Offset of the lead byte.
        offset: usize,
    },
    /// The rune at `offset` has the right length but is not well-formed.
    #[error("invalid rune at offset {offset}")]
    Invalid {
        /// Offset of the lead byte.
        offset: usize,
    },
    /// The input ends before the rune at `offset` is complete.
    #[error("truncated rune at offset {offset}")]
    Short {
        /// Offset of the lead byte.
        offset: usize,
    },
}

impl ParseError {
    /// Offset of the lead byte of the rune that failed.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            ParseError::InvalidStart { offset }
            | ParseError::Invalid { offset }
            | ParseError::Short { offset } => offset,
        }
    }
}
