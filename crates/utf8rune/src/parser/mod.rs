//! Forward-only cursor over a borrowed byte sequence.
//!
//! The parser composes the lead-byte scan and the rune validator:
//!
//! 1. At the end of the input (or at the terminator, see
//!    [`ParserOptions::nul_terminated`]) it moves to
//!    [`ParserState::AtEnd`] and reports `EndOfInput`.
//! 2. A lead byte the scan rejects yields `InvalidStart`.
//! 3. Fewer bytes left than the lead byte declares yields `Short`.
//! 4. A rune the validator rejects yields `Invalid`.
//! 5. Otherwise the cursor advances past the rune.
//!
//! Errors are terminal: an in-memory buffer will never grow, so every later
//! call repeats the same error and the cursor stays on the offending lead
//! byte. The cursor never moves backwards.

mod options;
mod parse_result;

use bstr::ByteSlice;
pub use options::ParserOptions;
pub use parse_result::ParseResult;

use crate::{
    BOM,
    codec::unpack,
    error::ParseError,
    has_bom,
    rune::Rune,
    scan::{MAX_RUNE_LEN, rune_len},
    validator::checked_codepoint,
};

/// Where a [`Parser`] is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// More runes may follow.
    Ready,
    /// The input is exhausted.
    AtEnd,
    /// A malformed or truncated rune stopped the parser.
    Errored(ParseError),
}

/// Incremental UTF-8 parser over a borrowed byte sequence.
///
/// ```
/// use utf8rune::{ParseResult, Parser};
///
/// let mut parser = Parser::new("\u{7684}\u{7680}".as_bytes());
/// assert_eq!(parser.next(), ParseResult::Codepoint(0x7684));
/// assert_eq!(parser.next(), ParseResult::Codepoint(0x7680));
/// assert_eq!(parser.next(), ParseResult::EndOfInput);
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    bytes: &'src [u8],
    offset: usize,
    state: ParserState,
    options: ParserOptions,
}

impl<'src> Parser<'src> {
    /// Creates a parser with default [`ParserOptions`].
    #[must_use]
    pub fn new(bytes: &'src [u8]) -> Self {
        Self::with_options(bytes, ParserOptions::default())
    }

    /// Creates a parser with explicit options.
    #[must_use]
    pub fn with_options(bytes: &'src [u8], options: ParserOptions) -> Self {
        let bytes = if options.nul_terminated {
            bytes.find_byte(0).map_or(bytes, |end| &bytes[..end])
        } else {
            bytes
        };
        let offset = if options.skip_bom && has_bom(bytes) {
            BOM.len()
        } else {
            0
        };
        Self {
            bytes,
            offset,
            state: ParserState::Ready,
            options,
        }
    }

    /// Byte offset of the next rune.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The bytes not consumed yet, excluding any terminator.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'src [u8] {
        &self.bytes[self.offset..]
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// The options the parser was created with.
    #[inline]
    #[must_use]
    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Reads the next rune and returns its codepoint.
    #[expect(clippy::should_implement_trait)]
    pub fn next(&mut self) -> ParseResult {
        match self.step() {
            Ok(Some((_, cp))) => ParseResult::Codepoint(cp),
            Ok(None) => ParseResult::EndOfInput,
            Err(err) => err.into(),
        }
    }

    /// Reads the next rune. Follows the same transitions as
    /// [`next`](Self::next) but hands back the encoded bytes.
    ///
    /// Returns `Ok(None)` at the end of the input.
    ///
    /// # Errors
    ///
    /// The [`ParseError`] that stopped the parser, carrying the offset of the
    /// offending lead byte.
    pub fn next_rune(&mut self) -> Result<Option<Rune>, ParseError> {
        Ok(self.step()?.map(|(rune, _)| rune))
    }

    fn step(&mut self) -> Result<Option<(Rune, u32)>, ParseError> {
        match self.state {
            ParserState::Ready => {}
            ParserState::AtEnd => return Ok(None),
            ParserState::Errored(err) => return Err(err),
        }

        let offset = self.offset;
        let Some(&lead) = self.bytes.get(offset) else {
            self.state = ParserState::AtEnd;
            return Ok(None);
        };

        let Ok(len) = rune_len(lead) else {
            return Err(self.fail(ParseError::InvalidStart { offset }, lead));
        };
        let len = usize::from(len);
        let Some(slice) = self.bytes.get(offset..offset + len) else {
            return Err(self.fail(ParseError::Short { offset }, lead));
        };
        if checked_codepoint(slice).is_none() {
            return Err(self.fail(ParseError::Invalid { offset }, lead));
        }

        let mut bytes = [0; MAX_RUNE_LEN];
        bytes[..len].copy_from_slice(slice);
        self.offset += len;
        #[expect(clippy::cast_possible_truncation)]
        let rune = Rune::from_parts(bytes, len as u8);
        Ok(Some((rune, unpack(slice))))
    }

    #[cold]
    fn fail(&mut self, err: ParseError, lead: u8) -> ParseError {
        log::trace!("utf8rune parser stopped: {err} (lead byte 0x{lead:02X})");
        self.state = ParserState::Errored(err);
        err
    }
}

impl<'src> IntoIterator for Parser<'src> {
    type Item = Result<u32, ParseError>;
    type IntoIter = Codepoints<'src>;

    fn into_iter(self) -> Self::IntoIter {
        Codepoints {
            parser: self,
            done: false,
        }
    }
}

/// Iterator over the codepoints of a [`Parser`]'s input.
///
/// Yields `Ok` for each rune, then either stops at the end of the input or
/// yields the terminating error once and stops.
#[derive(Debug, Clone)]
pub struct Codepoints<'src> {
    parser: Parser<'src>,
    done: bool,
}

impl<'src> Codepoints<'src> {
    /// The underlying parser.
    #[must_use]
    pub fn parser(&self) -> &Parser<'src> {
        &self.parser
    }
}

impl Iterator for Codepoints<'_> {
    type Item = Result<u32, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.parser.step() {
            Ok(Some((_, cp))) => Some(Ok(cp)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl core::iter::FusedIterator for Codepoints<'_> {}

/// Number of runes in `bytes`.
///
/// ```
/// use utf8rune::{rune_count, ParseError};
///
/// assert_eq!(rune_count("a的😀".as_bytes()), Ok(3));
/// assert_eq!(rune_count(&[0x61, 0xE8, 0x9A]), Err(ParseError::Short { offset: 1 }));
/// ```
///
/// # Errors
///
/// The first [`ParseError`] in `bytes`.
pub fn rune_count(bytes: &[u8]) -> Result<usize, ParseError> {
    let mut parser = Parser::new(bytes);
    let mut count = 0;
    while parser.step()?.is_some() {
        count += 1;
    }
    Ok(count)
}

/// Checks that all of `bytes` is well-formed UTF-8.
///
/// # Errors
///
/// The first [`ParseError`] in `bytes`.
pub fn validate(bytes: &[u8]) -> Result<(), ParseError> {
    rune_count(bytes).map(drop)
}
