use core::fmt;

use crate::error::ParseError;

/// Outcome of reading one rune with [`Parser::next`](crate::Parser::next) or
/// [`read_rune`](crate::read_rune).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseResult {
    /// A well-formed rune decoded to this codepoint.
    Codepoint(u32),
    /// No input left. This is normal termination, not an error.
    EndOfInput,
    /// The input ended in the middle of a rune.
    Short,
    /// The lead byte cannot begin a rune.
    InvalidStart,
    /// The rune has the declared length but is not well-formed.
    Invalid,
}

impl ParseResult {
    /// The decoded codepoint, if any.
    #[must_use]
    pub fn codepoint(self) -> Option<u32> {
        match self {
            ParseResult::Codepoint(cp) => Some(cp),
            _ => None,
        }
    }

    /// `true` for [`Short`](Self::Short), [`InvalidStart`](Self::InvalidStart)
    /// and [`Invalid`](Self::Invalid).
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(
            self,
            ParseResult::Short | ParseResult::InvalidStart | ParseResult::Invalid
        )
    }
}

impl From<ParseError> for ParseResult {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::InvalidStart { .. } => ParseResult::InvalidStart,
            ParseError::Invalid { .. } => ParseResult::Invalid,
            ParseError::Short { .. } => ParseResult::Short,
        }
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseResult::Codepoint(cp) => write!(f, "U+{cp:04X}"),
            ParseResult::EndOfInput => f.write_str("end of input"),
            ParseResult::Short => f.write_str("short"),
            ParseResult::InvalidStart => f.write_str("invalid start"),
            ParseResult::Invalid => f.write_str("invalid"),
        }
    }
}
