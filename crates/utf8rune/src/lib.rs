//! UTF-8 runes: encoding and decoding of single Unicode scalar values,
//! RFC 3629 validation, and incremental parsing over byte buffers and byte
//! streams.
//!
//! ```
//! use utf8rune::{decode, encode, ParseResult, Parser};
//!
//! let rune = encode(0x7684).unwrap();
//! assert_eq!(rune.as_bytes(), &[0xE7, 0x9A, 0x84]);
//! assert_eq!(decode(rune), Ok(0x7684));
//!
//! let mut parser = Parser::new(&[0xE8, 0x9A]);
//! assert_eq!(parser.next(), ParseResult::Short);
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod codec;
mod error;
mod parser;
mod rune;
mod scan;
mod stream;
mod validator;

#[cfg(test)]
mod tests;

pub use codec::{
    MAX_CODEPOINT, decode, decode_bytes, encode, encode_into, encoded_len, min_codepoint,
};
pub use error::{DecodeError, EncodeError, ParseError, PushbackError, RuneError, ScanError};
pub use parser::{
    Codepoints, ParseResult, Parser, ParserOptions, ParserState, rune_count, validate,
};
pub use rune::Rune;
pub use scan::{MAX_RUNE_LEN, is_continuation, is_reserved_lead, rune_len};
#[cfg(feature = "std")]
pub use stream::IoSource;
pub use stream::{ByteSource, PushbackBuffer, SliceSource, read_rune, unread_rune};
pub use validator::is_valid;

/// The UTF-8 byte-order mark.
pub const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Whether `bytes` starts with the UTF-8 byte-order mark.
///
/// ```
/// assert!(utf8rune::has_bom(&[0xEF, 0xBB, 0xBF, 0x41]));
/// assert!(!utf8rune::has_bom(&[0x41, 0xEF, 0xBB, 0xBF]));
/// assert!(!utf8rune::has_bom(&[0xEF, 0xBB]));
/// ```
#[must_use]
pub fn has_bom(bytes: &[u8]) -> bool {
    bytes.starts_with(&BOM)
}
