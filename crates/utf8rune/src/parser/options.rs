/// Configuration options for the cursor [`Parser`](crate::Parser).
///
/// # Default
///
/// All options default to `false`: every byte of the input is parsed and
/// `0x00` decodes as U+0000.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether the first `0x00` byte ends the input, as in a C string.
    ///
    /// When `true` the parser stops with
    /// [`EndOfInput`](crate::ParseResult::EndOfInput) at the first NUL byte
    /// and a rune cut off by it is reported as
    /// [`Short`](crate::ParseResult::Short).
    ///
    /// # Default
    ///
    /// `false`
    pub nul_terminated: bool,

    /// Whether to step over a leading byte-order mark (`EF BB BF`).
    ///
    /// When `false` a BOM is returned as the codepoint U+FEFF like any other
    /// rune.
    ///
    /// # Default
    ///
    /// `false`
    pub skip_bom: bool,
}
