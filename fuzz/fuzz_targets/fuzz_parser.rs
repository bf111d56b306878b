#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8rune::{
    ParseResult, Parser, ParserOptions, PushbackBuffer, SliceSource, encode, read_rune,
    unread_rune,
};

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    nul_terminated: bool,
    skip_bom: bool,
    /// Push every n-th successfully read rune back and read it again.
    pushback_every: u8,
}

fn parse(input: &Input) {
    let options = ParserOptions {
        nul_terminated: input.nul_terminated,
        skip_bom: input.skip_bom,
    };
    let mut parser = Parser::with_options(&input.bytes, options);
    let start = parser.offset();
    let mut decoded = Vec::new();
    let outcome = loop {
        match parser.next_rune() {
            Ok(Some(rune)) => {
                let cp = rune.codepoint().expect("parser yielded malformed rune");
                assert_eq!(encode(cp), Ok(rune), "round trip failed for {rune:?}");
                decoded.push(cp);
            }
            Ok(None) => break Ok(()),
            Err(err) => break Err(err),
        }
    };

    // The parsed region must agree with the standard library.
    let region = &parser_region(&input.bytes, options)[start..];
    match (core::str::from_utf8(region), outcome) {
        (Ok(text), Ok(())) => {
            assert!(text.chars().map(u32::from).eq(decoded.iter().copied()));
        }
        (Err(std_err), Err(err)) => assert_eq!(start + std_err.valid_up_to(), err.offset()),
        (std, ours) => panic!("std {std:?} disagrees with parser {ours:?}"),
    }
}

/// The bytes a parser with `options` looks at.
fn parser_region(bytes: &[u8], options: ParserOptions) -> &[u8] {
    if options.nul_terminated {
        bytes.iter().position(|&b| b == 0).map_or(bytes, |end| &bytes[..end])
    } else {
        bytes
    }
}

fn stream(input: &Input) {
    let mut source = PushbackBuffer::new(SliceSource::new(&input.bytes));
    let every = usize::from(input.pushback_every.max(1));
    let mut count = 0usize;
    loop {
        let Ok(result) = read_rune(&mut source);
        match result {
            ParseResult::EndOfInput => break,
            ParseResult::Codepoint(cp) => {
                count += 1;
                if count % every == 0 {
                    unread_rune(&mut source, encode(cp).unwrap()).unwrap();
                    let Ok(again) = read_rune(&mut source);
                    assert_eq!(again, result);
                }
            }
            ParseResult::Short | ParseResult::InvalidStart | ParseResult::Invalid => {}
        }
    }
}

fuzz_target!(|input: Input| {
    parse(&input);
    stream(&input);
});
