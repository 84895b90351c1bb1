#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nar_wire::WireError;

#[derive(Debug, Arbitrary)]
struct Input {
    literal: String,
    data: Vec<u8>,
}

// Fuzz target: expect_str against arbitrary literals and streams.
//
// A success must mean the stream really started with the framed literal;
// a mismatch must carry the literal back unchanged.
fuzz_target!(|input: Input| {
    let mut r = input.data.as_slice();
    match nar_wire::expect_str(&mut r, &input.literal) {
        Ok(()) => {
            let len = input.literal.len();
            assert_eq!(&input.data[..8], &(len as u64).to_le_bytes());
            assert_eq!(&input.data[8..8 + len], input.literal.as_bytes());
        }
        Err(WireError::LiteralMismatch { expected, .. }) => {
            assert_eq!(expected, input.literal);
        }
        Err(_) => {}
    }
});
