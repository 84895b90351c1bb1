#![no_main]

use libfuzzer_sys::fuzz_target;
use nar_wire::{Limits, TokenReader};

// Fuzz target: read string tokens until the first error or clean end.
//
// Catches bugs in:
// - Huge length fields (allocation must follow the data, not the claim)
// - Padding validation at every alignment
// - Position accounting after failures
fuzz_target!(|data: &[u8]| {
    let limits = Limits::new().with_max_string_len(1 << 20);
    let mut reader = TokenReader::with_limits(data, limits);
    loop {
        let before = reader.position();
        match reader.next_token() {
            Ok(Some(token)) => {
                assert!(!token.contains(&0));
                assert_eq!(reader.position() % 8, 0);
            }
            Ok(None) => {
                assert_eq!(before, data.len() as u64);
                break;
            }
            Err(_) => break,
        }
        assert!(reader.position() <= data.len() as u64);
    }
});
