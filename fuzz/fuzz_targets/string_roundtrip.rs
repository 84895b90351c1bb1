#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: frame arbitrary bytes as a string token, then decode.
//
// Content without 0x00 must come back unchanged and consume exactly
// 8 + len + padding bytes; content with 0x00 must be rejected.
fuzz_target!(|content: &[u8]| {
    let mut framed = (content.len() as u64).to_le_bytes().to_vec();
    framed.extend_from_slice(content);
    framed.resize(framed.len().next_multiple_of(8), 0);
    framed.push(0xAA);

    let mut r = framed.as_slice();
    let result = nar_wire::read_bytes(&mut r);

    if content.contains(&0) {
        assert!(matches!(result, Err(nar_wire::WireError::NullByte { .. })));
    } else {
        assert_eq!(result.unwrap(), content);
        assert_eq!(r, &[0xAA]);
    }
});
