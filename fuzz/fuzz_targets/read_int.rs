#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: read_int on raw bytes.
//
// Catches bugs in:
// - Short input (0-7 bytes)
// - Values with the top bit set
// - Consuming more or fewer than 8 bytes
fuzz_target!(|data: &[u8]| {
    let mut r = data;
    if let Ok(value) = nar_wire::read_int(&mut r) {
        assert!(value >= 0);
        assert_eq!(r.len(), data.len() - 8);
    }
});
