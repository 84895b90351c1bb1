//! Golden fixture generator for the NAR token reader tests.
//!
//! Writes the binary fixtures under `tests/golden/`. Run it again after
//! changing [`nar_tests::SAMPLE_TOKENS`] and commit the result.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p nar-tests
//! ```
//!
//! # Generated fixtures
//!
//! | File              | Contents                                          |
//! |-------------------|---------------------------------------------------|
//! | sample.nar        | Well-formed archive: file, symlink, executable    |
//! | bad_magic.nar     | Sample with `nix-archive-2` as the first token    |
//! | bad_padding.nar   | Sample with a non-zero byte in the magic padding  |
//! | null_byte.nar     | Single token `"ab\0cd"`                            |
//! | truncated.nar     | Sample cut 3 bytes into the `contents` string     |

#![allow(clippy::pedantic)]

use std::path::Path;

use nar_tests::{golden_path, sample_archive, token, tokens};

fn main() {
    let sample = sample_archive();
    write_file(&golden_path("sample.nar"), &sample);

    let mut bad_magic = token(b"nix-archive-2");
    bad_magic.extend_from_slice(&sample[24..]);
    write_file(&golden_path("bad_magic.nar"), &bad_magic);

    // "nix-archive-1" is 13 bytes: content ends at offset 21, padding at 24.
    let mut bad_padding = sample.clone();
    bad_padding[22] = 0x01;
    write_file(&golden_path("bad_padding.nar"), &bad_padding);

    write_file(&golden_path("null_byte.nar"), &token(b"ab\0cd"));

    let prefix = tokens(&nar_tests::SAMPLE_TOKENS[..13]);
    let cut = prefix.len() + 8 + 3;
    write_file(&golden_path("truncated.nar"), &sample[..cut]);

    println!("All golden fixtures written");
}

fn write_file(path: &Path, data: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create_dir_all");
    }
    std::fs::write(path, data).expect("write_file");
    println!("  wrote {} ({} bytes)", path.display(), data.len());
}
