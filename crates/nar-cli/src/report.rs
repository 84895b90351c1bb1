//! Shared helpers: opening archives and describing decode failures.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use nar_wire::{Limits, TokenReader, WireError};

/// Open `path` as a token stream with the limits from the command line.
pub fn open(path: &Path, max_len: Option<u64>) -> Result<TokenReader<BufReader<File>>> {
    let file = File::open(path).with_context(|| format!("cannot read {}", path.display()))?;
    let limits = match max_len {
        Some(n) => Limits::new().with_max_string_len(n),
        None => Limits::default(),
    };
    let reader = TokenReader::with_limits(BufReader::new(file), limits);
    tracing::debug!(
        file = %path.display(),
        max_string_len = reader.limits().max_string_len,
        "opened archive"
    );
    Ok(reader)
}

/// Converts a `WireError` into a human-readable diagnostic string.
///
/// ```text
/// ┌──────────────────┬───────────────────────────────────────────────┐
/// │ WireError        │ Diagnostic                                    │
/// ├──────────────────┼───────────────────────────────────────────────┤
/// │ Exhausted        │ "archive ends before a {n}-byte read"         │
/// │ UnexpectedEof    │ "archive ends where '{lit}' was expected"     │
/// │ ShortRead        │ "archive truncated: {actual} of {n} bytes"    │
/// │ LiteralMismatch  │ "expected '{lit}', found '{actual}'"          │
/// │ everything else  │ "<error Display>"                             │
/// └──────────────────┴───────────────────────────────────────────────┘
/// ```
pub fn diagnostic(e: &WireError) -> String {
    match e {
        WireError::Exhausted { expected } => {
            format!("archive ends before a {expected}-byte read")
        }
        WireError::UnexpectedEof { expected } => {
            format!("archive ends where '{expected}' was expected")
        }
        WireError::ShortRead { expected, actual } => {
            format!("archive truncated: {actual} of {expected} bytes present")
        }
        WireError::LiteralMismatch { expected, actual } => {
            format!("expected '{expected}', found '{actual}'")
        }
        other => other.to_string(),
    }
}

/// Print `bytes` as a hex dump, 16 bytes per line, indented under a token.
pub fn hex_dump(bytes: &[u8]) {
    for (i, chunk) in bytes.chunks(16).enumerate() {
        let offset = i * 16;
        let hex = hex::encode(chunk);
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        println!("           {offset:04x}  {hex:<32}  {ascii}");
    }
}
