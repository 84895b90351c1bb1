/// Implementation of `nar tokens`.
///
/// Reads string tokens until the archive ends on a token boundary and
/// prints one line per token: index, stream offset, content length, padding
/// and the content (UTF-8 lossy, truncated to 60 characters).
///
/// # Output format
///
/// ```text
/// Token 0 @ 0x0000: 13 bytes +3 pad "nix-archive-1"
/// Token 1 @ 0x0018: 1 bytes +7 pad "("
/// Token 2 @ 0x0028: 4 bytes +4 pad "type"
/// Token 3 @ 0x0038: 9 bytes +7 pad "directory"
/// Token 4 @ 0x0050: 1 bytes +7 pad ")"
/// ---
/// 5 tokens, 96 bytes
/// ```
///
/// NAR file contents are strings too, but may hold null bytes, which the
/// token reader rejects. A listing therefore stops at the first binary
/// file, and the diagnostic says it was the token after `contents`.
use anyhow::{Result, anyhow};
use nar_wire::{WireError, padding_len};

use crate::TokensArgs;
use crate::report::{diagnostic, hex_dump, open};

/// Run the `nar tokens` command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a token fails to
/// decode. The diagnostic and stream offset are printed to stdout first.
pub fn run(args: &TokensArgs) -> Result<()> {
    let mut reader = open(&args.file, args.max_len)?;
    let mut count = 0usize;
    let mut previous: Option<Vec<u8>> = None;

    loop {
        if args.count.is_some_and(|limit| count >= limit) {
            break;
        }

        let start = reader.position();
        let token = match reader.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => break,
            Err(e) => {
                println!("✗ Error at offset {:#06x}: {}", reader.position(), diagnostic(&e));
                if let Some(hint) = binary_contents_hint(previous.as_deref(), &e) {
                    println!("  {hint}");
                }
                return Err(anyhow!("token {count} at offset {start:#x} is malformed"));
            }
        };

        let text = String::from_utf8_lossy(&token);
        let shown: String = text.chars().take(60).collect();
        let ellipsis = if text.chars().count() > 60 { "…" } else { "" };
        println!(
            "Token {count} @ {start:#06x}: {} bytes +{} pad {shown:?}{ellipsis}",
            token.len(),
            padding_len(token.len() as u64),
        );

        if args.show_hex {
            hex_dump(&token);
        }
        previous = Some(token);
        count += 1;
    }

    println!("---");
    println!(
        "{count} token{}, {} bytes",
        if count == 1 { "" } else { "s" },
        reader.position()
    );
    Ok(())
}

/// Explain a null byte in the token that follows a `contents` tag.
fn binary_contents_hint(previous: Option<&[u8]>, e: &WireError) -> Option<&'static str> {
    match (previous, e) {
        (Some(b"contents"), WireError::NullByte { .. }) => Some(
            "this token is a file's contents; binary files cannot be listed as string tokens",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_only_after_contents_tag() {
        let null = WireError::NullByte {
            position: 3,
            len: 10,
        };
        assert!(binary_contents_hint(Some(&b"contents"[..]), &null).is_some());
        assert!(binary_contents_hint(Some(&b"target"[..]), &null).is_none());
        assert!(binary_contents_hint(None, &null).is_none());

        let short = WireError::ShortRead {
            expected: 8,
            actual: 2,
        };
        assert!(binary_contents_hint(Some(&b"contents"[..]), &short).is_none());
    }
}
