/// Implementation of `nar expect`.
///
/// Matches the leading tokens of a NAR file against a list of literals and
/// reports a `✓` line per match, or a `✗` diagnostic at the first failure.
///
/// # Success output
///
/// ```text
/// $ nar expect store.nar nix-archive-1 '(' type
/// ✓ 'nix-archive-1' @ 0x0000
/// ✓ '(' @ 0x0018
/// ✓ 'type' @ 0x0028
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error at offset 0x0018: expected 'nix-archive-1', found 'not-a-nar'
/// ```
use anyhow::{Result, anyhow};

use crate::ExpectArgs;
use crate::report::{diagnostic, open};

/// Run the `nar expect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any literal fails to
/// match.
pub fn run(args: &ExpectArgs) -> Result<()> {
    let mut reader = open(&args.file, args.max_len)?;

    for literal in &args.literals {
        let start = reader.position();
        if let Err(e) = reader.expect_str(literal) {
            println!("✗ Error at offset {:#06x}: {}", reader.position(), diagnostic(&e));
            return Err(anyhow!("{} does not match", args.file.display()));
        }
        println!("✓ '{literal}' @ {start:#06x}");
    }
    Ok(())
}
