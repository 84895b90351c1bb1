use std::io::Read;

use crate::error::WireError;
use crate::limits::Limits;
use crate::string::read_bytes_with_limits;

/// First token of every archive.
pub const NAR_MAGIC: &str = "nix-archive-1";

/// Decode the next string token and require it to equal `expected`.
///
/// The comparison is exact and byte-for-byte. This is how a grammar walker
/// recognises structural keywords such as `"("`, `"type"` or `"entry"`.
///
/// # Errors
///
/// - [`WireError::UnexpectedEof`] if the stream ends where the token, or its
///   content, should start. A stream that ends inside the content or the
///   padding stays a [`WireError::ShortRead`].
/// - [`WireError::LiteralMismatch`] carrying both strings if the token
///   decodes but differs.
/// - Any other error from [`read_bytes`](crate::read_bytes) unchanged.
pub fn expect_str<R: Read + ?Sized>(r: &mut R, expected: &str) -> Result<(), WireError> {
    expect_str_with_limits(r, expected, &Limits::default())
}

/// [`expect_str`] with an explicit bound on the token length.
///
/// # Errors
///
/// As [`expect_str`], plus [`WireError::StringTooLong`].
pub fn expect_str_with_limits<R: Read + ?Sized>(
    r: &mut R,
    expected: &str,
    limits: &Limits,
) -> Result<(), WireError> {
    let actual = match read_bytes_with_limits(r, limits) {
        Ok(actual) => actual,
        Err(WireError::Exhausted { .. }) => {
            return Err(WireError::UnexpectedEof {
                expected: expected.to_owned(),
            });
        }
        Err(e) => return Err(e),
    };

    if actual != expected.as_bytes() {
        return Err(WireError::LiteralMismatch {
            expected: expected.to_owned(),
            actual: String::from_utf8_lossy(&actual).into_owned(),
        });
    }
    Ok(())
}
