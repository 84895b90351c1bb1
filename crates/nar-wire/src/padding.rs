use std::io::Read;

use crate::error::WireError;
use crate::io::read_full;

/// Every string token ends on a multiple of this many bytes.
pub const ALIGNMENT: u64 = 8;

/// Number of zero bytes that follow a string of `len` bytes.
///
/// `(8 - len % 8) % 8`, so a length that is already aligned gets no
/// padding rather than a full 8 bytes.
///
/// | `len` | padding |
/// |-------|---------|
/// | 0     | 0       |
/// | 1     | 7       |
/// | 5     | 3       |
/// | 8     | 0       |
/// | 13    | 3       |
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn padding_len(len: u64) -> usize {
    ((ALIGNMENT - len % ALIGNMENT) % ALIGNMENT) as usize
}

/// Consume and check the padding that follows `len` bytes of content.
///
/// Only the canonical padding is accepted: exactly [`padding_len`] bytes,
/// all zero.
///
/// # Errors
///
/// - [`WireError::Exhausted`] / [`WireError::ShortRead`] if the stream ends
///   before the padding is complete.
/// - [`WireError::InvalidPadding`] if any padding byte is non-zero.
pub fn read_padding<R: Read + ?Sized>(r: &mut R, len: u64) -> Result<(), WireError> {
    let pad = padding_len(len);
    if pad == 0 {
        return Ok(());
    }

    let mut buf = [0u8; 8];
    let padding = &mut buf[..pad];
    read_full(r, padding)?;

    if padding.iter().any(|&b| b != 0) {
        return Err(WireError::InvalidPadding {
            padding: padding.to_vec(),
        });
    }

    tracing::trace!(len, pad, "validated padding");
    Ok(())
}
