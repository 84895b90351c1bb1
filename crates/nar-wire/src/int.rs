use std::io::Read;

use crate::error::WireError;
use crate::io::read_full;

/// Size of every integer field on the wire.
pub const INT_SIZE: usize = 8;

/// Largest value a length field may carry: `2^63 - 1`.
pub const MAX_INT: u64 = i64::MAX.unsigned_abs();

/// Decode one 8-byte little-endian integer.
///
/// The wire stores an unsigned 64-bit value, but lengths and counts are
/// consumed downstream as signed quantities, so anything above
/// [`MAX_INT`] is rejected instead of wrapping.
///
/// # Wire format examples
///
/// | Bytes                       | Result                   |
/// |-----------------------------|--------------------------|
/// | `00 00 00 00 00 00 00 00`   | `Ok(0)`                  |
/// | `05 00 00 00 00 00 00 00`   | `Ok(5)`                  |
/// | `ff ff ff ff ff ff ff 7f`   | `Ok(i64::MAX)`           |
/// | `00 00 00 00 00 00 00 80`   | `Err(IntegerOverflow)`   |
///
/// # Errors
///
/// - [`WireError::Exhausted`] if the stream is already at its end.
/// - [`WireError::ShortRead`] if it ends inside the 8 bytes.
/// - [`WireError::IntegerOverflow`] if the value exceeds [`MAX_INT`].
pub fn read_int<R: Read + ?Sized>(r: &mut R) -> Result<i64, WireError> {
    let mut buf = [0u8; INT_SIZE];
    read_full(r, &mut buf)?;

    let value = u64::from_le_bytes(buf);
    i64::try_from(value).map_err(|_| WireError::IntegerOverflow { value })
}

// u64::from_le_bytes takes the array by value and needs no cursor
// arithmetic; the byte order is fixed by the format, not by the host.
// i64::try_from fails for exactly the values with the top bit set.
