use std::io::Read;

use crate::error::WireError;
use crate::int::read_int;
use crate::io::read_vec;
use crate::limits::Limits;
use crate::padding::read_padding;

/// Decode one string token and return its raw content.
///
/// Wire layout consumed:
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ length    (u64 LE, 8 bytes, <= 2^63 - 1)     │
/// │ content   [length bytes, no 0x00]            │
/// │ padding   [(8 - length % 8) % 8 zero bytes]  │
/// └──────────────────────────────────────────────┘
/// ```
///
/// On success the stream has advanced by exactly `8 + length + padding`
/// bytes and is again 8-byte aligned.
///
/// # Errors
///
/// - Anything [`read_int`] returns for the length field.
/// - [`WireError::Exhausted`] if the stream ends right after the length
///   field, [`WireError::ShortRead`] if it ends inside the content.
/// - [`WireError::NullByte`] if the content contains a zero byte.
/// - [`WireError::ShortRead`] if it ends before the padding is complete,
///   with `actual: 0` when not a single padding byte was there. Padding
///   always sits mid-token, so it never yields [`WireError::Exhausted`].
/// - [`WireError::InvalidPadding`] if a padding byte is non-zero.
pub fn read_bytes<R: Read + ?Sized>(r: &mut R) -> Result<Vec<u8>, WireError> {
    read_bytes_with_limits(r, &Limits::default())
}

/// [`read_bytes`] with an explicit bound on the content length.
///
/// # Errors
///
/// As [`read_bytes`], plus [`WireError::StringTooLong`] when the length
/// field exceeds `limits.max_string_len`. In that case only the length
/// field has been consumed.
pub fn read_bytes_with_limits<R: Read + ?Sized>(
    r: &mut R,
    limits: &Limits,
) -> Result<Vec<u8>, WireError> {
    let len = read_int(r)?.unsigned_abs();
    if len > limits.max_string_len {
        return Err(WireError::StringTooLong {
            len,
            limit: limits.max_string_len,
        });
    }

    let content = read_vec(r, len)?;
    if let Some(position) = content.iter().position(|&b| b == 0) {
        return Err(WireError::NullByte {
            position,
            len: content.len(),
        });
    }

    match read_padding(r, len) {
        Err(WireError::Exhausted { expected }) => Err(WireError::ShortRead {
            expected,
            actual: 0,
        }),
        Err(e) => Err(e),
        Ok(()) => Ok(content),
    }
}

/// Decode one string token as UTF-8 text.
///
/// The whole token, padding included, is consumed before the UTF-8 check,
/// so an [`WireError::InvalidUtf8`] failure still leaves the stream
/// aligned.
///
/// # Errors
///
/// As [`read_bytes`], plus [`WireError::InvalidUtf8`].
pub fn read_string<R: Read + ?Sized>(r: &mut R) -> Result<String, WireError> {
    read_string_with_limits(r, &Limits::default())
}

/// [`read_string`] with an explicit bound on the content length.
///
/// # Errors
///
/// As [`read_bytes_with_limits`], plus [`WireError::InvalidUtf8`].
pub fn read_string_with_limits<R: Read + ?Sized>(
    r: &mut R,
    limits: &Limits,
) -> Result<String, WireError> {
    Ok(String::from_utf8(read_bytes_with_limits(r, limits)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{Fragmented, token};

    #[test]
    fn decode_hello() {
        let bytes = [
            0x05, 0, 0, 0, 0, 0, 0, 0, b'h', b'e', b'l', b'l', b'o', 0, 0, 0,
        ];
        let mut r = &bytes[..];
        assert_eq!(read_string(&mut r).unwrap(), "hello");
        assert!(r.is_empty());
    }

    #[test]
    fn decode_aligned_without_padding() {
        let mut bytes = vec![0x08, 0, 0, 0, 0, 0, 0, 0];
        bytes.extend_from_slice(b"cccccccc");
        bytes.push(0xEE); // next token's first byte, must stay unread
        let mut r = &bytes[..];
        assert_eq!(read_string(&mut r).unwrap(), "cccccccc");
        assert_eq!(r, &[0xEE]);
    }

    #[test]
    fn decode_empty_string() {
        let bytes = [0u8; 8];
        let mut r = &bytes[..];
        assert_eq!(read_string(&mut r).unwrap(), "");
        assert!(r.is_empty());
    }

    #[test]
    fn sequential_tokens() {
        let mut bytes = token(b"(");
        bytes.extend(token(b"type"));
        bytes.extend(token(b"regular"));
        let mut r = &bytes[..];
        assert_eq!(read_string(&mut r).unwrap(), "(");
        assert_eq!(read_string(&mut r).unwrap(), "type");
        assert_eq!(read_string(&mut r).unwrap(), "regular");
        assert!(matches!(read_string(&mut r), Err(WireError::Exhausted { expected: 8 })));
    }

    #[test]
    fn reject_embedded_null() {
        let bytes = token(b"ab\0cd");
        let mut r = &bytes[..];
        assert!(matches!(
            read_bytes(&mut r),
            Err(WireError::NullByte {
                position: 2,
                len: 5
            })
        ));
    }

    #[test]
    fn reject_nonzero_padding() {
        let mut bytes = token(b"hello");
        let last = bytes.len() - 1;
        bytes[last] = b'!';
        let mut r = &bytes[..];
        assert!(matches!(
            read_bytes(&mut r),
            Err(WireError::InvalidPadding { .. })
        ));
    }

    #[test]
    fn truncated_after_length_is_exhausted() {
        let bytes = 5u64.to_le_bytes();
        let mut r = &bytes[..];
        assert!(matches!(
            read_bytes(&mut r),
            Err(WireError::Exhausted { expected: 5 })
        ));
    }

    #[test]
    fn truncated_mid_content_is_short_read() {
        let mut bytes = 5u64.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"he");
        let mut r = &bytes[..];
        assert!(matches!(
            read_bytes(&mut r),
            Err(WireError::ShortRead {
                expected: 5,
                actual: 2
            })
        ));
    }

    #[test]
    fn missing_padding_is_short_read() {
        let bytes = token(b"hello");
        let mut r = &bytes[..13];
        let err = read_bytes(&mut r).unwrap_err();
        assert!(matches!(
            err,
            WireError::ShortRead {
                expected: 3,
                actual: 0
            }
        ));
        assert!(!err.is_eof());
    }

    #[test]
    fn oversized_length_field() {
        let bytes = u64::MAX.to_le_bytes();
        let mut r = &bytes[..];
        assert!(matches!(
            read_bytes(&mut r),
            Err(WireError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn limit_rejects_before_reading_content() {
        let bytes = token(b"a-long-symlink-target");
        let mut r = &bytes[..];
        let limits = Limits::default().with_max_string_len(4);
        assert!(matches!(
            read_bytes_with_limits(&mut r, &limits),
            Err(WireError::StringTooLong { len: 21, limit: 4 })
        ));
        // Only the length field is gone.
        assert_eq!(r.len(), bytes.len() - 8);
    }

    #[test]
    fn limit_is_inclusive() {
        let bytes = token(b"name");
        let mut r = &bytes[..];
        let limits = Limits::default().with_max_string_len(4);
        assert_eq!(read_bytes_with_limits(&mut r, &limits).unwrap(), b"name");
    }

    #[test]
    fn invalid_utf8_consumes_whole_token() {
        let mut bytes = token(&[0xFF, 0xFE]);
        bytes.extend(token(b"next"));
        let mut r = &bytes[..];
        assert!(matches!(read_string(&mut r), Err(WireError::InvalidUtf8(_))));
        assert_eq!(read_string(&mut r).unwrap(), "next");
    }

    #[test]
    fn non_utf8_bytes_are_fine_as_bytes() {
        let bytes = token(&[0xFF, 0xFE]);
        let mut r = &bytes[..];
        assert_eq!(read_bytes(&mut r).unwrap(), vec![0xFF, 0xFE]);
    }

    #[test]
    fn fragmented_source() {
        let bytes = token(b"nix-archive-1");
        let mut r = Fragmented::new(&bytes, 1);
        assert_eq!(read_string(&mut r).unwrap(), "nix-archive-1");
    }
}
