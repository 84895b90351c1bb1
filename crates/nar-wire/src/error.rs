/// Errors produced by the NAR token readers.
///
/// Every variant is terminal for the stream: the readers never rewind, so
/// after any error the cursor sits wherever the failing step left it.
///
/// ```text
///   WireError
///   ├── Exhausted          ← no bytes left at a length field or content
///   ├── UnexpectedEof      ← stream ended where a literal was expected
///   ├── ShortRead          ← stream ended part-way through a read step
///   ├── IntegerOverflow    ← length field above i64::MAX
///   ├── StringTooLong      ← length field above the configured limit
///   ├── NullByte           ← string content holds a 0x00
///   ├── InvalidUtf8        ← string content is not text
///   ├── InvalidPadding     ← padding bytes are not all zero
///   ├── LiteralMismatch    ← decoded string != expected literal
///   └── Io                 ← any other failure of the underlying reader
/// ```
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The stream had no bytes at all when the length field or the content
    /// of a token started.
    ///
    /// Only an `Exhausted` from the length field of a fresh token means the
    /// archive ended on a token boundary.
    /// [`TokenReader::next_token`](crate::TokenReader::next_token) makes
    /// that distinction and returns `Ok(None)` for it.
    #[error("stream exhausted: needed {expected} bytes, none available")]
    Exhausted { expected: u64 },

    /// The stream ended where [`expect_str`](crate::expect_str) needed a
    /// literal.
    #[error("unexpected end of stream while expecting '{expected}'")]
    UnexpectedEof { expected: String },

    /// The stream ended part-way through a length field, content or
    /// padding.
    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: u64, actual: u64 },

    /// A length field does not fit in a signed 64-bit integer.
    #[error("number is too big: {value} > {max}", max = i64::MAX)]
    IntegerOverflow { value: u64 },

    /// A length field exceeds [`Limits::max_string_len`](crate::Limits).
    #[error("string length {len} exceeds limit {limit}")]
    StringTooLong { len: u64, limit: u64 },

    /// String content contains a null byte, which the format forbids.
    #[error("string of {len} bytes contains a null byte at position {position}")]
    NullByte { position: usize, len: usize },

    /// String content is not valid UTF-8.
    #[error("string token is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Padding after a string is present but not all zero.
    #[error("expected {} bytes of zero padding, got {padding:02x?}", .padding.len())]
    InvalidPadding { padding: Vec<u8> },

    /// A decoded string differs from the literal the caller expected.
    #[error("expected '{expected}' got '{actual}'")]
    LiteralMismatch { expected: String, actual: String },

    /// I/O error from the underlying reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WireError {
    /// True when no byte at all was available where a read step began.
    ///
    /// That step may be the content of a token whose length field was
    /// read, so `true` alone does not mean the archive ended between
    /// tokens. Use [`TokenReader::next_token`](crate::TokenReader::next_token)
    /// to detect a clean end.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Exhausted { .. } | Self::UnexpectedEof { .. })
    }
}
