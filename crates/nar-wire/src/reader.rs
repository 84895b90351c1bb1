use std::io::Read;

use crate::error::WireError;
use crate::limits::Limits;
use crate::{int, literal, padding, string};

/// Token reader over a NAR byte stream.
///
/// Wraps any [`Read`] source, counts the bytes consumed through it, and
/// applies [`Limits`] to every string token. The counter makes it possible
/// to report where in the archive a failure happened, including after a
/// failure: nothing is rewound, so [`position`](Self::position) is where
/// the failing step stopped.
///
/// The reader does not buffer and never reads past the token it was asked
/// for. Wrap the source in a `BufReader` first if it is unbuffered.
///
/// # Example
///
/// ```
/// use nar_wire::{NAR_MAGIC, TokenReader};
///
/// // "nix-archive-1" framed as a string token
/// let mut bytes = 13u64.to_le_bytes().to_vec();
/// bytes.extend_from_slice(b"nix-archive-1\0\0\0");
///
/// let mut reader = TokenReader::new(bytes.as_slice());
/// reader.expect_str(NAR_MAGIC).unwrap();
/// assert_eq!(reader.position(), 24);
/// ```
#[derive(Debug)]
pub struct TokenReader<R> {
    inner: R,
    limits: Limits,
    pos: u64,
}

impl<R: Read> TokenReader<R> {
    /// Create a token reader with default limits.
    pub fn new(inner: R) -> Self {
        Self::with_limits(inner, Limits::default())
    }

    /// Create a token reader with the given limits.
    pub fn with_limits(inner: R, limits: Limits) -> Self {
        Self {
            inner,
            limits,
            pos: 0,
        }
    }

    /// Bytes consumed since the reader was created.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// The limits applied to every string token read through this reader.
    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Borrow the underlying source.
    ///
    /// Reading from it directly bypasses the position counter.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consume the reader and return the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Decode one integer field. See [`int::read_int`].
    ///
    /// # Errors
    ///
    /// As [`int::read_int`].
    pub fn read_int(&mut self) -> Result<i64, WireError> {
        let start = self.pos;
        let value = int::read_int(self)?;
        tracing::trace!(start = format_args!("{start:#x}"), value, "decoded integer");
        Ok(value)
    }

    /// Consume the padding after `len` content bytes. See
    /// [`padding::read_padding`].
    ///
    /// # Errors
    ///
    /// As [`padding::read_padding`].
    pub fn read_padding(&mut self, len: u64) -> Result<(), WireError> {
        padding::read_padding(self, len)
    }

    /// Decode one string token as raw bytes, applying this reader's limits.
    ///
    /// # Errors
    ///
    /// As [`string::read_bytes_with_limits`].
    pub fn read_bytes(&mut self) -> Result<Vec<u8>, WireError> {
        let start = self.pos;
        let limits = self.limits.clone();
        let bytes = string::read_bytes_with_limits(self, &limits)?;
        tracing::debug!(
            start = format_args!("{start:#x}"),
            end = format_args!("{:#x}", self.pos),
            len = bytes.len(),
            "decoded string token"
        );
        Ok(bytes)
    }

    /// Decode one string token as UTF-8, applying this reader's limits.
    ///
    /// # Errors
    ///
    /// As [`string::read_string_with_limits`].
    pub fn read_string(&mut self) -> Result<String, WireError> {
        Ok(String::from_utf8(self.read_bytes()?)?)
    }

    /// Require the next token to equal `expected`. See
    /// [`literal::expect_str`].
    ///
    /// # Errors
    ///
    /// As [`literal::expect_str_with_limits`].
    pub fn expect_str(&mut self, expected: &str) -> Result<(), WireError> {
        let start = self.pos;
        let limits = self.limits.clone();
        literal::expect_str_with_limits(self, expected, &limits)?;
        tracing::debug!(start = format_args!("{start:#x}"), expected, "matched literal");
        Ok(())
    }

    /// Decode string tokens until the stream ends on a token boundary.
    ///
    /// Returns `Ok(None)` when the stream is cleanly exhausted before the
    /// next length field, which is how a caller tells "no more tokens"
    /// apart from a truncated one.
    ///
    /// # Errors
    ///
    /// Any error from [`read_bytes`](Self::read_bytes) other than a clean
    /// end of stream at the token start.
    pub fn next_token(&mut self) -> Result<Option<Vec<u8>>, WireError> {
        let start = self.pos;
        match self.read_bytes() {
            Ok(bytes) => Ok(Some(bytes)),
            Err(WireError::Exhausted { .. }) if self.pos == start => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl<R: Read> Read for TokenReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.pos += n as u64;
        Ok(n)
    }
}
