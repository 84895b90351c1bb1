//! Configurable bounds applied while decoding string tokens.

use crate::int::MAX_INT;

/// Limits checked against each length field before any content is read.
///
/// The format itself allows strings up to `2^63 - 1` bytes. Consumers that
/// know what they are reading (a symlink target, a directory entry name)
/// can tighten that so a corrupt length field fails fast.
///
/// # Example
///
/// ```
/// use nar_wire::Limits;
///
/// // Accept anything the format allows
/// let limits = Limits::default();
///
/// // Entry names on Linux are at most 255 bytes
/// let names = Limits::default().with_max_string_len(255);
/// assert_eq!(names.max_string_len, 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Largest string length accepted, in bytes.
    ///
    /// A larger length field fails with
    /// [`WireError::StringTooLong`](crate::WireError::StringTooLong).
    ///
    /// Default: [`MAX_INT`].
    pub max_string_len: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_string_len: MAX_INT,
        }
    }
}

impl Limits {
    /// Create limits with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the maximum string length.
    #[must_use]
    pub fn with_max_string_len(mut self, max_string_len: u64) -> Self {
        self.max_string_len = max_string_len;
        self
    }
}
