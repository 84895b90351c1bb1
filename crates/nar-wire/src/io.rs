use std::io::{ErrorKind, Read};

use crate::error::WireError;

/// Upper bound on how much of a string token is buffered per read call.
///
/// Content is read in steps of at most this size, so a length field that
/// claims a huge string only allocates as fast as bytes actually arrive.
const CHUNK: usize = 64 * 1024;

/// Read until `buf` is full or the stream ends.
///
/// A single `Read::read` may return fewer bytes than requested even when
/// more are on the way (pipes, sockets). This keeps calling it until the
/// buffer is full or it returns `Ok(0)`, and retries on
/// [`ErrorKind::Interrupted`].
///
/// # Returns
///
/// The number of bytes placed into `buf`.
pub(crate) fn fill<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Fill `buf` completely or fail.
///
/// # Errors
///
/// - [`WireError::Exhausted`] if the stream had no bytes at all.
/// - [`WireError::ShortRead`] if it ended part-way.
/// - [`WireError::Io`] for any other reader failure.
pub(crate) fn read_full<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> Result<(), WireError> {
    let n = fill(r, buf)?;
    check_count(buf.len() as u64, n as u64)
}

/// Read exactly `len` bytes into a fresh vector.
///
/// The vector grows one [`CHUNK`] at a time rather than being sized to
/// `len` up front.
///
/// # Errors
///
/// Same as [`read_full`].
pub(crate) fn read_vec<R: Read + ?Sized>(r: &mut R, len: u64) -> Result<Vec<u8>, WireError> {
    let mut out = Vec::new();
    let mut remaining = len;

    while remaining > 0 {
        let want = usize::try_from(remaining).map_or(CHUNK, |n| n.min(CHUNK));
        let start = out.len();
        out.resize(start + want, 0);

        let n = fill(r, &mut out[start..])?;
        out.truncate(start + n);
        if n < want {
            return check_count(len, out.len() as u64).map(|()| out);
        }
        remaining -= n as u64;
    }

    Ok(out)
}

fn check_count(expected: u64, actual: u64) -> Result<(), WireError> {
    if actual == expected {
        Ok(())
    } else if actual == 0 {
        Err(WireError::Exhausted { expected })
    } else {
        Err(WireError::ShortRead { expected, actual })
    }
}
