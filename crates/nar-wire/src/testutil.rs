//! Stream fixtures shared by the unit tests.
//!
//! Kept in step with the public builders in `nar-tests`, which this crate
//! cannot depend on.

use std::io::{self, Read};

/// Frame `content` as one string token: length, content, zero padding.
pub(crate) fn token(content: &[u8]) -> Vec<u8> {
    let mut out = (content.len() as u64).to_le_bytes().to_vec();
    out.extend_from_slice(content);
    out.resize(out.len().next_multiple_of(8), 0);
    out
}

/// Concatenate the framings of several tokens.
pub(crate) fn tokens(xs: &[&str]) -> Vec<u8> {
    xs.iter().flat_map(|x| token(x.as_bytes())).collect()
}

/// A reader that hands out at most `step` bytes per `read` call, the way a
/// pipe or socket might.
pub(crate) struct Fragmented<'a> {
    data: &'a [u8],
    step: usize,
}

impl<'a> Fragmented<'a> {
    pub(crate) fn new(data: &'a [u8], step: usize) -> Self {
        assert!(step > 0, "step must be positive");
        Self { data, step }
    }
}

impl Read for Fragmented<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.step).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// A reader that fails with `Interrupted` before every successful read.
pub(crate) struct Interrupting<'a> {
    data: &'a [u8],
    interrupted: bool,
}

impl<'a> Interrupting<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            interrupted: false,
        }
    }
}

impl Read for Interrupting<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::ErrorKind::Interrupted.into());
        }
        self.interrupted = false;
        self.data.read(buf)
    }
}
