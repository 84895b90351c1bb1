//! Fixture builders for the NAR token reader tests and benches.
//!
//! `nar-wire` is read-only, so the byte streams the tests feed it are
//! framed here by hand. Nothing in this crate is used outside of tests,
//! benches and the golden generator.

#![allow(clippy::pedantic)]

use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Frame `content` as one string token: length, content, zero padding.
pub fn token(content: &[u8]) -> Vec<u8> {
    let mut out = (content.len() as u64).to_le_bytes().to_vec();
    out.extend_from_slice(content);
    out.resize(out.len().next_multiple_of(8), 0);
    out
}

/// Concatenate the framings of several tokens.
pub fn tokens(xs: &[&str]) -> Vec<u8> {
    xs.iter().flat_map(|x| token(x.as_bytes())).collect()
}

/// The token sequence of a small archive:
///
/// ```text
/// /
/// ├── hello.txt   "Hello, world!\n"
/// ├── link     -> hello.txt
/// └── run.sh      "#!/bin/sh\necho hi\n"  (executable)
/// ```
pub const SAMPLE_TOKENS: &[&str] = &[
    "nix-archive-1",
    "(",
    "type",
    "directory",
    "entry",
    "(",
    "name",
    "hello.txt",
    "node",
    "(",
    "type",
    "regular",
    "contents",
    "Hello, world!\n",
    ")",
    ")",
    "entry",
    "(",
    "name",
    "link",
    "node",
    "(",
    "type",
    "symlink",
    "target",
    "hello.txt",
    ")",
    ")",
    "entry",
    "(",
    "name",
    "run.sh",
    "node",
    "(",
    "type",
    "regular",
    "executable",
    "",
    "contents",
    "#!/bin/sh\necho hi\n",
    ")",
    ")",
    ")",
];

/// The framed bytes of [`SAMPLE_TOKENS`].
pub fn sample_archive() -> Vec<u8> {
    tokens(SAMPLE_TOKENS)
}

/// Path of a file under `tests/golden/`.
pub fn golden_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(name)
}

/// Read a file under `tests/golden/`, panicking with the path on failure.
pub fn golden(name: &str) -> Vec<u8> {
    let path = golden_path(name);
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

/// A reader that hands out at most `step` bytes per `read` call, the way a
/// pipe or socket might.
pub struct Fragmented<'a> {
    data: &'a [u8],
    step: usize,
}

impl<'a> Fragmented<'a> {
    pub fn new(data: &'a [u8], step: usize) -> Self {
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
pub struct Interrupting<'a> {
    data: &'a [u8],
    interrupted: bool,
}

impl<'a> Interrupting<'a> {
    pub fn new(data: &'a [u8]) -> Self {
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

/// A reader that fails with a non-retryable error once `data` runs out.
pub struct Failing<'a> {
    data: &'a [u8],
}

impl<'a> Failing<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl Read for Failing<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        }
        self.data.read(buf)
    }
}
