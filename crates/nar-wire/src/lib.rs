#![warn(clippy::pedantic)]
//! Token readers for the Nix archive (NAR) wire format.
//!
//! Every NAR is a sequence of two kinds of token:
//!
//! - integers: 8 bytes, unsigned little-endian, at most `2^63 - 1`;
//! - strings: an integer length, that many content bytes (never `0x00`),
//!   then zero padding up to the next multiple of 8.
//!
//! This crate decodes those tokens from any [`std::io::Read`] and nothing
//! more: it does not know which keyword follows which, and it never seeks,
//! buffers ahead or recovers from a malformed stream. A grammar walker
//! drives it one token at a time, typically through [`expect_str`] for the
//! structural keywords and [`read_bytes`] for names and targets.

pub mod error;
pub mod int;
pub mod limits;
pub mod literal;
pub mod padding;
pub mod reader;
pub mod string;

mod io;
#[cfg(test)]
mod testutil;

pub use error::WireError;
pub use int::{MAX_INT, read_int};
pub use limits::Limits;
pub use literal::{NAR_MAGIC, expect_str, expect_str_with_limits};
pub use padding::{ALIGNMENT, padding_len, read_padding};
pub use reader::TokenReader;
pub use string::{read_bytes, read_bytes_with_limits, read_string, read_string_with_limits};
