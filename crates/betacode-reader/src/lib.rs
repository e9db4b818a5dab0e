//! betacode-reader: streaming front end for the Beta Code converter.
//!
//! [`BetaReader`] pulls raw lines from any [`std::io::BufRead`] source,
//! converts each one with a [`BetaConverter`](betacode_core::BetaConverter)
//! and serves the result one character at a time.

pub mod error;
pub mod lines;
pub mod reader;

pub use betacode_core;
pub use error::{ReaderError, Result};
pub use lines::{RawLines, decode_latin1, read_raw_line, split_lines};
pub use reader::BetaReader;
