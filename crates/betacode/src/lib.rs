//! betacode: convert Beta Code encoded ancient Greek to Unicode.
//!
//! This is the public API facade. It re-exports the converter and its
//! options from betacode-core and the streaming reader from
//! betacode-reader, and adds whole-document and stream conversion.
//!
//! # Architecture
//!
//! - **betacode-core**: tables, diacritics, composers, line converter
//! - **betacode-reader**: byte-stream line adapter with a character pull API
//! - **betacode** (this crate): entry points tying both together
//!
//! # Example
//!
//! ```
//! use betacode::{ConvertOptions, Flavor, convert_document};
//!
//! let options = ConvertOptions::default().with_flavor(Flavor::Composing);
//! let text = convert_document("A)\nLOGOS", &options);
//! assert_eq!(text, "α\u{0313}\nλογος");
//! ```

mod document;
mod error;

pub use betacode_core;
pub use betacode_core::{
    BetaConverter, CodeMap, Compose, Composing, ConvertOptions, Diacritic, DiacriticSet,
    EscapeCode, Flavor, LineBreak, Precombined, ScriptMode, TableError, UnicodeNorm,
    UnknownFlavor, precombine,
};
pub use betacode_reader;
pub use betacode_reader::{BetaReader, RawLines, ReaderError, split_lines};
#[cfg(feature = "parallel")]
pub use document::convert_document_parallel;
pub use document::{convert, convert_document, convert_stream, open_reader};
pub use error::Error;
