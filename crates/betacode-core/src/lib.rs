//! betacode-core: Beta Code to Unicode transcoding.
//!
//! This crate holds the static lookup tables, the diacritic model, the two
//! composition strategies and the line-level [`BetaConverter`]. It performs
//! no I/O; see `betacode-reader` for streaming input.

pub mod compose;
pub mod converter;
pub mod diacritics;
pub mod options;
pub mod tables;
pub mod unicode_norm;

pub use compose::{Compose, Composing, Flavor, Precombined, UnknownFlavor, precombine};
pub use converter::{BetaConverter, EscapeCode, ScriptMode};
pub use diacritics::{Diacritic, DiacriticSet};
pub use options::{ConvertOptions, LineBreak};
pub use tables::{CodeMap, TableError};
pub use unicode_norm::UnicodeNorm;
