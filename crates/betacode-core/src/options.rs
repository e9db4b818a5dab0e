//! Conversion options.

use crate::compose::Flavor;
use crate::unicode_norm::UnicodeNorm;

/// Line break written for `@6` page-format escapes and for runs of
/// non-ASCII input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LineBreak {
    /// `\r\n` (default), the convention of the legacy corpora.
    #[default]
    CrLf,
    /// `\n`.
    Lf,
}

impl LineBreak {
    pub const fn as_str(self) -> &'static str {
        match self {
            LineBreak::CrLf => "\r\n",
            LineBreak::Lf => "\n",
        }
    }
}

/// Options controlling a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConvertOptions {
    /// Composition strategy (default: [`Flavor::Precombined`]).
    pub flavor: Flavor,
    /// Line break emitted by the converter (default: [`LineBreak::CrLf`]).
    pub line_break: LineBreak,
    /// Normalization applied to each converted line (default: none).
    pub unicode_norm: UnicodeNorm,
}

impl ConvertOptions {
    /// Combining marks throughout: composing strategy followed by NFD.
    pub fn decomposed() -> Self {
        Self {
            flavor: Flavor::Composing,
            unicode_norm: UnicodeNorm::Nfd,
            ..Self::default()
        }
    }

    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    pub fn with_line_break(mut self, line_break: LineBreak) -> Self {
        self.line_break = line_break;
        self
    }

    pub fn with_unicode_norm(mut self, unicode_norm: UnicodeNorm) -> Self {
        self.unicode_norm = unicode_norm;
        self
    }
}
