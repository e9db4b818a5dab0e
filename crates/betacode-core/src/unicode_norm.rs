//! Unicode normalization of converted text.
//!
//! The two composers produce canonically equivalent but differently encoded
//! output. Normalizing afterwards lets callers pick one representation for
//! storage or comparison regardless of the composer in use.

use unicode_normalization::UnicodeNormalization;

/// Unicode normalization form applied to converted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum UnicodeNorm {
    /// Leave the converter's output as is (default).
    #[default]
    None,
    /// Canonical composition.
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility composition. Folds the Greek apostrophe (U+1FBF) into
    /// a space followed by a combining psili.
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

impl UnicodeNorm {
    /// Normalize a borrowed string into a new one.
    pub fn normalize(&self, text: &str) -> String {
        match self {
            UnicodeNorm::None => text.to_string(),
            UnicodeNorm::Nfc => text.nfc().collect(),
            UnicodeNorm::Nfd => text.nfd().collect(),
            UnicodeNorm::Nfkc => text.nfkc().collect(),
            UnicodeNorm::Nfkd => text.nfkd().collect(),
        }
    }

    /// Normalize an owned string, returning it untouched for [`UnicodeNorm::None`].
    pub fn apply(&self, text: String) -> String {
        match self {
            UnicodeNorm::None => text,
            _ => self.normalize(&text),
        }
    }
}
