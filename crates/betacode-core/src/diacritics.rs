//! Polytonic Greek diacritics and the flag set attached to a pending letter.

use std::fmt;

/// One of the eight diacritics Beta Code can attach to a letter.
///
/// Variants are declared in the order the combining marks are emitted by
/// [`Composing`](crate::Composing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diacritic {
    /// Smooth breathing, `)`.
    Psili,
    /// Rough breathing, `(`.
    Dasia,
    /// Acute accent, `/`.
    Oxia,
    /// Grave accent, `\`.
    Varia,
    /// Circumflex, `=`.
    Perispomeni,
    /// Diaeresis, `+`.
    Dialytika,
    /// Iota subscript, `|`.
    Ypogegrammeni,
    /// Capital iota adscript. No Beta Code marker sets it.
    Prosgegrammeni,
}

impl Diacritic {
    /// All diacritics in emission order.
    pub const ALL: [Diacritic; 8] = [
        Diacritic::Psili,
        Diacritic::Dasia,
        Diacritic::Oxia,
        Diacritic::Varia,
        Diacritic::Perispomeni,
        Diacritic::Dialytika,
        Diacritic::Ypogegrammeni,
        Diacritic::Prosgegrammeni,
    ];

    /// The Unicode mark appended after the base letter.
    pub const fn mark(self) -> char {
        match self {
            Diacritic::Psili => '\u{0313}',
            Diacritic::Dasia => '\u{0314}',
            Diacritic::Oxia => '\u{0301}',
            Diacritic::Varia => '\u{0300}',
            Diacritic::Perispomeni => '\u{0342}',
            Diacritic::Dialytika => '\u{0308}',
            Diacritic::Ypogegrammeni => '\u{0345}',
            Diacritic::Prosgegrammeni => '\u{1FBE}',
        }
    }

    /// The diacritic a Beta Code marker character stands for.
    pub const fn from_marker(marker: char) -> Option<Self> {
        match marker {
            ')' => Some(Diacritic::Psili),
            '(' => Some(Diacritic::Dasia),
            '/' => Some(Diacritic::Oxia),
            '\\' => Some(Diacritic::Varia),
            '=' => Some(Diacritic::Perispomeni),
            '+' => Some(Diacritic::Dialytika),
            '|' => Some(Diacritic::Ypogegrammeni),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of [`Diacritic`]s, stored as one bit per diacritic.
///
/// Bit `i` corresponds to `Diacritic::ALL[i]`, so every `u8` is a valid set
/// and `0..=255` enumerates all combinations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DiacriticSet(u8);

impl DiacriticSet {
    /// The empty set.
    pub const EMPTY: DiacriticSet = DiacriticSet(0);

    /// Build a set from its bit representation.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Add a diacritic.
    pub fn insert(&mut self, diacritic: Diacritic) {
        self.0 |= diacritic.bit();
    }

    /// Return a copy of this set with `diacritic` added.
    pub const fn with(self, diacritic: Diacritic) -> Self {
        Self(self.0 | diacritic.bit())
    }

    /// Whether `diacritic` is in the set.
    pub const fn contains(self, diacritic: Diacritic) -> bool {
        self.0 & diacritic.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Smooth or rough breathing present.
    pub const fn has_breathing(self) -> bool {
        self.contains(Diacritic::Psili) || self.contains(Diacritic::Dasia)
    }

    /// Iota subscript or adscript present.
    pub const fn has_iota(self) -> bool {
        self.contains(Diacritic::Ypogegrammeni) || self.contains(Diacritic::Prosgegrammeni)
    }

    /// Iterate in emission order.
    pub fn iter(self) -> impl Iterator<Item = Diacritic> {
        Diacritic::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Diacritic> for DiacriticSet {
    fn from_iter<I: IntoIterator<Item = Diacritic>>(iter: I) -> Self {
        let mut set = DiacriticSet::EMPTY;
        for diacritic in iter {
            set.insert(diacritic);
        }
        set
    }
}

impl fmt::Debug for DiacriticSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
