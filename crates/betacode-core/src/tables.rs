//! Static Beta Code lookup tables.
//!
//! Bare letters resolve through [`GREEK_UPPER`] / [`GREEK_LOWER`], keyed by
//! their ASCII code. Every escape family that carries a numeric selector
//! (`%`, `[`, `]`, `#`, `"`) resolves it through one of the selector tables
//! below. A code outside a table's domain resolves to `None` rather than an
//! error, so an unknown escape simply produces no output.

use thiserror::Error;

/// Error raised when writing outside a [`CodeMap`]'s capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The code does not fit in the table.
    #[error("code {code} is outside table capacity {capacity}")]
    OutOfRange {
        /// The rejected code.
        code: u32,
        /// Number of slots in the table.
        capacity: usize,
    },
}

/// A fixed-capacity map from a small code to a Unicode character.
///
/// Empty slots hold `None`, which doubles as the "absent" sentinel returned
/// by [`get`](CodeMap::get) for codes outside the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeMap<const N: usize> {
    table: [Option<char>; N],
}

impl<const N: usize> CodeMap<N> {
    /// Create a table with every slot empty.
    pub const fn empty() -> Self {
        Self { table: [None; N] }
    }

    /// Build a table from `(code, character)` pairs.
    ///
    /// Intended for `const` table definitions: an entry whose code does not
    /// fit aborts const evaluation, so bad table data fails the build.
    pub const fn from_entries(entries: &[(u8, char)]) -> Self {
        let mut table = [None; N];
        let mut i = 0;
        while i < entries.len() {
            let (code, ch) = entries[i];
            assert!((code as usize) < N, "table entry outside capacity");
            table[code as usize] = Some(ch);
            i += 1;
        }
        Self { table }
    }

    /// Number of slots in the table.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Look up a code. Returns `None` for empty slots and out-of-range codes.
    pub fn get(&self, code: u32) -> Option<char> {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.table.get(index))
            .copied()
            .flatten()
    }

    /// Store `ch` under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OutOfRange`] if `code` does not fit in the table.
    pub fn set(&mut self, code: u32, ch: char) -> Result<(), TableError> {
        let slot = usize::try_from(code)
            .ok()
            .and_then(|index| self.table.get_mut(index))
            .ok_or(TableError::OutOfRange { code, capacity: N })?;
        *slot = Some(ch);
        Ok(())
    }

    /// Iterate over the populated `(code, character)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, char)> + '_ {
        self.table
            .iter()
            .enumerate()
            .filter_map(|(code, ch)| ch.map(|ch| (code as u32, ch)))
    }
}

impl<const N: usize> Default for CodeMap<N> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Capital Greek letters keyed by their Beta Code ASCII letter.
///
/// `J` has no Greek counterpart. `V` is the digamma.
pub static GREEK_UPPER: CodeMap<128> = CodeMap::from_entries(&[
    (b'A', '\u{0391}'),
    (b'B', '\u{0392}'),
    (b'C', '\u{039E}'),
    (b'D', '\u{0394}'),
    (b'E', '\u{0395}'),
    (b'F', '\u{03A6}'),
    (b'G', '\u{0393}'),
    (b'H', '\u{0397}'),
    (b'I', '\u{0399}'),
    (b'K', '\u{039A}'),
    (b'L', '\u{039B}'),
    (b'M', '\u{039C}'),
    (b'N', '\u{039D}'),
    (b'O', '\u{039F}'),
    (b'P', '\u{03A0}'),
    (b'Q', '\u{0398}'),
    (b'R', '\u{03A1}'),
    (b'S', '\u{03A3}'),
    (b'T', '\u{03A4}'),
    (b'U', '\u{03A5}'),
    (b'V', '\u{03DC}'),
    (b'W', '\u{03A9}'),
    (b'X', '\u{03A7}'),
    (b'Y', '\u{03A8}'),
    (b'Z', '\u{0396}'),
]);

/// Small Greek letters keyed by their Beta Code ASCII letter.
///
/// `S` maps to the medial sigma; the engine decides when it becomes final.
pub static GREEK_LOWER: CodeMap<128> = CodeMap::from_entries(&[
    (b'A', '\u{03B1}'),
    (b'B', '\u{03B2}'),
    (b'C', '\u{03BE}'),
    (b'D', '\u{03B4}'),
    (b'E', '\u{03B5}'),
    (b'F', '\u{03C6}'),
    (b'G', '\u{03B3}'),
    (b'H', '\u{03B7}'),
    (b'I', '\u{03B9}'),
    (b'K', '\u{03BA}'),
    (b'L', '\u{03BB}'),
    (b'M', '\u{03BC}'),
    (b'N', '\u{03BD}'),
    (b'O', '\u{03BF}'),
    (b'P', '\u{03C0}'),
    (b'Q', '\u{03B8}'),
    (b'R', '\u{03C1}'),
    (b'S', '\u{03C3}'),
    (b'T', '\u{03C4}'),
    (b'U', '\u{03C5}'),
    (b'V', '\u{03DD}'),
    (b'W', '\u{03C9}'),
    (b'X', '\u{03C7}'),
    (b'Y', '\u{03C8}'),
    (b'Z', '\u{03B6}'),
]);

/// `%n` additional punctuation.
pub static ADDITIONAL_PUNCTUATION: CodeMap<11> = CodeMap::from_entries(&[
    (0, '\u{2020}'),
    (1, '?'),
    (2, '*'),
    (3, '/'),
    (4, '!'),
    (5, '|'),
    (6, '='),
    (7, '+'),
    (8, '%'),
    (9, '&'),
    (10, ':'),
]);

/// `[n` opening brackets.
pub static LEFT_BRACKETS: CodeMap<9> = CodeMap::from_entries(&[
    (0, '['),
    (1, '('),
    (2, '\u{2329}'),
    (3, '{'),
    (4, '\u{27E6}'),
    (5, '\u{2E24}'),
    (6, '\u{2E22}'),
    (7, '\u{2E22}'),
    (8, '\u{2E24}'),
]);

/// `]n` closing brackets.
pub static RIGHT_BRACKETS: CodeMap<9> = CodeMap::from_entries(&[
    (0, ']'),
    (1, ')'),
    (2, '\u{232A}'),
    (3, '}'),
    (4, '\u{27E7}'),
    (5, '\u{2E25}'),
    (6, '\u{2E23}'),
    (7, '\u{2E25}'),
    (8, '\u{2E23}'),
]);

/// `*#n` additional characters: keraia, koppa, stigma, archaic koppa, sampi.
pub static ADDITIONAL_UPPER: CodeMap<7> = CodeMap::from_entries(&[
    (0, '\u{0374}'),
    (1, '\u{03DE}'),
    (2, '\u{03DA}'),
    (3, '\u{03D8}'),
    (4, '\u{03DE}'),
    (5, '\u{03E0}'),
    (6, '\u{2E0F}'),
]);

/// `#n` additional characters, small forms.
pub static ADDITIONAL_LOWER: CodeMap<7> = CodeMap::from_entries(&[
    (0, '\u{0374}'),
    (1, '\u{03DF}'),
    (2, '\u{03DB}'),
    (3, '\u{03D9}'),
    (4, '\u{03DE}'),
    (5, '\u{03E1}'),
    (6, '\u{2E0F}'),
]);

/// `"n` quotation marks that open a quotation.
pub static LEFT_QUOTES: CodeMap<9> = CodeMap::from_entries(&[
    (0, '\u{201C}'),
    (1, '\u{201E}'),
    (2, '\u{201C}'),
    (3, '\u{2018}'),
    (4, '\u{201A}'),
    (5, '\u{201B}'),
    (6, '\u{00AB}'),
    (7, '\u{2039}'),
    (8, '\u{201C}'),
]);

/// `"n` quotation marks that close a quotation.
pub static RIGHT_QUOTES: CodeMap<9> = CodeMap::from_entries(&[
    (0, '\u{201D}'),
    (1, '\u{201E}'),
    (2, '\u{201C}'),
    (3, '\u{2019}'),
    (4, '\u{201A}'),
    (5, '\u{201B}'),
    (6, '\u{00BB}'),
    (7, '\u{203A}'),
    (8, '\u{201E}'),
]);

/// Quotation selectors that do not open or close a quotation.
pub const NON_TOGGLING_QUOTES: [u32; 4] = [1, 2, 4, 5];

/// Resolve a Beta Code letter to its Greek form.
///
/// Returns `None` for letters without a Greek mapping (`J`) and for
/// anything that is not an ASCII capital.
pub fn greek_letter(letter: char, capital: bool) -> Option<char> {
    let table = if capital { &GREEK_UPPER } else { &GREEK_LOWER };
    table.get(u32::from(letter))
}

/// Resolve a quotation selector.
///
/// `opening` selects the left-hand mark, used while no quotation is open.
pub fn quote_mark(selector: u32, opening: bool) -> Option<char> {
    if opening {
        LEFT_QUOTES.get(selector)
    } else {
        RIGHT_QUOTES.get(selector)
    }
}

/// Whether a quotation selector toggles the open/closed quotation state.
pub fn quote_toggles(selector: u32) -> bool {
    !NON_TOGGLING_QUOTES.contains(&selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greek_tables_cover_every_letter_but_j() {
        for letter in 'A'..='Z' {
            let upper = greek_letter(letter, true);
            let lower = greek_letter(letter, false);
            if letter == 'J' {
                assert_eq!(upper, None);
                assert_eq!(lower, None);
            } else {
                assert!(upper.is_some(), "missing capital for {letter}");
                assert!(lower.is_some(), "missing small for {letter}");
            }
        }
    }

    #[test]
    fn greek_lower_is_lowercase_of_upper() {
        for (code, upper) in GREEK_UPPER.iter() {
            let lower = GREEK_LOWER.get(code).unwrap();
            assert_eq!(upper.to_lowercase().next(), Some(lower), "code {code}");
        }
    }

    #[test]
    fn beta_letters_that_differ_from_latin() {
        assert_eq!(greek_letter('C', false), Some('ξ'));
        assert_eq!(greek_letter('Q', false), Some('θ'));
        assert_eq!(greek_letter('Y', false), Some('ψ'));
        assert_eq!(greek_letter('V', true), Some('Ϝ'));
        assert_eq!(greek_letter('S', false), Some('σ'));
    }

    #[test]
    fn non_letters_resolve_to_none() {
        assert_eq!(greek_letter('a', false), None);
        assert_eq!(greek_letter('1', true), None);
        assert_eq!(greek_letter('α', false), None);
    }

    #[test]
    fn get_out_of_domain_returns_none() {
        assert_eq!(LEFT_BRACKETS.get(9), None);
        assert_eq!(ADDITIONAL_PUNCTUATION.get(u32::MAX), None);
        assert_eq!(GREEK_UPPER.get(0x391), None);
    }

    #[test]
    fn set_within_capacity() {
        let mut map: CodeMap<4> = CodeMap::empty();
        map.set(3, 'x').unwrap();
        assert_eq!(map.get(3), Some('x'));
        assert_eq!(map.get(2), None);
    }

    #[test]
    fn set_out_of_range_fails() {
        let mut map: CodeMap<4> = CodeMap::default();
        let err = map.set(4, 'x').unwrap_err();
        assert_eq!(err, TableError::OutOfRange { code: 4, capacity: 4 });
        assert_eq!(err.to_string(), "code 4 is outside table capacity 4");
    }

    #[test]
    fn bracket_tables_are_paired() {
        assert_eq!(LEFT_BRACKETS.capacity(), RIGHT_BRACKETS.capacity());
        assert_eq!(LEFT_BRACKETS.get(0), Some('['));
        assert_eq!(RIGHT_BRACKETS.get(0), Some(']'));
        assert_eq!(LEFT_BRACKETS.get(4), Some('⟦'));
        assert_eq!(RIGHT_BRACKETS.get(4), Some('⟧'));
    }

    #[test]
    fn additional_characters_differ_by_case() {
        assert_eq!(ADDITIONAL_UPPER.get(5), Some('Ϡ'));
        assert_eq!(ADDITIONAL_LOWER.get(5), Some('ϡ'));
        assert_eq!(ADDITIONAL_UPPER.get(0), ADDITIONAL_LOWER.get(0));
    }

    #[test]
    fn quote_marks_by_side() {
        assert_eq!(quote_mark(0, true), Some('“'));
        assert_eq!(quote_mark(0, false), Some('”'));
        assert_eq!(quote_mark(6, true), Some('«'));
        assert_eq!(quote_mark(6, false), Some('»'));
        assert_eq!(quote_mark(42, true), None);
    }

    #[test]
    fn low_quote_variants_do_not_toggle() {
        for selector in [1, 2, 4, 5] {
            assert!(!quote_toggles(selector));
        }
        for selector in [0, 3, 6, 7, 8, 9] {
            assert!(quote_toggles(selector));
        }
    }
}
