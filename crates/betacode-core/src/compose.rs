//! Rendering a base letter plus its diacritics into Unicode.
//!
//! Two strategies implement [`Compose`]:
//!
//! - [`Composing`] always writes the base letter followed by combining marks.
//! - [`Precombined`] writes a single precomposed codepoint when Unicode has one
//!   for the exact combination and otherwise behaves like [`Composing`].
//!
//! The precomposed lookups lean on the regular layout of the Greek Extended
//! block: every breathing-capable vowel owns a run of eight codepoints laid
//! out as psili, dasia, then each of those with varia, oxia and perispomeni.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::diacritics::{Diacritic, DiacriticSet};

/// Appends the rendering of a letter and its diacritics to an output buffer.
pub trait Compose: Send + Sync {
    /// Render `base` with `marks` into `out`. Always writes at least `base`.
    fn compose(&self, out: &mut String, base: char, marks: DiacriticSet);
}

/// Base letter followed by one combining mark per diacritic, in
/// [`Diacritic::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Composing;

impl Compose for Composing {
    fn compose(&self, out: &mut String, base: char, marks: DiacriticSet) {
        out.push(base);
        out.extend(marks.iter().map(Diacritic::mark));
    }
}

/// Single precomposed codepoints where available, [`Composing`] otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Precombined;

impl Compose for Precombined {
    fn compose(&self, out: &mut String, base: char, marks: DiacriticSet) {
        match precombine(base, marks) {
            Some(ch) => out.push(ch),
            None => Composing.compose(out, base, marks),
        }
    }
}

/// Selects a composition strategy at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Flavor {
    /// See [`Composing`].
    Composing,
    /// See [`Precombined`].
    #[default]
    Precombined,
}

impl Flavor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Flavor::Composing => "composing",
            Flavor::Precombined => "precombined",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Flavor`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown flavor '{0}' (expected 'composing' or 'precombined')")]
pub struct UnknownFlavor(pub String);

impl FromStr for Flavor {
    type Err = UnknownFlavor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "composing" => Ok(Flavor::Composing),
            "precombined" => Ok(Flavor::Precombined),
            _ => Err(UnknownFlavor(s.to_string())),
        }
    }
}

impl Compose for Flavor {
    fn compose(&self, out: &mut String, base: char, marks: DiacriticSet) {
        match self {
            Flavor::Composing => Composing.compose(out, base, marks),
            Flavor::Precombined => Precombined.compose(out, base, marks),
        }
    }
}

/// The tonal accent of a letter. At most one is representable precomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Bare,
    Varia,
    Oxia,
    Perispomeni,
}

impl Tone {
    /// `None` when more than one accent is present.
    fn of(marks: DiacriticSet) -> Option<Self> {
        let varia = marks.contains(Diacritic::Varia);
        let oxia = marks.contains(Diacritic::Oxia);
        let perispomeni = marks.contains(Diacritic::Perispomeni);
        match (varia, oxia, perispomeni) {
            (false, false, false) => Some(Tone::Bare),
            (true, false, false) => Some(Tone::Varia),
            (false, true, false) => Some(Tone::Oxia),
            (false, false, true) => Some(Tone::Perispomeni),
            _ => None,
        }
    }

    /// Offset within an eight-slot breathing run.
    const fn breathing_offset(self) -> u32 {
        match self {
            Tone::Bare => 0,
            Tone::Varia => 2,
            Tone::Oxia => 4,
            Tone::Perispomeni => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Breathing {
    Psili,
    Dasia,
}

impl Breathing {
    /// `Ok(None)` without breathing, `Err(())` when both are present.
    fn of(marks: DiacriticSet) -> Result<Option<Self>, ()> {
        match (marks.contains(Diacritic::Psili), marks.contains(Diacritic::Dasia)) {
            (false, false) => Ok(None),
            (true, false) => Ok(Some(Breathing::Psili)),
            (false, true) => Ok(Some(Breathing::Dasia)),
            (true, true) => Err(()),
        }
    }

    const fn offset(self) -> u32 {
        match self {
            Breathing::Psili => 0,
            Breathing::Dasia => 1,
        }
    }
}

/// An eight-slot run in the Greek Extended block.
struct BreathingRun {
    base: char,
    start: u32,
    /// ε and ο never take a circumflex.
    perispomeni: bool,
    /// Capital upsilon only exists with rough breathing.
    psili: bool,
}

const fn run(base: char, start: u32, perispomeni: bool, psili: bool) -> BreathingRun {
    BreathingRun {
        base,
        start,
        perispomeni,
        psili,
    }
}

static BREATHING_RUNS: [BreathingRun; 14] = [
    run('α', 0x1F00, true, true),
    run('Α', 0x1F08, true, true),
    run('ε', 0x1F10, false, true),
    run('Ε', 0x1F18, false, true),
    run('η', 0x1F20, true, true),
    run('Η', 0x1F28, true, true),
    run('ι', 0x1F30, true, true),
    run('Ι', 0x1F38, true, true),
    run('ο', 0x1F40, false, true),
    run('Ο', 0x1F48, false, true),
    run('υ', 0x1F50, true, true),
    run('Υ', 0x1F58, true, false),
    run('ω', 0x1F60, true, true),
    run('Ω', 0x1F68, true, true),
];

static BREATHING_IOTA_RUNS: [BreathingRun; 6] = [
    run('α', 0x1F80, true, true),
    run('Α', 0x1F88, true, true),
    run('η', 0x1F90, true, true),
    run('Η', 0x1F98, true, true),
    run('ω', 0x1FA0, true, true),
    run('Ω', 0x1FA8, true, true),
];

/// The single precomposed codepoint for `base` with `marks`, if one exists.
///
/// Returns `Some(base)` for an empty set. Any combination without an exact
/// precomposed form returns `None`; callers then compose with marks.
pub fn precombine(base: char, marks: DiacriticSet) -> Option<char> {
    if marks.is_empty() {
        return Some(base);
    }
    let tone = Tone::of(marks)?;
    let breathing = Breathing::of(marks).ok()?;
    let iota = marks.has_iota();
    if marks.contains(Diacritic::Ypogegrammeni) && marks.contains(Diacritic::Prosgegrammeni) {
        return None;
    }
    let dialytika = marks.contains(Diacritic::Dialytika);

    match breathing {
        None if !iota && matches!(tone, Tone::Bare | Tone::Oxia) => {
            monotonic(base, tone == Tone::Oxia, dialytika)
        }
        Some(_) if dialytika => None,
        Some(breathing) if !iota => {
            if matches!(base, 'ρ' | 'Ρ') {
                return rho(base, breathing, tone);
            }
            breathing_run(&BREATHING_RUNS, base, breathing, tone)
        }
        Some(breathing) => breathing_run(&BREATHING_IOTA_RUNS, base, breathing, tone),
        None if iota => {
            if dialytika {
                return None;
            }
            subscript(base, tone)
        }
        None => match tone {
            Tone::Perispomeni => circumflex(base, dialytika),
            Tone::Varia => grave(base, dialytika),
            Tone::Bare | Tone::Oxia => None,
        },
    }
}

/// Acute and diaeresis from the Greek and Coptic block.
fn monotonic(base: char, oxia: bool, dialytika: bool) -> Option<char> {
    let ch = match (oxia, dialytika) {
        (false, false) => base,
        (true, false) => match base {
            'Α' => 'Ά',
            'Ε' => 'Έ',
            'Η' => 'Ή',
            'Ι' => 'Ί',
            'Ο' => 'Ό',
            'Υ' => 'Ύ',
            'Ω' => 'Ώ',
            'α' => 'ά',
            'ε' => 'έ',
            'η' => 'ή',
            'ι' => 'ί',
            'ο' => 'ό',
            'υ' => 'ύ',
            'ω' => 'ώ',
            _ => return None,
        },
        (false, true) => match base {
            'Ι' => 'Ϊ',
            'Υ' => 'Ϋ',
            'ι' => 'ϊ',
            'υ' => 'ϋ',
            _ => return None,
        },
        (true, true) => match base {
            'ι' => 'ΐ',
            'υ' => 'ΰ',
            _ => return None,
        },
    };
    Some(ch)
}

fn rho(base: char, breathing: Breathing, tone: Tone) -> Option<char> {
    match (base, breathing, tone) {
        ('ρ', Breathing::Psili, Tone::Bare) => Some('\u{1FE4}'),
        ('ρ', Breathing::Dasia, Tone::Bare) => Some('\u{1FE5}'),
        ('Ρ', Breathing::Dasia, Tone::Bare) => Some('\u{1FEC}'),
        _ => None,
    }
}

fn breathing_run(
    runs: &[BreathingRun],
    base: char,
    breathing: Breathing,
    tone: Tone,
) -> Option<char> {
    let run = runs.iter().find(|run| run.base == base)?;
    if tone == Tone::Perispomeni && !run.perispomeni {
        return None;
    }
    if breathing == Breathing::Psili && !run.psili {
        return None;
    }
    char::from_u32(run.start + breathing.offset() + tone.breathing_offset())
}

/// Iota subscript without breathing.
///
/// Small α, η, ω take every accent but the grave; the capitals only exist
/// unaccented.
fn subscript(base: char, tone: Tone) -> Option<char> {
    let start: u32 = match base {
        'α' => 0x1FB2,
        'η' => 0x1FC2,
        'ω' => 0x1FF2,
        'Α' => return (tone == Tone::Bare).then_some('\u{1FBC}'),
        'Η' => return (tone == Tone::Bare).then_some('\u{1FCC}'),
        'Ω' => return (tone == Tone::Bare).then_some('\u{1FFC}'),
        _ => return None,
    };
    let offset = match tone {
        Tone::Bare => 1,
        Tone::Oxia => 2,
        Tone::Perispomeni => 5,
        Tone::Varia => return None,
    };
    char::from_u32(start + offset)
}

fn circumflex(base: char, dialytika: bool) -> Option<char> {
    let ch = match (base, dialytika) {
        ('α', false) => 'ᾶ',
        ('η', false) => 'ῆ',
        ('ι', false) => 'ῖ',
        ('ι', true) => 'ῗ',
        ('υ', false) => 'ῦ',
        ('υ', true) => 'ῧ',
        ('ω', false) => 'ῶ',
        _ => return None,
    };
    Some(ch)
}

fn grave(base: char, dialytika: bool) -> Option<char> {
    let ch = match (base, dialytika) {
        ('Α', false) => 'Ὰ',
        ('Ε', false) => 'Ὲ',
        ('Η', false) => 'Ὴ',
        ('Ι', false) => 'Ὶ',
        ('Ο', false) => 'Ὸ',
        ('Υ', false) => 'Ὺ',
        ('Ω', false) => 'Ὼ',
        ('α', false) => 'ὰ',
        ('ε', false) => 'ὲ',
        ('η', false) => 'ὴ',
        ('ι', false) => 'ὶ',
        ('ι', true) => 'ῒ',
        ('ο', false) => 'ὸ',
        ('υ', false) => 'ὺ',
        ('υ', true) => 'ῢ',
        ('ω', false) => 'ὼ',
        _ => return None,
    };
    Some(ch)
}
