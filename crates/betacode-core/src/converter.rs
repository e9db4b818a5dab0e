//! Beta Code transcoding engine.
//!
//! A line is scanned left to right into tokens. A token is either a base
//! letter with its diacritics and an optional numeric selector, a single
//! literal character, or an escape sequence (`%`, `@`, `[`, `"` ...) with its
//! numeric selector. Each token is emitted as soon as its terminating
//! character is seen; the terminator itself is left in the input (one
//! character of lookahead) and starts the next token.
//!
//! Script mode (`$` Greek, `&` Latin) and the open/closed quotation state
//! persist across tokens for the duration of one [`BetaConverter::convert`]
//! call and reset for the next one.

use std::iter::Peekable;
use std::str::Chars;

use tracing::trace;

use crate::compose::{Compose, Flavor};
use crate::diacritics::{Diacritic, DiacriticSet};
use crate::options::{ConvertOptions, LineBreak};
use crate::tables::{
    self, ADDITIONAL_LOWER, ADDITIONAL_PUNCTUATION, ADDITIONAL_UPPER, LEFT_BRACKETS,
    RIGHT_BRACKETS,
};

/// How bare ASCII letters are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptMode {
    /// Letters resolve through the Greek tables (default).
    #[default]
    Greek,
    /// Letters of either case pass through unchanged.
    Latin,
}

/// The escape family a token belongs to.
///
/// [`EscapeCode::None`] is the ordinary letter/literal path; every other
/// variant is entered through its introducer character and carries a
/// numeric selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeCode {
    #[default]
    None,
    /// `$`: switch to Greek.
    GreekFontAnnounce,
    /// `&`: switch to Latin.
    LatinFontAnnounce,
    /// `%`
    AdditionalPunctuation,
    /// `@`: tab or line break.
    PageFormat,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `#`: archaic letters and numeral signs.
    AdditionalCharacter,
    /// `{`
    MarkupOpen,
    /// `}`
    MarkupClose,
    /// `<`
    FormattingOpen,
    /// `>`
    FormattingClose,
    /// `"`
    Quotation,
    /// `^`: a run of spaces, one per four units.
    QuarterSpace,
}

impl EscapeCode {
    /// The escape introduced by `c`, if `c` is an escape sentinel.
    pub const fn introduced_by(c: char) -> Option<Self> {
        let code = match c {
            '$' => EscapeCode::GreekFontAnnounce,
            '&' => EscapeCode::LatinFontAnnounce,
            '%' => EscapeCode::AdditionalPunctuation,
            '@' => EscapeCode::PageFormat,
            '[' => EscapeCode::LeftBracket,
            ']' => EscapeCode::RightBracket,
            '#' => EscapeCode::AdditionalCharacter,
            '{' => EscapeCode::MarkupOpen,
            '}' => EscapeCode::MarkupClose,
            '<' => EscapeCode::FormattingOpen,
            '>' => EscapeCode::FormattingClose,
            '"' => EscapeCode::Quotation,
            '^' => EscapeCode::QuarterSpace,
            _ => return None,
        };
        Some(code)
    }
}

/// Selectors clamp here while digits accumulate. Large enough for every
/// table, small enough to keep `^n` runs short.
const MAX_SELECTOR: u32 = 0xFFFF;

/// State shared by all tokens of one line.
#[derive(Debug, Default)]
struct LineState {
    script: ScriptMode,
    in_quotes: bool,
}

/// A token under construction. Built fresh for every output unit.
#[derive(Debug, Default)]
struct Token {
    escape: EscapeCode,
    base: Option<char>,
    marks: DiacriticSet,
    capital: bool,
    selector: u32,
    word_final: bool,
}

impl Token {
    fn push_digit(&mut self, digit: u32) {
        self.selector = (self.selector * 10 + digit).min(MAX_SELECTOR);
    }

    /// Marks a pending letter as ending a word. A hyphen joins the word
    /// across the break, so a sigma before it stays medial.
    fn close_word(&mut self, terminator: Option<char>) {
        if self.base.is_some() && terminator != Some('-') {
            self.word_final = true;
        }
    }

    /// The base letter after the sigma rules. An explicit selector wins over
    /// word position.
    fn resolved_base(&self) -> Option<char> {
        let base = self.base?;
        let resolved = match (base, self.selector) {
            ('σ', 1) => 'σ',
            ('σ', 2) => 'ς',
            ('σ' | 'Σ', 3) if self.capital => '\u{03F9}',
            ('σ' | 'Σ', 3) => '\u{03F2}',
            ('σ', _) if self.word_final && !self.capital => 'ς',
            _ => base,
        };
        Some(resolved)
    }
}

/// Converts Beta Code lines into Unicode using a [`Compose`] strategy.
///
/// Conversion never fails: unmapped selectors, stray diacritics and other
/// irregular input are dropped, and non-ASCII runs become line breaks.
#[derive(Debug, Clone, Default)]
pub struct BetaConverter<C> {
    composer: C,
    line_break: LineBreak,
}

impl BetaConverter<Flavor> {
    /// Converter for the flavor and line break selected in `options`.
    ///
    /// Normalization is not applied here; see
    /// [`UnicodeNorm::apply`](crate::UnicodeNorm::apply).
    pub fn from_options(options: &ConvertOptions) -> Self {
        BetaConverter::new(options.flavor).with_line_break(options.line_break)
    }
}

impl<C: Compose> BetaConverter<C> {
    pub fn new(composer: C) -> Self {
        Self {
            composer,
            line_break: LineBreak::default(),
        }
    }

    /// Set the line break written for `@6` and non-ASCII runs.
    pub fn with_line_break(mut self, line_break: LineBreak) -> Self {
        self.line_break = line_break;
        self
    }

    pub fn line_break(&self) -> LineBreak {
        self.line_break
    }

    pub fn composer(&self) -> &C {
        &self.composer
    }

    /// Convert one line of Beta Code.
    ///
    /// The line may carry its terminator; non-Beta characters such as `\r`
    /// and `\n` pass through.
    pub fn convert(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len() * 2);
        self.convert_into(line, &mut out);
        out
    }

    /// Convert one line, appending the result to `out`.
    pub fn convert_into(&self, line: &str, out: &mut String) {
        let mut chars = line.chars().peekable();
        let mut state = LineState::default();
        while chars.peek().is_some() {
            let token = self.scan(&mut chars, &mut state, out);
            self.emit(&token, &mut state, out);
        }
    }

    /// Read one token. Always consumes at least one character.
    ///
    /// Line breaks for non-ASCII runs are written straight to `out`, ahead of
    /// any letter still pending.
    fn scan(
        &self,
        chars: &mut Peekable<Chars<'_>>,
        state: &mut LineState,
        out: &mut String,
    ) -> Token {
        let mut token = Token::default();

        while let Some(&c) = chars.peek() {
            if token.escape != EscapeCode::None {
                match c.to_digit(10) {
                    Some(digit) => {
                        token.push_digit(digit);
                        chars.next();
                        continue;
                    }
                    None => return token,
                }
            }

            if let Some(escape) = EscapeCode::introduced_by(c) {
                if token.base.is_some() {
                    token.close_word(Some(c));
                    return token;
                }
                match escape {
                    EscapeCode::GreekFontAnnounce => state.script = ScriptMode::Greek,
                    EscapeCode::LatinFontAnnounce => state.script = ScriptMode::Latin,
                    _ => {}
                }
                token.escape = escape;
                chars.next();
                continue;
            }

            if let Some(diacritic) = Diacritic::from_marker(c) {
                token.marks.insert(diacritic);
                chars.next();
                continue;
            }

            match c {
                '*' => {
                    if token.base.is_some() {
                        return token;
                    }
                    token.capital = true;
                    chars.next();
                }
                'A'..='Z' | 'a'..='z'
                    if c.is_ascii_uppercase() || state.script == ScriptMode::Latin =>
                {
                    if token.base.is_some() {
                        return token;
                    }
                    chars.next();
                    token.base = match state.script {
                        ScriptMode::Latin => Some(c),
                        ScriptMode::Greek => {
                            let letter = tables::greek_letter(c, token.capital);
                            if letter.is_none() {
                                trace!(letter = %c, "dropping unmapped letter");
                            }
                            letter
                        }
                    };
                }
                '0'..='9' if token.base.is_some() => {
                    token.push_digit(c.to_digit(10).unwrap_or_default());
                    chars.next();
                }
                _ if !c.is_ascii() => {
                    // The pending token survives the run.
                    let mut skipped = 0usize;
                    while chars.next_if(|c| !c.is_ascii()).is_some() {
                        skipped += 1;
                    }
                    trace!(skipped, "replacing non-ASCII run with a line break");
                    out.push_str(self.line_break.as_str());
                }
                _ => {
                    if token.base.is_some() {
                        token.close_word(Some(c));
                        return token;
                    }
                    chars.next();
                    token.base = Some(match c {
                        ':' => '\u{0387}',
                        '\'' => '\u{1FBF}',
                        other => other,
                    });
                    return token;
                }
            }
        }

        token.close_word(None);
        token
    }

    fn emit(&self, token: &Token, state: &mut LineState, out: &mut String) {
        let selector = token.selector;
        let mapped = match token.escape {
            EscapeCode::None => {
                match token.resolved_base() {
                    Some(base) => self.composer.compose(out, base, token.marks),
                    None if !token.marks.is_empty() => {
                        trace!(marks = ?token.marks, "dropping diacritics without a letter");
                    }
                    None => {}
                }
                return;
            }
            EscapeCode::PageFormat => match selector {
                0 => {
                    out.push('\t');
                    return;
                }
                6 => {
                    out.push_str(self.line_break.as_str());
                    return;
                }
                _ => None,
            },
            EscapeCode::AdditionalPunctuation => ADDITIONAL_PUNCTUATION.get(selector),
            EscapeCode::LeftBracket => LEFT_BRACKETS.get(selector),
            EscapeCode::RightBracket => RIGHT_BRACKETS.get(selector),
            EscapeCode::AdditionalCharacter if token.capital => ADDITIONAL_UPPER.get(selector),
            EscapeCode::AdditionalCharacter => ADDITIONAL_LOWER.get(selector),
            EscapeCode::Quotation => {
                let mark = tables::quote_mark(selector, !state.in_quotes);
                if tables::quote_toggles(selector) {
                    state.in_quotes = !state.in_quotes;
                }
                mark
            }
            EscapeCode::QuarterSpace => {
                out.extend(std::iter::repeat_n(' ', (selector / 4) as usize));
                return;
            }
            EscapeCode::GreekFontAnnounce
            | EscapeCode::LatinFontAnnounce
            | EscapeCode::MarkupOpen
            | EscapeCode::MarkupClose
            | EscapeCode::FormattingOpen
            | EscapeCode::FormattingClose => return,
        };

        match mapped {
            Some(ch) => out.push(ch),
            None => trace!(escape = ?token.escape, selector, "dropping unmapped selector"),
        }
    }
}
