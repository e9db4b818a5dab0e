//! Pull-style character reader over a Beta Code byte stream.

use std::io::BufRead;

use betacode_core::{BetaConverter, Compose};
use tracing::debug;

use crate::error::{ReaderError, Result};
use crate::lines::{decode_latin1, read_raw_line};

/// Reads raw lines from `R`, converts them and serves the Unicode result one
/// character at a time.
///
/// Each raw line, terminator included, is converted independently, so
/// script mode and quotation state start fresh on every line. Lines that
/// convert to nothing are skipped transparently.
///
/// The reader buffers one converted line and is not meant to be shared
/// between consumers.
pub struct BetaReader<R, C> {
    source: Option<R>,
    converter: BetaConverter<C>,
    raw: Vec<u8>,
    line: String,
    cursor: usize,
    lines_read: u64,
    exhausted: bool,
}

impl<R: BufRead, C: Compose> BetaReader<R, C> {
    pub fn new(source: R, converter: BetaConverter<C>) -> Self {
        Self {
            source: Some(source),
            converter,
            raw: Vec::new(),
            line: String::new(),
            cursor: 0,
            lines_read: 0,
            exhausted: false,
        }
    }

    /// The next character without consuming it, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// [`ReaderError::Closed`] after [`close`](Self::close), or
    /// [`ReaderError::Io`] if the source fails.
    pub fn peek_next(&mut self) -> Result<Option<char>> {
        self.ensure_open()?;
        if !self.fill()? {
            return Ok(None);
        }
        Ok(self.line[self.cursor..].chars().next())
    }

    /// Consume and return the next character, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Same as [`peek_next`](Self::peek_next).
    pub fn read_next(&mut self) -> Result<Option<char>> {
        let next = self.peek_next()?;
        if let Some(c) = next {
            self.cursor += c.len_utf8();
        }
        Ok(next)
    }

    /// The unread remainder of the current converted line, or the next one.
    ///
    /// # Errors
    ///
    /// Same as [`peek_next`](Self::peek_next).
    pub fn read_line(&mut self) -> Result<Option<String>> {
        self.ensure_open()?;
        if !self.fill()? {
            return Ok(None);
        }
        let rest = self.line[self.cursor..].to_string();
        self.cursor = self.line.len();
        Ok(Some(rest))
    }

    /// Whether the source is exhausted and every converted character has
    /// been served. Only becomes true after a read has hit the end.
    pub fn is_eof(&self) -> bool {
        self.exhausted && self.cursor >= self.line.len()
    }

    /// Release the source. Every later read fails with [`ReaderError::Closed`].
    pub fn close(&mut self) {
        if self.source.take().is_some() {
            debug!(lines = self.lines_read, "closing reader");
        }
        self.line.clear();
        self.raw.clear();
        self.cursor = 0;
    }

    pub fn is_closed(&self) -> bool {
        self.source.is_none()
    }

    /// Number of raw lines pulled from the source so far.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    pub fn converter(&self) -> &BetaConverter<C> {
        &self.converter
    }

    /// Give back the source, or `None` if the reader was closed.
    pub fn into_inner(self) -> Option<R> {
        self.source
    }

    fn ensure_open(&self) -> Result<()> {
        if self.source.is_none() {
            return Err(ReaderError::Closed);
        }
        Ok(())
    }

    /// Make sure unread converted text is buffered. Returns `false` at end of
    /// stream.
    fn fill(&mut self) -> Result<bool> {
        while self.cursor >= self.line.len() {
            if !self.feed_line()? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn feed_line(&mut self) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        let source = self.source.as_mut().ok_or(ReaderError::Closed)?;
        self.raw.clear();
        let read = read_raw_line(source, &mut self.raw)?;
        if read == 0 {
            self.exhausted = true;
            return Ok(false);
        }
        self.lines_read += 1;
        self.line.clear();
        self.cursor = 0;
        let text = decode_latin1(&self.raw);
        self.converter.convert_into(&text, &mut self.line);
        debug!(
            line = self.lines_read,
            raw_len = read,
            converted_len = self.line.len(),
            "converted line"
        );
        Ok(true)
    }
}

impl<R: BufRead, C: Compose> Iterator for BetaReader<R, C> {
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}

impl<R, C: std::fmt::Debug> std::fmt::Debug for BetaReader<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BetaReader")
            .field("converter", &self.converter)
            .field("closed", &self.source.is_none())
            .field("lines_read", &self.lines_read)
            .field("buffered", &self.line.len().saturating_sub(self.cursor))
            .finish()
    }
}
