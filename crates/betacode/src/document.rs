//! Whole-text and streaming conversion.

use std::io::{BufRead, Write};

use betacode_core::{BetaConverter, ConvertOptions, Flavor, UnicodeNorm};
use betacode_reader::{BetaReader, split_lines};

use crate::error::Error;

/// Convert a single line with the given options, normalization included.
///
/// ```
/// use betacode::{ConvertOptions, convert};
///
/// let options = ConvertOptions::default();
/// assert_eq!(convert("*)AXILLEU/S", &options), "\u{1F08}χιλλε\u{03CD}ς");
/// ```
pub fn convert(line: &str, options: &ConvertOptions) -> String {
    let converter = BetaConverter::from_options(options);
    options.unicode_norm.apply(converter.convert(line))
}

/// Convert a multi-line text.
///
/// The text is split after `\r`, `\r\n` or `\n` and each line is converted
/// on its own, so quotation state and script mode reset at every line
/// break. Terminators are kept.
pub fn convert_document(text: &str, options: &ConvertOptions) -> String {
    let converter = BetaConverter::from_options(options);
    let mut out = String::with_capacity(text.len() * 2);
    for line in split_lines(text) {
        convert_line_into(&converter, options, line, &mut out);
    }
    out
}

/// Like [`convert_document`], converting lines on the rayon thread pool.
///
/// Produces exactly the same output as [`convert_document`].
#[cfg(feature = "parallel")]
pub fn convert_document_parallel(text: &str, options: &ConvertOptions) -> String {
    use rayon::prelude::*;

    let converter = BetaConverter::from_options(options);
    let lines: Vec<&str> = split_lines(text).collect();
    lines
        .par_iter()
        .map(|line| {
            let mut out = String::with_capacity(line.len() * 2);
            convert_line_into(&converter, options, line, &mut out);
            out
        })
        .collect::<Vec<String>>()
        .concat()
}

/// Stream Beta Code from `reader` to `writer` line by line.
///
/// Input bytes are taken one-to-one as ISO-8859-1 characters; output is
/// UTF-8. Returns the number of raw lines read.
///
/// # Errors
///
/// Returns [`Error::Reader`] if reading fails and [`Error::Write`] if
/// writing fails.
pub fn convert_stream<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    options: &ConvertOptions,
) -> Result<u64, Error> {
    let mut beta = open_reader(reader, options);
    while let Some(line) = beta.read_line()? {
        let line = options.unicode_norm.apply(line);
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;
    let lines = beta.lines_read();
    beta.close();
    Ok(lines)
}

/// A character reader over `source` using the flavor and line break from
/// `options`.
///
/// Characters are served as converted; `options.unicode_norm` is not
/// applied, since normalization needs whole lines.
pub fn open_reader<R: BufRead>(source: R, options: &ConvertOptions) -> BetaReader<R, Flavor> {
    BetaReader::new(source, BetaConverter::from_options(options))
}

fn convert_line_into(
    converter: &BetaConverter<Flavor>,
    options: &ConvertOptions,
    line: &str,
    out: &mut String,
) {
    if options.unicode_norm == UnicodeNorm::None {
        converter.convert_into(line, out);
    } else {
        out.push_str(&options.unicode_norm.apply(converter.convert(line)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use betacode_core::LineBreak;
    use std::io::Cursor;

    #[test]
    fn convert_applies_normalization() {
        let options = ConvertOptions::default()
            .with_flavor(Flavor::Composing)
            .with_unicode_norm(UnicodeNorm::Nfc);
        assert_eq!(convert("A)/", &options), "\u{1F04}");
    }

    #[test]
    fn convert_decomposed_preset() {
        assert_eq!(
            convert("W(=|", &ConvertOptions::decomposed()),
            "ω\u{0314}\u{0342}\u{0345}"
        );
    }

    #[test]
    fn document_keeps_terminators() {
        let options = ConvertOptions::default();
        assert_eq!(
            convert_document("LOGOS\r\nKAI\nQEOS", &options),
            "λογος\r\nκαι\nθεος"
        );
    }

    #[test]
    fn document_resets_quotes_per_line() {
        let options = ConvertOptions::default();
        assert_eq!(convert_document("\"A\n\"B", &options), "“α\n“β");
    }

    #[test]
    fn document_empty() {
        assert_eq!(convert_document("", &ConvertOptions::default()), "");
    }

    #[test]
    fn stream_converts_and_counts_lines() {
        let mut out = Vec::new();
        let options = ConvertOptions::default().with_line_break(LineBreak::Lf);
        let source = Cursor::new(b"A)\r\nB@6G\xe9".to_vec());
        let lines = convert_stream(source, &mut out, &options).unwrap();
        assert_eq!(lines, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "\u{1F00}\r\nβ\n\nγ");
    }

    #[test]
    fn reader_serves_characters() {
        let mut reader = open_reader(Cursor::new(b"*A".to_vec()), &ConvertOptions::default());
        assert_eq!(reader.read_next().unwrap(), Some('Α'));
        assert_eq!(reader.read_next().unwrap(), None);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let text = "*MH=NIN A)/EIDE QEA\\\r\n\"A\"\r\nLOGOS\n";
        let options = ConvertOptions::default();
        assert_eq!(
            convert_document_parallel(text, &options),
            convert_document(text, &options)
        );
    }
}
