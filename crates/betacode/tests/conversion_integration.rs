//! Integration tests for the facade entry points.
//!
//! Fixtures are the opening lines of the Iliad in TLG-style Beta Code.

use std::io::Cursor;

use betacode::{
    ConvertOptions, Error, Flavor, LineBreak, ReaderError, UnicodeNorm, convert,
    convert_document, convert_stream, open_reader,
};

const ILIAD_1: &str = "*MH=NIN A)/EIDE QEA\\ *PHLHI+A/DEW *)AXILH=OS";
const ILIAD_2: &str = "OU)LOME/NHN, H(\\ MURI/' *)AXAIOI=S A)/LGE' E)/QHKE,";

const ILIAD_1_UNICODE: &str =
    "Μ\u{1FC6}νιν \u{1F04}ειδε θε\u{1F70} Πηλη\u{03CA}\u{03AC}δεω \u{1F08}χιλ\u{1FC6}ος";
const ILIAD_2_UNICODE: &str = "ο\u{1F50}λομ\u{03AD}νην, \u{1F23} μυρ\u{03AF}\u{1FBF} \
     \u{1F08}χαιο\u{1FD6}ς \u{1F04}λγε\u{1FBF} \u{1F14}θηκε,";

fn precombined() -> ConvertOptions {
    ConvertOptions::default()
}

fn composing() -> ConvertOptions {
    ConvertOptions::default().with_flavor(Flavor::Composing)
}

#[test]
fn iliad_lines_precombined() {
    assert_eq!(convert(ILIAD_1, &precombined()), ILIAD_1_UNICODE);
    assert_eq!(convert(ILIAD_2, &precombined()), ILIAD_2_UNICODE);
}

#[test]
fn iliad_lines_composing_normalize_to_precombined() {
    let nfc = composing().with_unicode_norm(UnicodeNorm::Nfc);
    assert_eq!(convert(ILIAD_1, &nfc), ILIAD_1_UNICODE);
    assert_eq!(convert(ILIAD_2, &nfc), ILIAD_2_UNICODE);
}

#[test]
fn precombined_output_is_already_nfc() {
    let nfc = precombined().with_unicode_norm(UnicodeNorm::Nfc);
    for line in [ILIAD_1, ILIAD_2] {
        assert_eq!(convert(line, &nfc), convert(line, &precombined()));
    }
}

#[test]
fn flavors_agree_after_nfd() {
    let nfd = UnicodeNorm::Nfd;
    for line in [ILIAD_1, ILIAD_2] {
        let a = convert(line, &precombined().with_unicode_norm(nfd));
        let b = convert(line, &composing().with_unicode_norm(nfd));
        assert_eq!(a, b, "{line}");
    }
}

#[test]
fn decomposed_preset_is_nfd() {
    let text = convert(ILIAD_1, &ConvertOptions::decomposed());
    assert!(unicode_normalization::is_nfd(&text), "{text:?}");
    assert!(text.contains("α\u{0313}\u{0301}"));
}

#[test]
fn document_with_mixed_terminators() {
    let text = format!("{ILIAD_1}\r\n{ILIAD_2}\n");
    let expected = format!("{ILIAD_1_UNICODE}\r\n{ILIAD_2_UNICODE}\n");
    assert_eq!(convert_document(&text, &precombined()), expected);
}

#[test]
fn document_with_page_format_and_lf() {
    let options = precombined().with_line_break(LineBreak::Lf);
    assert_eq!(convert_document("@6*A@0B", &options), "\nΑ\tβ");
}

#[test]
fn document_with_quotes_and_brackets() {
    let text = "\"3*(OMHROS\"3 [1A)/EIDE]1";
    assert_eq!(
        convert_document(text, &precombined()),
        "‘\u{1F49}μηρος’ (\u{1F04}ειδε)"
    );
}

#[test]
fn stream_matches_document() {
    let text = format!("{ILIAD_1}\r\n{ILIAD_2}\r\n");
    let mut out = Vec::new();
    let source = Cursor::new(text.clone().into_bytes());
    let lines = convert_stream(source, &mut out, &precombined()).unwrap();
    assert_eq!(lines, 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        convert_document(&text, &precombined())
    );
}

#[test]
fn stream_replaces_latin1_bytes() {
    let mut out = Vec::new();
    let input = b"KAI\xa7\xa7 A\r\n".to_vec();
    convert_stream(Cursor::new(input), &mut out, &precombined()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "κα\r\nι α\r\n");
}

#[test]
fn stream_applies_normalization() {
    let mut out = Vec::new();
    let options = precombined().with_unicode_norm(UnicodeNorm::Nfd);
    convert_stream(Cursor::new(b"A)".to_vec()), &mut out, &options).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "α\u{0313}");
}

struct FullWriter;

impl std::io::Write for FullWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::StorageFull, "disk full"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn stream_reports_write_errors() {
    let err = convert_stream(Cursor::new(b"A".to_vec()), FullWriter, &precombined()).unwrap_err();
    assert!(matches!(err, Error::Write(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn reader_pull_api() {
    let mut reader = open_reader(Cursor::new(ILIAD_1.as_bytes().to_vec()), &precombined());
    assert_eq!(reader.peek_next().unwrap(), Some('Μ'));
    let text: String = reader.by_ref().collect::<Result<String, _>>().unwrap();
    assert_eq!(text, ILIAD_1_UNICODE);
    assert!(reader.is_eof());
    reader.close();
    assert!(matches!(reader.read_next(), Err(ReaderError::Closed)));
}

#[cfg(feature = "serde")]
#[test]
fn options_from_json() {
    let options: ConvertOptions =
        serde_json::from_str(r#"{"flavor":"composing","unicode_norm":"nfc"}"#).unwrap();
    assert_eq!(convert(ILIAD_1, &options), ILIAD_1_UNICODE);
}
