//! Raw line splitting.
//!
//! A line ends after `\r` (together with an immediately following `\n`) or
//! after a bare `\n`. Terminators stay attached to the line they end; the
//! converter passes them through unchanged.

use std::borrow::Cow;
use std::io::{self, BufRead};

/// Append the next raw line from `source` to `buf`, terminator included.
///
/// Returns the number of bytes read; `0` means the source is exhausted.
///
/// # Errors
///
/// Propagates any I/O error other than [`io::ErrorKind::Interrupted`].
pub fn read_raw_line<R: BufRead + ?Sized>(
    source: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<usize> {
    let mut read = 0;
    let mut after_cr = false;
    loop {
        let (done, used) = {
            let available = match source.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(read);
            }
            if after_cr {
                if available[0] == b'\n' {
                    buf.push(b'\n');
                    (true, 1)
                } else {
                    (true, 0)
                }
            } else {
                match available.iter().position(|&b| b == b'\r' || b == b'\n') {
                    Some(i) => {
                        buf.extend_from_slice(&available[..=i]);
                        after_cr = available[i] == b'\r';
                        (!after_cr, i + 1)
                    }
                    None => {
                        buf.extend_from_slice(available);
                        (false, available.len())
                    }
                }
            }
        };
        source.consume(used);
        read += used;
        if done {
            return Ok(read);
        }
    }
}

/// Map bytes one-to-one onto the first 256 code points (ISO-8859-1).
///
/// Bytes >= 0x80 become non-ASCII characters, which the converter replaces
/// with a line break. All-ASCII input is borrowed.
pub fn decode_latin1(bytes: &[u8]) -> Cow<'_, str> {
    encoding_rs::mem::decode_latin1(bytes)
}

/// Iterator over the raw lines of a string. See [`split_lines`].
#[derive(Debug, Clone)]
pub struct RawLines<'a> {
    rest: &'a str,
}

/// Split `text` with the same terminator rules as [`read_raw_line`].
pub fn split_lines(text: &str) -> RawLines<'_> {
    RawLines { rest: text }
}

impl<'a> Iterator for RawLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        let end = match bytes.iter().position(|&b| b == b'\r' || b == b'\n') {
            Some(i) if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') => i + 2,
            Some(i) => i + 1,
            None => bytes.len(),
        };
        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}
