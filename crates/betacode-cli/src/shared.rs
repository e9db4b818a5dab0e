use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Open the input file, or stdin for `-`, with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is missing
/// or cannot be opened.
pub fn open_input(file: &Path) -> Result<Box<dyn BufRead>, i32> {
    if file == Path::new("-") {
        return Ok(Box::new(io::stdin().lock()));
    }
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }
    File::open(file)
        .map(|f| Box::new(BufReader::new(f)) as Box<dyn BufRead>)
        .map_err(|e| {
            eprintln!("Error: failed to open {}: {e}", file.display());
            1
        })
}

/// Create the output file, or use stdout when no path is given.
pub fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>, i32> {
    match output {
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        Some(path) => File::create(path)
            .map(|f| Box::new(BufWriter::new(f)) as Box<dyn Write>)
            .map_err(|e| {
                eprintln!("Error: failed to create {}: {e}", path.display());
                1
            }),
    }
}

/// Strip a trailing line terminator (`\r\n`, `\r` or `\n`).
pub fn strip_terminator(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .or_else(|| text.strip_suffix('\r'))
        .unwrap_or(text)
}

/// One JSON output record.
pub fn json_record(line: u64, text: &str) -> String {
    serde_json::json!({
        "line": line,
        "text": text,
    })
    .to_string()
}
