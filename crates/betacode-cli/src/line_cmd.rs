use std::io::{self, Write};

use betacode::{ConvertOptions, convert};

use crate::cli::OutputFormat;
use crate::shared::json_record;

pub fn run(beta: &[String], format: &OutputFormat, options: &ConvertOptions) -> Result<(), i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (i, line) in beta.iter().enumerate() {
        let text = convert(line, options);
        let written = match format {
            OutputFormat::Text => writeln!(out, "{text}"),
            OutputFormat::Json => writeln!(out, "{}", json_record(i as u64 + 1, &text)),
        };
        written.map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?;
    }
    Ok(())
}
