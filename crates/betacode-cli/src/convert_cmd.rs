use std::io::Write;
use std::path::Path;

use betacode::{ConvertOptions, convert_stream, open_reader};

use crate::cli::OutputFormat;
use crate::shared::{json_record, open_input, open_output, strip_terminator};

pub fn run(
    file: &Path,
    output: Option<&Path>,
    format: &OutputFormat,
    options: &ConvertOptions,
) -> Result<(), i32> {
    let input = open_input(file)?;
    let mut out = open_output(output)?;

    match format {
        OutputFormat::Text => {
            convert_stream(input, &mut out, options).map_err(|e| {
                eprintln!("Error: {e}");
                1
            })?;
        }
        OutputFormat::Json => write_json(input, &mut out, options).map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?,
    }
    Ok(())
}

fn write_json(
    input: Box<dyn std::io::BufRead>,
    out: &mut dyn Write,
    options: &ConvertOptions,
) -> Result<(), betacode::Error> {
    let mut reader = open_reader(input, options);
    while let Some(line) = reader.read_line()? {
        let text = options.unicode_norm.apply(line);
        writeln!(out, "{}", json_record(reader.lines_read(), strip_terminator(&text)))?;
    }
    out.flush()?;
    Ok(())
}
