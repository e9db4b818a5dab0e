use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use betacode::{ConvertOptions, Flavor, LineBreak, UnicodeNorm};

/// Convert Beta Code encoded ancient Greek to Unicode.
#[derive(Debug, Parser)]
#[command(name = "betacode", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a Beta Code file line by line
    Convert {
        /// Path to the Beta Code file, or '-' for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write output to this file instead of stdout
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Convert Beta Code given as arguments, one output line each
    Line {
        /// Beta Code text
        #[arg(value_name = "BETA", required = true)]
        beta: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[command(flatten)]
        style: StyleArgs,
    },
}

/// Options shared by every subcommand that converts text.
#[derive(Debug, Clone, Args)]
pub struct StyleArgs {
    /// How accented letters are encoded
    #[arg(long, value_enum, default_value_t = FlavorArg::Precombined)]
    pub flavor: FlavorArg,

    /// Apply Unicode normalization to converted text
    #[arg(long, value_enum)]
    pub unicode_norm: Option<UnicodeNormArg>,

    /// Line break written for '@6' and non-ASCII runs
    #[arg(long, value_enum, default_value_t = LineBreakArg::Crlf)]
    pub line_break: LineBreakArg,
}

impl StyleArgs {
    pub fn to_options(&self) -> ConvertOptions {
        ConvertOptions::default()
            .with_flavor(self.flavor.to_flavor())
            .with_line_break(self.line_break.to_line_break())
            .with_unicode_norm(
                self.unicode_norm
                    .as_ref()
                    .map_or(UnicodeNorm::None, UnicodeNormArg::to_unicode_norm),
            )
    }
}

/// Output format for converted text.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Converted text as is
    Text,
    /// One JSON object per line: {"line": n, "text": "..."}
    Json,
}

/// Composition strategy for CLI arguments.
#[derive(Debug, Clone, ValueEnum)]
pub enum FlavorArg {
    /// Base letter followed by combining marks
    Composing,
    /// Single precomposed characters where Unicode has them
    Precombined,
}

impl FlavorArg {
    pub fn to_flavor(&self) -> Flavor {
        match self {
            FlavorArg::Composing => Flavor::Composing,
            FlavorArg::Precombined => Flavor::Precombined,
        }
    }
}

/// Line break style for CLI arguments.
#[derive(Debug, Clone, ValueEnum)]
pub enum LineBreakArg {
    /// Carriage return and line feed
    Crlf,
    /// Line feed only
    Lf,
}

impl LineBreakArg {
    pub fn to_line_break(&self) -> LineBreak {
        match self {
            LineBreakArg::Crlf => LineBreak::CrLf,
            LineBreakArg::Lf => LineBreak::Lf,
        }
    }
}

/// Unicode normalization form for CLI arguments.
#[derive(Debug, Clone, ValueEnum)]
pub enum UnicodeNormArg {
    /// Canonical Decomposition, followed by Canonical Composition
    Nfc,
    /// Canonical Decomposition
    Nfd,
    /// Compatibility Decomposition, followed by Canonical Composition
    Nfkc,
    /// Compatibility Decomposition
    Nfkd,
}

impl UnicodeNormArg {
    /// Convert to the library's `UnicodeNorm` enum.
    pub fn to_unicode_norm(&self) -> UnicodeNorm {
        match self {
            UnicodeNormArg::Nfc => UnicodeNorm::Nfc,
            UnicodeNormArg::Nfd => UnicodeNorm::Nfd,
            UnicodeNormArg::Nfkc => UnicodeNorm::Nfkc,
            UnicodeNormArg::Nfkd => UnicodeNorm::Nfkd,
        }
    }
}
