mod cli;
mod convert_cmd;
mod line_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Convert {
            ref file,
            ref output,
            ref format,
            ref style,
        } => convert_cmd::run(file, output.as_deref(), format, &style.to_options()),
        cli::Commands::Line {
            ref beta,
            ref format,
            ref style,
        } => line_cmd::run(beta, format, &style.to_options()),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
