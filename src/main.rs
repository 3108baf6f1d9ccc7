use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use md2html::convert_file;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    version,
    about = "Convert a Markdown file into an HTML fragment",
    override_usage = "md2html README.md README.html"
)]
struct Cli {
    /// Markdown file to read
    input: PathBuf,
    /// HTML file to write
    output: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Entry point for the command-line converter.
///
/// Both the input and output paths are required. Usage errors and missing
/// input files are reported on standard error with exit status 1; the output
/// file is only written when the conversion succeeds.
///
/// # Examples
///
/// ```sh
/// md2html README.md README.html
/// ```
fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            err.print()?;
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => err.exit(),
    };
    init_tracing();

    convert_file(&cli.input, &cli.output)?;
    Ok(ExitCode::SUCCESS)
}
