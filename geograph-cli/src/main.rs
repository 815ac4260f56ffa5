//! CLI entry point for the geograph tools.
//!
//! Parses arguments with clap, runs the selected command, renders its output
//! to stdout and maps failures to a non-zero exit code. Logging goes to
//! stderr so generated triples can be piped.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use geograph_cli::{
    cli::{Cli, CliError, render_output, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render its output, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let output = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_output(&output, &mut writer).context("failed to render output")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, generator_code) = err
            .downcast_ref::<CliError>()
            .map_or((None, None), |cli_error| {
                (cli_error.code(), cli_error.generator_code())
            });
        let message = format!("{err:#}");

        error!(
            error = %message,
            code = code.map(field::display),
            generator_code = generator_code.map(field::display),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
