use clap::Parser;
use std::process::ExitCode;
use venvman::cli::Cli;
use venvman::{commands, ui};

fn main() -> ExitCode {
    // Parse CLI arguments; usage errors exit 1, --help/--version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize tracing
    let default_filter = if cli.verbose {
        "venvman=debug"
    } else {
        "venvman=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match commands::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error_chain(&err);
            ExitCode::FAILURE
        }
    }
}
