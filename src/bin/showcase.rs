use clap::Parser;
use colored::Colorize;
use feature_showcase::cli::{self, CliArgs, CliError};
use feature_showcase::{Config, Console};
use std::process::ExitCode;
use tracing::info;

fn run() -> Result<(), CliError> {
    let args = CliArgs::try_parse()?;
    let config = args.apply(Config::load_or_default(args.config.as_deref())?);

    cli::init_logging(&config.log.filter);
    if !config.output.color {
        colored::control::set_override(false);
    }

    let console = Console::stdout(config.output.color);
    if let Some(report) = cli::execute(&args.command(), &config, &console)? {
        info!(
            total = report.len(),
            failed = report.failed().count(),
            "run finished"
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        // Help and version requests arrive as clap errors that print to stdout.
        Err(CliError::Usage(err)) => {
            let _ = err.print();
            if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
