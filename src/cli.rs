// =============================================================================
// Command line: argument parsing, logging setup and command dispatch
// =============================================================================

use crate::config::{Config, ConfigError};
use crate::console::Console;
use crate::demos;
use crate::registry::RegistryError;
use crate::report::RunReport;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "showcase")]
#[command(about = "Run small self-contained language feature demos", long_about = None)]
pub struct CliArgs {
    /// TOML settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the run report as JSON after the demos
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List demos in run order
    List,
    /// Run the named demos
    Run {
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },
    /// Run every demo (default)
    All,
}

impl CliArgs {
    /// No subcommand means `all`.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::All)
    }

    /// Flags win over the config file.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.no_color || std::env::var_os("NO_COLOR").is_some() {
            config.output.color = false;
        }
        if self.json {
            config.output.json = true;
        }
        config
    }
}

/// `RUST_LOG` overrides the configured filter. Logs go to stderr.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs one command. Returns the report when demos were run.
pub fn execute(
    command: &Command,
    config: &Config,
    console: &Console,
) -> Result<Option<RunReport>, CliError> {
    let registry = demos::catalog(console, &config.demos)?;

    let report = match command {
        Command::List => {
            console.block(|w| {
                for demo in registry.entries() {
                    writeln!(w, "{:<24} {}", demo.name(), demo.summary())?;
                }
                Ok(())
            })?;
            return Ok(None);
        }
        Command::Run { names } => registry.run_selected(names.as_slice())?,
        Command::All => registry.run_all(),
    };

    console.blank()?;
    report.render(console)?;
    if config.output.json {
        console.line(report.to_json()?)?;
    }
    Ok(Some(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("showcase").chain(args.iter().copied()))
    }

    fn run_command(names: &[&str]) -> Command {
        Command::Run {
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_defaults_to_all() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.command(), Command::All);
        assert!(!args.json);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_parse_flags_and_run() {
        let args = parse(&["--json", "--config", "demos.toml", "run", "variant", "threads"]).unwrap();
        assert!(args.json);
        assert_eq!(args.config, Some(PathBuf::from("demos.toml")));
        assert_eq!(args.command(), run_command(&["variant", "threads"]));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["run", "variant", "--no-color", "--json"]).unwrap();
        assert!(args.no_color);
        assert!(args.json);
        assert_eq!(args.command(), run_command(&["variant"]));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["run"]).is_err());
        assert!(parse(&["--config"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["list", "extra"]).is_err());
        assert!(parse(&["dance"]).is_err());
    }

    #[test]
    fn test_help_anywhere_prints_help() {
        for args in [
            &["--help"][..],
            &["list", "--help"][..],
            &["run", "variant", "--help"][..],
            &["help", "run"][..],
        ] {
            let err = parse(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "args: {args:?}");
            assert!(!err.use_stderr());
        }
    }

    #[test]
    fn test_usage_error_goes_to_stderr() {
        let err = parse(&["dance"]).unwrap_err();
        assert!(err.use_stderr());
        assert!(matches!(CliError::from(err), CliError::Usage(_)));
    }

    #[test]
    fn test_apply_overrides() {
        let args = parse(&["--json", "--no-color"]).unwrap();
        let config = args.apply(Config::default());
        assert!(config.output.json);
        assert!(!config.output.color);
    }

    #[test]
    fn test_execute_list() {
        let (console, buffer) = Console::capture();
        let report = execute(&Command::List, &Config::default(), &console).unwrap();
        assert!(report.is_none());
        let lines = buffer.lines();
        assert!(lines[0].starts_with("type-inference"));
        assert!(lines.iter().any(|l| l.starts_with("threads")));
    }

    #[test]
    fn test_execute_unknown_name() {
        let (console, _buffer) = Console::capture();
        let err = execute(&run_command(&["warp-drive"]), &Config::default(), &console).unwrap_err();
        assert!(matches!(err, CliError::Registry(RegistryError::NotFound(_))));
    }

    #[test]
    fn test_execute_run_with_json() {
        let (console, buffer) = Console::capture();
        let mut config = Config::default();
        config.output.json = true;
        let report = execute(&run_command(&["love"]), &config, &console)
            .unwrap()
            .unwrap();
        assert!(report.is_success());
        assert!(buffer.contents().contains("\"name\": \"love\""));
    }
}
