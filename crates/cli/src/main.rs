// joinprobe CLI - rank the columns two tabular sources could be joined on

mod exit_codes;
mod probe;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use exit_codes::{EXIT_SUCCESS, EXIT_USAGE};
use probe::ProbeArgs;

#[derive(Parser)]
#[command(name = "joinprobe")]
#[command(about = "Score how well candidate columns of two CSV files overlap, to pick a join key")]
#[command(long_version = long_version())]
#[command(version)]
#[command(after_help = "\
Examples:
  joinprobe                              # imdb.csv + omdb.csv in the current directory
  joinprobe --dir data/
  joinprobe --left catalog.csv --right feed.csv
  joinprobe --config probe.toml --json
  RUST_LOG=debug joinprobe               # show encoding detection and dropped rows")]
struct Cli {
    /// Directory holding the input files; counts files are written here too
    #[arg(long, short = 'd', env = "JOINPROBE_DIR")]
    dir: Option<PathBuf>,

    /// TOML file overriding sources, candidate columns and tally options
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Left source file, relative to --dir (default: imdb.csv)
    #[arg(long)]
    left: Option<PathBuf>,

    /// Right source file, relative to --dir (default: omdb.csv)
    #[arg(long)]
    right: Option<PathBuf>,

    /// Print the JSON report to stdout; the human summary goes to stderr
    #[arg(long)]
    json: bool,

    /// Also write the JSON report to a file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("GIT_COMMIT_HASH"), ")",
        "\ntarget:  ", env!("TARGET"),
    )
}

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let cli = Cli::parse();

    let result = resolve_dir(cli.dir).and_then(|dir| {
        probe::cmd_probe(ProbeArgs {
            dir,
            config: cli.config,
            left: cli.left,
            right: cli.right,
            json: cli.json,
            output: cli.output,
        })
    });

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

/// The working directory is only consulted here, when `--dir` is absent.
fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().map_err(|e| CliError {
            code: EXIT_USAGE,
            message: format!("cannot determine current directory: {e}"),
            hint: Some("pass --dir explicitly".to_string()),
        }),
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
