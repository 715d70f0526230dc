//! `joinprobe` run: load both sources, score candidate columns, print the ranking.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use joinprobe_io::ReadError;
use joinprobe_overlap::{ProbeConfig, ProbeError, ProbeReport};

use crate::exit_codes::{EXIT_INPUT, EXIT_INVALID_CONFIG, EXIT_RUNTIME, EXIT_USAGE};
use crate::CliError;

/// Resolved command-line arguments.
#[derive(Debug)]
pub struct ProbeArgs {
    pub dir: PathBuf,
    pub config: Option<PathBuf>,
    pub left: Option<PathBuf>,
    pub right: Option<PathBuf>,
    pub json: bool,
    pub output: Option<PathBuf>,
}

pub fn cmd_probe(args: ProbeArgs) -> Result<(), CliError> {
    if !args.dir.is_dir() {
        return Err(probe_err(
            EXIT_USAGE,
            format!("not a directory: {}", args.dir.display()),
        ));
    }

    let mut config = load_config(args.config.as_deref())?;
    if let Some(left) = args.left {
        config.left.file = left;
    }
    if let Some(right) = args.right {
        config.right.file = right;
    }
    config
        .validate()
        .map_err(|e| probe_err(EXIT_INVALID_CONFIG, e.to_string()))?;
    log::debug!(
        "probing {} against {} in {} ({} candidate columns)",
        config.left.file.display(),
        config.right.file.display(),
        args.dir.display(),
        config.columns.len()
    );

    let report = joinprobe_overlap::run(&config, &args.dir).map_err(from_probe_error)?;

    if args.json || args.output.is_some() {
        let json_str = report
            .to_json_pretty()
            .map_err(|e| probe_err(EXIT_RUNTIME, format!("JSON serialization error: {e}")))?;

        if let Some(ref path) = args.output {
            std::fs::write(path, &json_str).map_err(|e| {
                probe_err(EXIT_RUNTIME, format!("cannot write output: {e}"))
            })?;
            eprintln!("wrote {}", path.display());
        }

        if args.json {
            println!("{json_str}");
        }
    }

    // JSON owns stdout when requested; the human summary moves to stderr
    let written = if args.json {
        print_summary(&mut io::stderr().lock(), &report)
    } else {
        print_summary(&mut io::stdout().lock(), &report)
    };
    written.map_err(|e| probe_err(EXIT_RUNTIME, format!("cannot print summary: {e}")))
}

fn load_config(path: Option<&Path>) -> Result<ProbeConfig, CliError> {
    let Some(path) = path else {
        return Ok(ProbeConfig::default());
    };
    let config_str = std::fs::read_to_string(path).map_err(|e| {
        probe_err(
            EXIT_INVALID_CONFIG,
            format!("cannot read config {}: {e}", path.display()),
        )
    })?;
    ProbeConfig::from_toml(&config_str).map_err(|e| probe_err(EXIT_INVALID_CONFIG, e.to_string()))
}

fn probe_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError { code, message: msg.into(), hint: None }
}

fn from_probe_error(err: ProbeError) -> CliError {
    let code = match &err {
        ProbeError::ConfigParse(_) | ProbeError::ConfigValidation(_) => EXIT_INVALID_CONFIG,
        ProbeError::Read(_) => EXIT_INPUT,
        ProbeError::Report { .. } => EXIT_RUNTIME,
    };
    let cli_err = probe_err(code, err.to_string());
    match err {
        ProbeError::Read(ReadError::EncodingExhausted { .. }) => {
            cli_err.with_hint("expected comma-separated text with a header row")
        }
        ProbeError::Read(ReadError::Io { .. }) => {
            cli_err.with_hint("use --dir, --left or --right to point at the input files")
        }
        _ => cli_err,
    }
}

/// Ranked candidates, then row counts of both sources.
pub fn print_summary<W: Write>(out: &mut W, report: &ProbeReport) -> io::Result<()> {
    let left = &report.meta.left;
    let right = &report.meta.right;

    writeln!(out, "Potential join columns ranked by M-to-N score:")?;
    if report.ranked.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for c in &report.ranked {
        writeln!(
            out,
            "{}: {} unique: {}, {} unique: {}, Total unique: {}, M-to-N score: {:.4}",
            c.column,
            left.label,
            c.distinct_left,
            right.label,
            c.distinct_right,
            c.distinct_union,
            c.score,
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Number of rows in {} dataset: {}", left.label, left.rows)?;
    writeln!(out, "Number of rows in {} dataset: {}", right.label, right.rows)?;
    Ok(())
}
