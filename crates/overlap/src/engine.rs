use std::path::Path;

use joinprobe_io::{read_table, Table};

use crate::analyze::analyze_column;
use crate::config::{ProbeConfig, SourceConfig};
use crate::error::ProbeError;
use crate::model::{ColumnAnalysis, JoinCandidate, ProbeReport, ReportMeta, SourceSummary};
use crate::rank::rank_candidates;

/// Run a probe: load both sources from `base_dir`, analyze every candidate
/// column in order, and rank the informative ones.
///
/// Fails if the config is invalid, if either source cannot be read under any
/// encoding, or if a report file cannot be written. Missing columns are not
/// errors.
pub fn run(config: &ProbeConfig, base_dir: &Path) -> Result<ProbeReport, ProbeError> {
    config.validate()?;

    let left_path = config.left.resolve_path(base_dir);
    let right_path = config.right.resolve_path(base_dir);
    let left = read_table(&left_path)?;
    let right = read_table(&right_path)?;

    let report_dir = config.report_dir(base_dir);
    std::fs::create_dir_all(&report_dir).map_err(|e| ProbeError::Report {
        path: report_dir.clone(),
        message: e.to_string(),
    })?;

    let (columns, ranked) = probe_tables(&left, &right, config, &report_dir)?;

    Ok(ProbeReport {
        meta: ReportMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
            left: summarize(&config.left, &left_path, &left),
            right: summarize(&config.right, &right_path, &right),
        },
        columns,
        ranked,
    })
}

/// Analyze already-loaded tables. Returns every column's analysis in config
/// order, plus the ranked candidates.
pub fn probe_tables(
    left: &Table,
    right: &Table,
    config: &ProbeConfig,
    report_dir: &Path,
) -> Result<(Vec<ColumnAnalysis>, Vec<JoinCandidate>), ProbeError> {
    let mut columns = Vec::with_capacity(config.columns.len());
    for column in &config.columns {
        columns.push(analyze_column(left, right, column, config, report_dir)?);
    }

    let ranked = rank_candidates(columns.iter().map(|c| c.candidate.clone()));
    Ok((columns, ranked))
}

fn summarize(source: &SourceConfig, path: &Path, table: &Table) -> SourceSummary {
    SourceSummary {
        label: source.label.clone(),
        path: path.to_path_buf(),
        encoding: table.encoding().to_string(),
        rows: table.row_count(),
        skipped_rows: table.skipped_rows(),
    }
}
