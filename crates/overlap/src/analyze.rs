use std::path::Path;

use joinprobe_io::{write_counts, CountRow, Table};

use crate::config::{capitalize, ProbeConfig};
use crate::error::ProbeError;
use crate::model::{ColumnAnalysis, ColumnStatus, JoinCandidate};
use crate::score::overlap_score;
use crate::tally::tally_column;

/// Compare one logical column across both tables.
///
/// The column is looked up in each table under that source's naming convention.
/// If either side lacks it, nothing is written and the result is all zeros.
/// Otherwise `<column>_counts.csv` is written to `report_dir` with one row per
/// value in the union of both tallies.
pub fn analyze_column(
    left: &Table,
    right: &Table,
    column: &str,
    config: &ProbeConfig,
    report_dir: &Path,
) -> Result<ColumnAnalysis, ProbeError> {
    log::info!("analyzing column: {column}");

    let left_column = config.left.column_name(column);
    let right_column = config.right.column_name(column);

    let tallies = tally_column(left, &left_column, &config.tally)
        .zip(tally_column(right, &right_column, &config.tally));
    let Some((left_tally, right_tally)) = tallies else {
        log::warn!("column {column} not found in one or both datasets, skipping");
        return Ok(ColumnAnalysis {
            status: ColumnStatus::Skipped,
            left_column,
            right_column,
            candidate: JoinCandidate::empty(column),
            report: None,
        });
    };

    let union = left_tally.union(&right_tally);

    let report_path = report_dir.join(format!("{column}_counts.csv"));
    let header = capitalize(column);
    let left_header = config.left.count_header();
    let right_header = config.right.count_header();
    let rows = union.iter().map(|&value| CountRow {
        value,
        left: left_tally.count(value),
        right: right_tally.count(value),
    });
    write_counts(
        &report_path,
        [header.as_str(), left_header.as_str(), right_header.as_str()],
        rows,
    )?;
    log::info!("counts for {column} written to '{}'", report_path.display());

    let distinct_left = left_tally.distinct();
    let distinct_right = right_tally.distinct();
    let distinct_union = union.len();
    let score = overlap_score(distinct_left, distinct_right, distinct_union);

    log::info!("unique {column} values in {}: {distinct_left}", config.left.label);
    log::info!("unique {column} values in {}: {distinct_right}", config.right.label);
    log::info!("unique {column} values across both: {distinct_union}");
    log::info!("M-to-N score for {column}: {score:.4}");

    Ok(ColumnAnalysis {
        status: ColumnStatus::Analyzed,
        left_column,
        right_column,
        candidate: JoinCandidate {
            column: column.to_string(),
            distinct_left,
            distinct_right,
            distinct_union,
            score,
        },
        report: Some(report_path),
    })
}
