use std::path::PathBuf;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Per-column results
// ---------------------------------------------------------------------------

/// Distinct-value counts and overlap score for one logical column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinCandidate {
    pub column: String,
    pub distinct_left: usize,
    pub distinct_right: usize,
    pub distinct_union: usize,
    pub score: f64,
}

impl JoinCandidate {
    /// The all-zero result of a column that could not be analyzed.
    pub fn empty(column: &str) -> Self {
        Self {
            column: column.to_string(),
            distinct_left: 0,
            distinct_right: 0,
            distinct_union: 0,
            score: 0.0,
        }
    }

    /// A column with at most one distinct value on either side cannot align rows.
    pub fn is_informative(&self) -> bool {
        self.distinct_left > 1 && self.distinct_right > 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnStatus {
    Analyzed,
    /// The column was missing from one or both tables.
    Skipped,
}

impl std::fmt::Display for ColumnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analyzed => write!(f, "analyzed"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnAnalysis {
    pub status: ColumnStatus,
    /// Header looked up in the left table.
    pub left_column: String,
    /// Header looked up in the right table.
    pub right_column: String,
    #[serde(flatten)]
    pub candidate: JoinCandidate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub label: String,
    pub path: PathBuf,
    pub encoding: String,
    pub rows: usize,
    pub skipped_rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub engine_version: String,
    pub run_at: String,
    pub left: SourceSummary,
    pub right: SourceSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub meta: ReportMeta,
    /// Every candidate column, in configured order.
    pub columns: Vec<ColumnAnalysis>,
    /// Informative columns, best score first.
    pub ranked: Vec<JoinCandidate>,
}

impl ProbeReport {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
