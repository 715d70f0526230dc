use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ProbeError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Everything one probe run needs besides the base directory.
///
/// `Default` is the IMDB/OMDB setup: `imdb.csv` with column names used as-is,
/// `omdb.csv` with capitalized column names, six candidate columns.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    #[serde(default = "default_left", deserialize_with = "deserialize_left")]
    pub left: SourceConfig,
    #[serde(default = "default_right", deserialize_with = "deserialize_right")]
    pub right: SourceConfig,
    #[serde(default = "default_columns")]
    pub columns: Vec<String>,
    #[serde(default)]
    pub tally: TallyConfig,
    /// Where `<column>_counts.csv` files go. Relative paths resolve against the
    /// base directory; unset means the base directory itself.
    #[serde(default)]
    pub report_dir: Option<PathBuf>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            left: default_left(),
            right: default_right(),
            columns: default_columns(),
            tally: TallyConfig::default(),
            report_dir: None,
        }
    }
}

pub const DEFAULT_COLUMNS: [&str; 6] = ["title", "director", "cast", "writer", "genre", "year"];

fn default_columns() -> Vec<String> {
    DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect()
}

fn default_left() -> SourceConfig {
    SourceConfig {
        label: "IMDB".into(),
        file: PathBuf::from("imdb.csv"),
        column_case: ColumnCase::Verbatim,
    }
}

fn default_right() -> SourceConfig {
    SourceConfig {
        label: "OMDB".into(),
        file: PathBuf::from("omdb.csv"),
        column_case: ColumnCase::Capitalized,
    }
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// `column_case` defaults per side: verbatim on the left, capitalized on the
/// right, also when a `[left]` or `[right]` table leaves it out.
#[derive(Debug, Clone, Serialize)]
pub struct SourceConfig {
    /// Human name, used in report headers ("IMDB Count").
    pub label: String,
    pub file: PathBuf,
    pub column_case: ColumnCase,
}

#[derive(Deserialize)]
struct SourceTable {
    label: String,
    file: PathBuf,
    column_case: Option<ColumnCase>,
}

impl SourceTable {
    fn with_default_case(self, default: ColumnCase) -> SourceConfig {
        SourceConfig {
            label: self.label,
            file: self.file,
            column_case: self.column_case.unwrap_or(default),
        }
    }
}

fn deserialize_left<'de, D: Deserializer<'de>>(d: D) -> Result<SourceConfig, D::Error> {
    SourceTable::deserialize(d).map(|t| t.with_default_case(default_left().column_case))
}

fn deserialize_right<'de, D: Deserializer<'de>>(d: D) -> Result<SourceConfig, D::Error> {
    SourceTable::deserialize(d).map(|t| t.with_default_case(default_right().column_case))
}

impl SourceConfig {
    pub fn resolve_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.file)
    }

    /// The header this source uses for a logical column name.
    pub fn column_name(&self, column: &str) -> String {
        self.column_case.apply(column)
    }

    pub fn count_header(&self) -> String {
        format!("{} Count", self.label)
    }
}

/// How a logical column name maps onto a source's header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnCase {
    #[default]
    Verbatim,
    /// First character upper-cased, the rest lower-cased.
    Capitalized,
}

impl ColumnCase {
    pub fn apply(&self, column: &str) -> String {
        match self {
            Self::Verbatim => column.to_string(),
            Self::Capitalized => capitalize(column),
        }
    }
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tally
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TallyConfig {
    /// Splits multi-valued cells ("Action,Drama").
    #[serde(default = "default_separator")]
    pub separator: char,
    /// Text a missing cell counts as before splitting.
    #[serde(default = "default_missing_token")]
    pub missing_token: String,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            missing_token: default_missing_token(),
        }
    }
}

fn default_separator() -> char {
    ','
}

fn default_missing_token() -> String {
    "nan".into()
}

// ---------------------------------------------------------------------------
// Parsing + validation
// ---------------------------------------------------------------------------

impl ProbeConfig {
    pub fn from_toml(input: &str) -> Result<Self, ProbeError> {
        let config: ProbeConfig =
            toml::from_str(input).map_err(|e| ProbeError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.columns.is_empty() {
            return Err(ProbeError::ConfigValidation(
                "at least one candidate column is required".into(),
            ));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.trim().is_empty() {
                return Err(ProbeError::ConfigValidation(
                    "column names must not be empty".into(),
                ));
            }
            // Column names become report file names
            if column.contains(['/', '\\']) || column == "." || column == ".." {
                return Err(ProbeError::ConfigValidation(format!(
                    "column '{column}' cannot be used as a report file name"
                )));
            }
            if !seen.insert(column.as_str()) {
                return Err(ProbeError::ConfigValidation(format!(
                    "column '{column}' is listed more than once"
                )));
            }
        }

        for (side, source) in [("left", &self.left), ("right", &self.right)] {
            if source.label.trim().is_empty() {
                return Err(ProbeError::ConfigValidation(format!(
                    "{side} source label must not be empty"
                )));
            }
            if source.file.as_os_str().is_empty() {
                return Err(ProbeError::ConfigValidation(format!(
                    "{side} source file must not be empty"
                )));
            }
        }

        if self.left.file == self.right.file {
            return Err(ProbeError::ConfigValidation(format!(
                "left and right sources both read '{}'",
                self.left.file.display()
            )));
        }

        Ok(())
    }

    pub fn report_dir(&self, base_dir: &Path) -> PathBuf {
        match &self.report_dir {
            Some(dir) => base_dir.join(dir),
            None => base_dir.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_fixed_setup() {
        let config = ProbeConfig::default();
        assert_eq!(config.left.file, PathBuf::from("imdb.csv"));
        assert_eq!(config.right.file, PathBuf::from("omdb.csv"));
        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert_eq!(config.left.column_name("genre"), "genre");
        assert_eq!(config.right.column_name("genre"), "Genre");
        assert_eq!(config.tally.separator, ',');
        assert_eq!(config.tally.missing_token, "nan");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_capitalize_lowers_the_rest() {
        assert_eq!(capitalize("title"), "Title");
        assert_eq!(capitalize("imdbID"), "Imdbid");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = ProbeConfig::from_toml("").unwrap();
        assert_eq!(config.columns.len(), 6);
        assert_eq!(config.right.column_case, ColumnCase::Capitalized);
    }

    #[test]
    fn test_toml_overrides() {
        let config = ProbeConfig::from_toml(
            r#"
columns = ["genre", "year"]
report_dir = "reports"

[left]
label = "Catalog"
file = "catalog.csv"

[right]
label = "Feed"
file = "feed.csv"
column_case = "capitalized"

[tally]
separator = "|"
missing_token = ""
"#,
        )
        .unwrap();

        assert_eq!(config.columns, vec!["genre", "year"]);
        assert_eq!(config.left.column_case, ColumnCase::Verbatim);
        assert_eq!(config.right.count_header(), "Feed Count");
        assert_eq!(config.tally.separator, '|');
        assert_eq!(config.tally.missing_token, "");
        assert_eq!(
            config.report_dir(Path::new("/data")),
            PathBuf::from("/data/reports")
        );
    }

    #[test]
    fn test_source_table_without_column_case_keeps_side_default() {
        let config = ProbeConfig::from_toml(
            r#"
[left]
label = "Catalog"
file = "catalog.csv"

[right]
label = "Feed"
file = "feed.csv"
"#,
        )
        .unwrap();

        assert_eq!(config.left.column_case, ColumnCase::Verbatim);
        assert_eq!(config.right.column_case, ColumnCase::Capitalized);
        assert_eq!(config.right.column_name("genre"), "Genre");
    }

    #[test]
    fn test_explicit_column_case_wins() {
        let config = ProbeConfig::from_toml(
            r#"
[right]
label = "Feed"
file = "feed.csv"
column_case = "verbatim"
"#,
        )
        .unwrap();
        assert_eq!(config.right.column_case, ColumnCase::Verbatim);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = ProbeConfig::from_toml("columns = 3").unwrap_err();
        assert!(matches!(err, ProbeError::ConfigParse(_)), "got {err:?}");
    }

    #[test]
    fn test_validation_rejects_bad_columns() {
        for columns in [
            vec![],
            vec!["".to_string()],
            vec!["genre/../../etc".to_string()],
            vec!["year".to_string(), "year".to_string()],
        ] {
            let config = ProbeConfig { columns, ..ProbeConfig::default() };
            let err = config.validate().unwrap_err();
            assert!(matches!(err, ProbeError::ConfigValidation(_)), "got {err:?}");
        }
    }

    #[test]
    fn test_validation_rejects_same_file_twice() {
        let mut config = ProbeConfig::default();
        config.right.file = config.left.file.clone();
        assert!(matches!(
            config.validate(),
            Err(ProbeError::ConfigValidation(_))
        ));
    }
}
