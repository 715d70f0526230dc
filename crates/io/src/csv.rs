// CSV import with encoding fallback, comparison report export

use std::path::Path;

use crate::encoding::{candidate_labels, detect_encoding, Codec, SAMPLE_BYTES};
use crate::error::{AttemptError, ReadError};
use crate::table::Table;

/// Load a comma-separated file, guessing its encoding.
///
/// The detected encoding is tried first, then UTF-8, ISO-8859-1, Windows-1252
/// and Latin-1. The first candidate that both decodes and parses wins. Malformed
/// rows are dropped, not reported.
pub fn read_table(path: &Path) -> Result<Table, ReadError> {
    let bytes = read_bytes(path)?;
    let sample = &bytes[..bytes.len().min(SAMPLE_BYTES)];
    let detected = detect_encoding(sample, bytes.len() <= SAMPLE_BYTES);
    log::debug!("{}: detected {} encoding", path.display(), detected.name());

    let labels = candidate_labels(detected.name());
    read_with_candidates(path, &bytes, &labels)
}

/// Load a file trying only the given encoding labels, in order.
pub fn read_table_with(path: &Path, labels: &[&str]) -> Result<Table, ReadError> {
    let bytes = read_bytes(path)?;
    read_with_candidates(path, &bytes, labels)
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, ReadError> {
    std::fs::read(path).map_err(|e| ReadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn read_with_candidates<S: AsRef<str>>(
    path: &Path,
    bytes: &[u8],
    labels: &[S],
) -> Result<Table, ReadError> {
    let mut attempts = Vec::with_capacity(labels.len());

    for label in labels {
        let label = label.as_ref();
        match try_encoding(bytes, label) {
            Ok(table) => {
                log::info!(
                    "read {} with {} encoding ({} rows)",
                    path.display(),
                    table.encoding(),
                    table.row_count()
                );
                return Ok(table);
            }
            Err(err) => {
                log::warn!("{}: {err}, trying next", path.display());
                attempts.push(label.to_string());
            }
        }
    }

    Err(ReadError::EncodingExhausted {
        path: path.to_path_buf(),
        attempts,
    })
}

fn try_encoding(bytes: &[u8], label: &str) -> Result<Table, AttemptError> {
    let codec = Codec::for_label(label).ok_or_else(|| AttemptError::UnknownEncoding {
        label: label.to_string(),
    })?;
    let text = codec.decode(bytes).ok_or_else(|| AttemptError::Decode {
        encoding: codec.name().to_string(),
    })?;
    let (table, skipped) = parse_table(&text).map_err(|message| AttemptError::Parse {
        encoding: codec.name().to_string(),
        message,
    })?;
    Ok(table.with_load_info(codec.name(), skipped))
}

/// Field values read as absent cells. Matched exactly, without trimming.
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_na(field: &str) -> bool {
    NA_VALUES.contains(&field)
}

/// Parse decoded text: header row, double-quote quoting, backslash escapes.
///
/// Returns the table and the number of dropped rows. A row is dropped when the
/// parser rejects it or when it has more fields than the header. Short rows keep
/// their trailing cells absent, and fields listed in [`NA_VALUES`] are absent
/// cells.
fn parse_table(text: &str) -> Result<(Table, usize), String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .quote(b'"')
        .escape(Some(b'\\'))
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err("no columns to parse from file".into());
    }

    let width = headers.len();
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::debug!("skipping malformed row: {e}");
                skipped += 1;
                continue;
            }
        };

        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            log::debug!(
                "skipping line {line}: expected {width} fields, saw {}",
                record.len()
            );
            skipped += 1;
            continue;
        }

        rows.push(
            record
                .iter()
                .map(|field| (!is_na(field)).then(|| field.to_string()))
                .collect(),
        );
    }

    Ok((Table::new(headers, rows), skipped))
}

/// One line of a per-column comparison report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRow<'a> {
    pub value: &'a str,
    pub left: usize,
    pub right: usize,
}

/// Write a UTF-8 comparison report: the header, then one row per value.
/// Returns the number of value rows written.
pub fn write_counts<'a, I>(path: &Path, header: [&str; 3], rows: I) -> Result<usize, ReadError>
where
    I: IntoIterator<Item = CountRow<'a>>,
{
    let write_err = |e: csv::Error| ReadError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .from_path(path)
        .map_err(write_err)?;

    writer.write_record(header).map_err(write_err)?;

    let mut written = 0usize;
    for row in rows {
        let left = row.left.to_string();
        let right = row.right.to_string();
        writer
            .write_record([row.value, left.as_str(), right.as_str()])
            .map_err(write_err)?;
        written += 1;
    }

    writer.flush().map_err(|e| ReadError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(written)
}
