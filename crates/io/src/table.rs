// In-memory table loaded from a delimited text file

/// A header row plus data rows. Absent cells are `None`.
///
/// Loaded once per source and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    encoding: String,
    skipped_rows: usize,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self {
            headers,
            rows,
            encoding: String::new(),
            skipped_rows: 0,
        }
    }

    pub(crate) fn with_load_info(mut self, encoding: &str, skipped_rows: usize) -> Self {
        self.encoding = encoding.to_string();
        self.skipped_rows = skipped_rows;
        self
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Name of the encoding the table was decoded with (empty for in-memory tables).
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Malformed rows dropped while loading.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Index of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// Every cell of a column in row order. `None` if the column does not exist.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = Option<&str>> + '_> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(move |row| row.get(idx).and_then(|cell| cell.as_deref())),
        )
    }
}
