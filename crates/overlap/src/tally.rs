use std::collections::{BTreeSet, HashMap};

use joinprobe_io::Table;

use crate::config::TallyConfig;

/// Occurrence count per distinct value of one column.
///
/// Multi-valued cells are split before counting, so `"Action,Drama"` adds one
/// to `Action` and one to `Drama`. Pieces are not trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueTally {
    counts: HashMap<String, usize>,
}

impl ValueTally {
    /// Tally a sequence of cells. Absent cells count as `options.missing_token`.
    pub fn from_cells<'a, I>(cells: I, options: &TallyConfig) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut tally = Self::default();
        for cell in cells {
            let text = cell.unwrap_or(options.missing_token.as_str());
            for piece in text.split(options.separator) {
                tally.add(piece);
            }
        }
        tally
    }

    fn add(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_string(), 1);
            }
        }
    }

    pub fn count(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct values.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(|k| k.as_str())
    }

    /// Sorted union of both tallies' values.
    pub fn union<'a>(&'a self, other: &'a ValueTally) -> BTreeSet<&'a str> {
        self.values().chain(other.values()).collect()
    }
}

/// Tally one column of a table. `None` when the table has no such column.
pub fn tally_column(table: &Table, column: &str, options: &TallyConfig) -> Option<ValueTally> {
    let cells = table.column(column)?;
    Some(ValueTally::from_cells(cells, options))
}
