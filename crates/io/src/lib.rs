// File I/O operations

pub mod csv;
pub mod encoding;
pub mod error;
pub mod table;

pub use crate::csv::{read_table, read_table_with, write_counts, CountRow, NA_VALUES};
pub use encoding::{candidate_labels, detect_encoding, Codec, SAMPLE_BYTES};
pub use error::{AttemptError, ReadError};
pub use table::Table;
