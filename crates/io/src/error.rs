use std::fmt;
use std::path::PathBuf;

/// Failure to load or write a table file.
#[derive(Debug)]
pub enum ReadError {
    /// The file could not be opened or read.
    Io { path: PathBuf, message: String },
    /// Every candidate encoding failed to produce a table.
    EncodingExhausted { path: PathBuf, attempts: Vec<String> },
    /// A report file could not be created or written.
    Write { path: PathBuf, message: String },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "cannot read {}: {message}", path.display()),
            Self::EncodingExhausted { path, attempts } => write!(
                f,
                "failed to read {} with any of the attempted encodings ({})",
                path.display(),
                attempts.join(", ")
            ),
            Self::Write { path, message } => {
                write!(f, "cannot write {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for ReadError {}

/// Why a single encoding candidate was rejected. Logged, never returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// The bytes are not valid in this encoding.
    Decode { encoding: String },
    /// Decoding worked but no table could be parsed from the text.
    Parse { encoding: String, message: String },
    /// The label does not name an encoding we know.
    UnknownEncoding { label: String },
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { encoding } => write!(f, "failed to decode with {encoding} encoding"),
            Self::Parse { encoding, message } => {
                write!(f, "unexpected error with {encoding} encoding: {message}")
            }
            Self::UnknownEncoding { label } => write!(f, "unknown encoding label '{label}'"),
        }
    }
}

impl std::error::Error for AttemptError {}
