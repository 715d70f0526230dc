use std::fmt;
use std::path::PathBuf;

use joinprobe_io::ReadError;

#[derive(Debug)]
pub enum ProbeError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (no columns, bad column name, etc.).
    ConfigValidation(String),
    /// A source table could not be loaded.
    Read(ReadError),
    /// A per-column comparison report could not be written.
    Report { path: PathBuf, message: String },
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::Read(err) => write!(f, "{err}"),
            Self::Report { path, message } => {
                write!(f, "cannot write report {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ReadError> for ProbeError {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::Write { path, message } => Self::Report { path, message },
            other => Self::Read(other),
        }
    }
}
