//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! | Code | Meaning                                                   |
//! |------|-----------------------------------------------------------|
//! | 0    | Success                                                   |
//! | 1    | Runtime failure (report or output file not written)       |
//! | 2    | Usage error (bad arguments, `--dir` not a directory)      |
//! | 3    | Invalid configuration                                     |
//! | 4    | Input unreadable (missing file, no encoding worked)       |

/// Success - summary printed.
pub const EXIT_SUCCESS: u8 = 0;

/// Runtime failure - a comparison report or the JSON output could not be written.
pub const EXIT_RUNTIME: u8 = 1;

/// Usage error - bad arguments, `--dir` not a directory. Clap also exits with 2.
pub const EXIT_USAGE: u8 = 2;

/// Config file missing, malformed, or failing validation.
pub const EXIT_INVALID_CONFIG: u8 = 3;

/// An input table could not be opened or parsed under any encoding.
pub const EXIT_INPUT: u8 = 4;
