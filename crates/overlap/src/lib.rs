//! `joinprobe-overlap`: join-candidate analysis across two tabular sources.
//!
//! Tallies the distinct values of each candidate column on both sides, scores
//! how far the smaller value set is contained in the larger one, and ranks the
//! columns worth joining on. Table loading lives in `joinprobe-io`.

pub mod analyze;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod rank;
pub mod score;
pub mod tally;

pub use config::{ColumnCase, ProbeConfig, SourceConfig, TallyConfig};
pub use engine::{probe_tables, run};
pub use error::ProbeError;
pub use model::{ColumnAnalysis, ColumnStatus, JoinCandidate, ProbeReport};
pub use score::overlap_score;
pub use tally::ValueTally;
