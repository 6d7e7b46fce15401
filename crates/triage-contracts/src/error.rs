//! Error types for the triage engine.
//!
//! All fallible operations return `TriageResult<T>`. Startup errors
//! (`CorpusLoad`, `MissingColumn`, `ConfigError`) are fatal: the process must
//! not serve queries after one of them. `Translation` is recoverable and is
//! absorbed by the normalizer; callers of `assess` never see it.

use thiserror::Error;

/// The unified error type for the triage engine.
#[derive(Debug, Error)]
pub enum TriageError {
    /// A reference table could not be read or parsed.
    #[error("failed to load table '{table}': {reason}")]
    CorpusLoad { table: String, reason: String },

    /// A reference table is missing a required column.
    #[error("table '{table}' is missing required column '{column}'")]
    MissingColumn { table: String, column: String },

    /// A configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The caller supplied input the engine cannot act on (e.g. blank text).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The translation backend failed, timed out, or replied with garbage.
    #[error("translation failed: {reason}")]
    Translation { reason: String },
}

/// Convenience alias used throughout the triage crates.
pub type TriageResult<T> = Result<T, TriageError>;
