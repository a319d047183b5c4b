//! Setup failures. Each names the offending path, table, or attitude.
use crate::*;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The module path does not resolve to an existing file.
    #[error("module not found: {}", path.display())]
    ModuleNotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a well-formed strategy module.
    #[error("invalid module {}: {source}", path.display())]
    InvalidModule {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A rank or config file is not well-formed JSON of the expected shape.
    #[error("malformed {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The module defines no strategies. Only raised for callers that ask.
    #[error("module {key} contains no strategies")]
    EmptyDiscovery { key: String },

    /// Rank window bounds violate 0 <= top < bottom <= 1.
    #[error("invalid rank window [{top}, {bottom}): need 0 <= top < bottom <= 1")]
    InvalidWindow { top: Quantile, bottom: Quantile },

    /// Filtering was requested but a rank table is absent.
    #[error("missing {attitude} rank table")]
    MissingRankTable { attitude: Attitude },

    /// No candidate of this attitude survived filtering and suffix selection.
    #[error("empty {attitude} pool (suffix {suffix:?})")]
    EmptyPool { attitude: Attitude, suffix: String },

    /// A configuration value could not be parsed.
    #[error("invalid config {key}={value:?}")]
    InvalidConfig { key: String, value: String },
}
