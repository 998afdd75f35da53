use std::path::PathBuf;

use thiserror::Error;

use crate::stats::StatName;

#[derive(Error, Debug)]
pub enum PostStatsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid report period: {0}")]
    InvalidPeriod(String),

    #[error("Malformed post {id}: {reason}")]
    Hydrate { id: String, reason: String },

    /// A calculator was driven past its single accumulate/finalize pass.
    #[error("Calculator '{name}' cannot {operation}: it has already been finalized")]
    CalculatorReused {
        name: StatName,
        operation: &'static str,
    },
}

impl PostStatsError {
    /// Short category name, used for error output and exit code selection.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::Json(_) | Self::Hydrate { .. } => "Data",
            Self::InvalidPeriod(_) => "Period",
            Self::CalculatorReused { .. } => "Precondition",
        }
    }

    /// Whether the failure comes from the post feed rather than from setup.
    #[must_use]
    pub const fn is_data_error(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Hydrate { .. })
    }
}

pub type Result<T> = std::result::Result<T, PostStatsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
