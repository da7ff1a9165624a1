//! CLI error types

use std::path::PathBuf;

use filterable_lib::error::ConfigError;

/// Errors reported by the command-line front-end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing results to stdout failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// The table file is not a JSON array of rows.
    #[error("Invalid table {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The filter configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An `--exclude` argument is not of the form `COLUMN=VALUE`.
    #[error("Invalid exclude '{0}': expected COLUMN=VALUE")]
    InvalidToggle(String),

    /// The logger could not be installed.
    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
