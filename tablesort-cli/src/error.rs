//! CLI error types

/// Errors that stop the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading the input failed.
    #[error("{path}: {source}")]
    Io {
        /// Path as given on the command line.
        path: String,
        source: std::io::Error,
    },

    /// The input has no header line.
    #[error("input is empty")]
    EmptyInput,

    /// `--column` or `--numeric` names a column the input does not have.
    #[error("column {column} out of range (input has {columns} columns)")]
    NoSuchColumn { column: usize, columns: usize },

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("internal error: {0}")]
    Internal(String),
}
