//! Error types for extscan-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end the process with a non-zero exit code
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from extscan-core
    #[error(transparent)]
    Core(#[from] extscan_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The tracing subscriber could not be installed
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}
