//! Error types for extscan-core

use std::path::PathBuf;

/// Result type for operations that abort the whole scan
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Anything that only concerns one user, profile or extension
/// is reported as a [`ScanError`] or absorbed instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write report: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to build store client: {0}")]
    StoreClient(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A failure that ends enumeration for a single user.
///
/// Every variant carries the subject that was being processed when the
/// failure happened, so the error record names the right extension.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A directory that should have been listable could not be read
    #[error("failed to list {path}: {source}")]
    List {
        subject: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An extension directory's metadata could not be read
    #[error("failed to read metadata of {path}: {source}")]
    Metadata {
        subject: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// The user, profile or extension identifier the failure belongs to
    pub fn subject(&self) -> &str {
        match self {
            Self::List { subject, .. } | Self::Metadata { subject, .. } => subject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn scan_error_exposes_subject() {
        let error = ScanError::Metadata {
            subject: "abcdefghijklmnopabcdefghijklmnop".to_string(),
            path: PathBuf::from("/Users/alice/x"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.subject(), "abcdefghijklmnopabcdefghijklmnop");
        assert!(error.to_string().contains("/Users/alice/x"));
    }

    #[test]
    fn io_helper_keeps_path() {
        let error = Error::io("/Users", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(error.to_string(), "I/O error at /Users: gone");
    }
}
