/// Centralized error types for git-quads using thiserror
///
/// Every failure short-circuits the import and propagates to the
/// caller; nothing is retried or swallowed internally.
use thiserror::Error;

/// Main error type for an import run
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Traversal error: {0}")]
    Traversal(#[from] TraversalError),

    #[error("Mapping error: {0}")]
    Mapping(#[from] MapError),

    #[error("Sink error: {0}")]
    Sink(#[from] BatchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Import was cancelled")]
    Cancelled,
}

/// Errors resolving the source repository, raised before any quad is written
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to open git repository at '{path}': {reason}")]
    OpenFailed { path: String, reason: String },
}

/// Errors from the history walk and per-commit object access
#[derive(Error, Debug)]
pub enum TraversalError {
    #[error("Failed to start history walk: {0}")]
    WalkFailed(String),

    #[error("Failed to iterate commits: {0}")]
    IterFailed(String),

    #[error("Failed to resolve commit {oid}: {reason}")]
    CommitLookupFailed { oid: String, reason: String },

    #[error("Failed to resolve tree for commit {oid}: {reason}")]
    TreeLookupFailed { oid: String, reason: String },

    #[error("Failed to list files of commit {oid}: {reason}")]
    FileListFailed { oid: String, reason: String },

    #[error("Failed to diff commit {oid} against its first parent: {reason}")]
    DiffFailed { oid: String, reason: String },
}

/// Mapping-stage context wrapped around a failed write, so a caller can
/// tell which kind of fact was being emitted when the run aborted
#[derive(Error, Debug)]
pub enum MapError {
    #[error("Failed writing signature facts for commit {commit}: {source}")]
    Signature {
        commit: String,
        #[source]
        source: BatchError,
    },

    #[error("Failed writing file facts for commit {commit}: {source}")]
    File {
        commit: String,
        #[source]
        source: BatchError,
    },

    #[error("Failed writing change facts for commit {commit}: {source}")]
    Change {
        commit: String,
        #[source]
        source: BatchError,
    },

    #[error("Malformed change entry for commit {commit}: {reason}")]
    MalformedChange { commit: String, reason: String },
}

/// Error from a destination rejecting a single quad
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Destination rejected quad: {0}")]
    Rejected(String),

    #[error("Failed to write quad: {0}")]
    Io(#[from] std::io::Error),
}

/// Error from a batch write, carrying how many quads of the batch were
/// persisted before the failure
#[derive(Error, Debug)]
#[error("Batch write stopped after {written} of {total} quads: {source}")]
pub struct BatchError {
    pub written: usize,
    pub total: usize,
    #[source]
    pub source: SinkError,
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImportError::Source(SourceError::OpenFailed {
            path: "/missing".to_string(),
            reason: "not a git repository".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Source error: Failed to open git repository at '/missing': not a git repository"
        );
    }

    #[test]
    fn test_batch_error_reports_written_count() {
        let err = BatchError {
            written: 2,
            total: 4,
            source: SinkError::Rejected("disk full".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Batch write stopped after 2 of 4 quads: Destination rejected quad: disk full"
        );
    }

    #[test]
    fn test_map_error_carries_stage() {
        let err = ImportError::Mapping(MapError::Signature {
            commit: "sha1:abc".to_string(),
            source: BatchError {
                written: 0,
                total: 4,
                source: SinkError::Rejected("boom".to_string()),
            },
        });
        assert!(err.to_string().contains("signature facts"));
        assert!(err.to_string().contains("sha1:abc"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ImportError = io_err.into();
        assert!(matches!(err, ImportError::Io(_)));
    }

    #[test]
    fn test_cancelled_display() {
        assert_eq!(ImportError::Cancelled.to_string(), "Import was cancelled");
    }
}
