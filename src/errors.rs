use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the classification pipeline.
///
/// Row- and line-level problems are never represented here; those are logged
/// and skipped where they occur. Only resource-level failures and strict
/// protocol-name resolution propagate to the caller.
#[derive(Error, Debug)]
pub enum FlowTagError {
    /// A protocol name has no IANA number assignment
    #[error("Invalid protocol name: {name}")]
    InvalidProtocol { name: String },

    /// An input resource could not be opened or read
    #[error("Failed to read {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output resource could not be created or written
    #[error("Failed to write {}: {source}", path.display())]
    SinkUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FlowTagError {
    /// Maps each error kind to a distinct process exit code so callers can
    /// script on the failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            FlowTagError::InvalidProtocol { .. } => 1,
            FlowTagError::SourceUnreadable { .. } => 2,
            FlowTagError::SinkUnwritable { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowTagError>;
