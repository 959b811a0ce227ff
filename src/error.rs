use std::path::PathBuf;
use thiserror::Error;

/// Every way a fix run can fail. The first error aborts the run.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Invalid glob pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to enumerate {path}: {source}")]
    Enumerate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to report progress for {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PatchError {
    /// Path the error refers to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            PatchError::Pattern { .. } => None,
            PatchError::Enumerate { path, .. }
            | PatchError::Read { path, .. }
            | PatchError::Write { path, .. }
            | PatchError::Report { path, .. } => Some(path),
        }
    }
}
