//! Error types for pkgrepo

use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for index building
///
/// Every variant is fatal for the run and names the input that caused it.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("Invalid wheel name: {}", path.display())]
    InvalidWheelName { filename: String, path: PathBuf },

    #[error("ZIP error in {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("{} has no {entry} entry", path.display())]
    MissingMetadata { path: PathBuf, entry: String },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output directory already exists: {}", path.display())]
    OutputExists { path: PathBuf },

    #[error("Failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl RepoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepoError::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the input that failed
    pub fn path(&self) -> &Path {
        match self {
            RepoError::InvalidWheelName { path, .. }
            | RepoError::Archive { path, .. }
            | RepoError::MissingMetadata { path, .. }
            | RepoError::Io { path, .. }
            | RepoError::OutputExists { path }
            | RepoError::Walk { path, .. } => path,
            RepoError::Copy { from, .. } => from,
        }
    }
}

pub type Result<T, E = RepoError> = std::result::Result<T, E>;
