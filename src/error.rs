use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ReportError {
    /// The underlying I/O failure, if this error came from the filesystem.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            ReportError::ReadInput { source, .. }
            | ReportError::CreateDir { source, .. }
            | ReportError::WriteOutput { source, .. } => Some(source),
            ReportError::ThreadPool(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
