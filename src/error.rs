//! Error types for table export

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while building or exporting a table
#[derive(Error, Debug)]
pub enum ExportError {
    /// An index column was requested before any header row was set
    #[error("You must set the headers to use this functionality with the exporter.")]
    MissingHeaders,

    /// Filesystem or writer failure; `path` is unset for arbitrary writers
    #[error("IO error{}: {source}", on_path(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn on_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" on {}", p.display()))
        .unwrap_or_default()
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Classify a csv error, surfacing the I/O failures it wraps as [`ExportError::Io`]
    pub(crate) fn from_csv(err: csv::Error, path: Option<&Path>) -> Self {
        if !err.is_io_error() {
            return ExportError::Csv(err);
        }
        let source = match err.into_kind() {
            csv::ErrorKind::Io(source) => source,
            other => std::io::Error::other(format!("{:?}", other)),
        };
        ExportError::Io {
            path: path.map(Path::to_path_buf),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
