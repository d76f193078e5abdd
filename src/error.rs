use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for loading and selecting density profiles.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Everything that can go wrong between the command line and the plot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The results file could not be read.
    #[error("failed to read {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The results file is not valid JSON.
    #[error("failed to parse {} as JSON", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An expected key is absent from the document.
    #[error("missing key '{key}' in results document")]
    MissingKey { key: &'static str },

    /// A key is present but its value has the wrong shape.
    #[error("'{key}' is not a list of number lists")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The profile holds no series, so there is no x-axis to derive.
    #[error("'{key}' contains no series")]
    EmptySeries { key: &'static str },

    /// A filter index does not name a series.
    #[error("series index {index} out of range ({len} series available)")]
    IndexOutOfRange { index: i64, len: usize },

    /// A selected series does not match the x-axis length.
    #[error("series {index} has {found} samples but the x-axis has {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Writing CSV output failed.
    #[error("CSV export failed")]
    Export(#[from] csv::Error),

    /// Writing plain output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
