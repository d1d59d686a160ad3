use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the estimation engine and the document store.
#[derive(Error, Debug)]
pub enum Error {
    #[error("project details have no rooms (total room count is zero)")]
    EmptyRooms,

    #[error("sqft must be positive, got {0}")]
    InvalidArea(f64),

    #[error("room count must be positive for {0}")]
    InvalidRoomCount(String),

    #[error("document {0} not found")]
    NotFound(Uuid),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
