use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a lesson plan or writing its document.
#[derive(Debug, Error)]
pub enum LessonPlanError {
    #[error("unable to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid descriptor '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Directory {} did not contain a valid index.json file", .dir.display())]
    MissingRootIndex { dir: PathBuf },

    #[error("error marshalling lessons: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unable to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LessonPlanError>;
