//! Course Errors
//!
//! Failures while loading configuration, layouts and input scripts. The
//! simulation itself cannot fail: every bad outcome in play is a respawn.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourseError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A tuning value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A course layout cannot be simulated.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

impl CourseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CourseError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type CourseResult<T> = Result<T, CourseError>;

/// Read a file to a string, tagging failures with the path.
pub(crate) fn read_to_string(path: &std::path::Path) -> CourseResult<String> {
    std::fs::read_to_string(path).map_err(|e| CourseError::io(path, e))
}

/// Write a string to a file, creating parent directories first.
pub(crate) fn write_string(path: &std::path::Path, contents: &str) -> CourseResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CourseError::io(parent, e))?;
        }
    }
    std::fs::write(path, contents).map_err(|e| CourseError::io(path, e))
}
