use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{LessonPlanError, Result};

/// Read a file as text, returning `None` when nothing exists at `path`.
///
/// Any other failure (permissions, a directory in place of the file,
/// invalid UTF-8) is an error carrying the path.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(LessonPlanError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
