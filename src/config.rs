//! Run configuration derived from the command line.

use std::path::{Path, PathBuf};

/// Default directory holding the root `index.json`.
pub const DEFAULT_DIR: &str = ".";

/// Default name of the generated document.
pub const DEFAULT_OUTPUT: &str = "lessonplan.json";

/// Output argument selecting standard output instead of a file.
pub const STDOUT_MARKER: &str = "-";

/// Where the generated document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// Interpret an `--output` argument. `-` means standard output.
    pub fn parse(arg: &str) -> Self {
        if arg == STDOUT_MARKER {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Everything a single run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory holding the root `index.json`.
    pub root: PathBuf,
    pub output: OutputTarget,
}

impl RunConfig {
    pub fn new(root: impl AsRef<Path>, output: &str) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            output: OutputTarget::parse(output),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIR, DEFAULT_OUTPUT)
    }
}
