//! Fixture trees for lesson plan specs.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary lesson plan directory.
pub struct PlanFixture {
    dir: TempDir,
}

impl PlanFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write the root `index.json`.
    pub fn root_index(&self, title: &str, contents: &[&str]) -> &Self {
        let json = serde_json::json!({ "title": title, "contents": contents });
        self.write("index.json", &json.to_string())
    }

    /// Create a lesson directory with a descriptor carrying `title`.
    pub fn lesson(&self, name: &str, title: &str) -> &Self {
        let json = serde_json::json!({ "title": title });
        self.write(&format!("{}/index.json", name), &json.to_string())
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> &Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, contents).expect("Failed to write fixture file");
        self
    }

    /// Create a directory at `rel`. A directory where a file is expected reads as an I/O error.
    pub fn mkdir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.path(rel)).expect("Failed to create fixture directory");
        self
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }
}
