//! Shared test fixtures for the pr-labeler workspace.
//!
//! Dev-dependency only. Provides the Node.js-style label document from
//! `test-fixtures/labels/` and small helpers around it.
//!
//! # Example
//!
//! ```rust,no_run
//! use labeler_test_utils::resolve_labels;
//!
//! assert_eq!(resolve_labels(&["doc/api/fs.md"]), vec!["doc", "fs"]);
//! ```

use labeler_rules::{Config, resolve};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Raw text of the Node.js-style label document.
pub const NODE_LABELS_YML: &str =
    include_str!("../../../test-fixtures/labels/node-pr-labels.yml");

/// Branch used when a test does not care about version labels.
pub const DEFAULT_BASE_BRANCH: &str = "master";

/// The compiled fixture config.
///
/// # Panics
/// Panics if the fixture document no longer compiles.
pub fn node_config() -> Config {
    Config::from_yaml_str(NODE_LABELS_YML).expect("fixture label config must compile")
}

/// Resolve `paths` against the fixture config on [`DEFAULT_BASE_BRANCH`].
pub fn resolve_labels(paths: &[&str]) -> Vec<String> {
    resolve(paths, DEFAULT_BASE_BRANCH, &node_config()).into_vec()
}

/// Resolve `paths` against the fixture config with a different cap limit.
pub fn resolve_labels_with_limit(paths: &[&str], limit: usize) -> Vec<String> {
    let config = node_config()
        .with_cap_limit(limit)
        .expect("limit must be positive");
    resolve(paths, DEFAULT_BASE_BRANCH, &config).into_vec()
}

/// A label document written to a temporary directory.
pub struct ConfigFile {
    temp_dir: TempDir,
    path: PathBuf,
}

impl ConfigFile {
    /// Write the fixture document as `pr-labels.yml`.
    pub fn node() -> Self {
        Self::with_contents("pr-labels.yml", NODE_LABELS_YML)
    }

    /// Write `contents` under `file_name`.
    pub fn with_contents(file_name: &str, contents: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(file_name);
        fs::write(&path, contents).unwrap();
        Self { temp_dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}
