#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the post-stats binary.
#[macro_export]
macro_rules! post_stats {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("post-stats"))
    };
}

/// Path to the reference feed: six August 2018 posts by four authors plus
/// one post from July.
pub fn reference_feed() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/social-posts-response.json")
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.post-stats.toml` in the temp directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".post-stats.toml", content)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
