#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the paperplot binary.
#[macro_export]
macro_rules! paperplot {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("paperplot"))
    };
}

/// Three groups of two entries used across the integration tests.
pub const BASIC_CHART: &str = r#"
data = [[1.0, 3.0], [2.0, 4.0], [3.5, 1.5]]
group_names = ["a", "b", "c"]
entry_names = ["x", "y"]
"#;

/// Same data laid out as clusters with half-width bars and hatches.
pub const CLUSTERED_CHART: &str = r#"
data = [[1.0, 3.0], [2.0, 4.0], [3.5, 1.5]]
entry_names = ["x", "y"]

[layout]
breakdown = false
cluster_shrink = 0.5

[appearance]
hatches = ["//", ""]
edgecolor = "none"

[style]
font = ["monospace", "DejaVu Sans Mono"]
fontsize = 8.0
"#;

/// Creates a temporary directory with chart files for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes `content` to `relative_path` and returns the full path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn create_chart(&self, content: &str) -> PathBuf {
        self.create_file("chart.toml", content)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
