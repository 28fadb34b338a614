use std::path::Path;

use crate::error::{PaperPlotError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::ChartFile;
use super::validation::validate_chart_semantics;

/// Trait for loading chart descriptions.
pub trait ChartLoader {
    /// Load and validate a chart file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or fails
    /// semantic validation.
    fn load_from_path(&self, path: &Path) -> Result<ChartFile>;
}

/// Loads chart files from the filesystem.
#[derive(Debug, Default)]
pub struct FileChartLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileChartLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileChartLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> ChartLoader for FileChartLoader<F> {
    fn load_from_path(&self, path: &Path) -> Result<ChartFile> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| PaperPlotError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        parse_chart(&content)
    }
}

/// Parse and validate a chart description from TOML text.
///
/// # Errors
/// Returns a TOML parse error for malformed or unknown keys, and a
/// configuration error when semantic validation fails.
pub fn parse_chart(content: &str) -> Result<ChartFile> {
    let chart: ChartFile = toml::from_str(content)?;
    validate_chart_semantics(&chart)?;
    Ok(chart)
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
