use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaperPlotError {
    #[error("Shape error: {0}")]
    Shape(String),

    #[error("Dimension error: data must be {expected}-dimensional, got {actual} dimension(s)")]
    Dimension { expected: usize, actual: usize },

    #[error("Dimension error: table must have at least one group and one entry, got {groups}x{entries}")]
    EmptyTable { groups: usize, entries: usize },

    #[error("Size mismatch: {what} has {actual} item(s), expected {expected}")]
    SizeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid hatch pattern: {0:?}")]
    InvalidHatch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PaperPlotError {
    pub(crate) fn size_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    pub(crate) fn invalid_parameter(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Short class name of the error, stable across message changes.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Shape(_) => "Shape",
            Self::Dimension { .. } | Self::EmptyTable { .. } => "Dimension",
            Self::SizeMismatch { .. } => "SizeMismatch",
            Self::InvalidParameter { .. } => "InvalidParameter",
            Self::InvalidColor(_) => "InvalidColor",
            Self::InvalidHatch(_) => "InvalidHatch",
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Whether the error was caused by the caller's input data or options,
    /// as opposed to configuration loading or the environment.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Shape(_)
                | Self::Dimension { .. }
                | Self::EmptyTable { .. }
                | Self::SizeMismatch { .. }
                | Self::InvalidParameter { .. }
                | Self::InvalidColor(_)
                | Self::InvalidHatch(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PaperPlotError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
