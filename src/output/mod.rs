mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::chart::BarChartPlan;
use crate::color::Rgb;
use crate::error::Result;
use crate::layout::LayoutResult;
use crate::style::{FigSize, PlotStyle};

/// Trait for rendering computed geometry and styling as text.
pub trait OutputFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_layout(&self, layout: &LayoutResult) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_plan(&self, plan: &BarChartPlan, style: &PlotStyle) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_palette(&self, colors: &[Rgb]) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_fig_size(&self, width_pt: f64, size: &FigSize) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl OutputFormat {
    /// Formatter for this format. `mode` only affects text output.
    #[must_use]
    pub fn formatter(self, mode: ColorMode) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::new(mode)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
