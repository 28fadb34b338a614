use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::chart::BarAnchor;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

/// Which point of a bar the reported x coordinate refers to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AnchorArg {
    /// Left edge of the bar
    #[default]
    Left,
    /// Horizontal center of the bar
    Center,
}

impl From<AnchorArg> for BarAnchor {
    fn from(arg: AnchorArg) -> Self {
        match arg {
            AnchorArg::Left => Self::LeftEdge,
            AnchorArg::Center => Self::Center,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "paperplot")]
#[command(author, version, about = "Paper-ready grouped bar chart layouts")]
#[command(long_about = "Computes stacked and clustered bar chart geometry, palettes and \
    figure sizes for publication plots.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Invalid chart data or options\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute bar rectangles for a chart file
    Layout(LayoutArgs),

    /// Build a full drawing plan (colors, hatches, labels) for a chart file
    Plan(PlanArgs),

    /// Print the default palette or a brightness ramp of one color
    Palette(PaletteArgs),

    /// Figure size in inches for a width in points
    Figsize(FigsizeArgs),
}

#[derive(Parser, Debug)]
pub struct LayoutArgs {
    /// Chart description file (TOML)
    pub chart: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Chart description file (TOML)
    pub chart: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Bar anchor expected by the rendering backend
    #[arg(long, value_enum, default_value = "left")]
    pub anchor: AnchorArg,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct PaletteArgs {
    /// Base color for a brightness ramp (e.g. "#386cb0" or "b")
    #[arg(long)]
    pub base: Option<String>,

    /// Number of colors
    #[arg(short = 'n', long, default_value_t = 8)]
    pub count: usize,

    /// Darkest brightness factor of the ramp
    #[arg(long, requires = "base")]
    pub low: Option<f64>,

    /// Brightest brightness factor of the ramp
    #[arg(long, requires = "base")]
    pub high: Option<f64>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct FigsizeArgs {
    /// Figure width in points (e.g. a LaTeX \columnwidth)
    pub width_pt: f64,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
