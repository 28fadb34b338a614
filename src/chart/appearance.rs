//! Caller-facing appearance options of a bar chart.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::ColorSpec;

/// Legend placement, using the usual plotting-library location names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendLoc {
    #[serde(rename = "best")]
    Best,
    #[default]
    #[serde(rename = "upper right")]
    UpperRight,
    #[serde(rename = "upper left")]
    UpperLeft,
    #[serde(rename = "lower left")]
    LowerLeft,
    #[serde(rename = "lower right")]
    LowerRight,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "center left")]
    CenterLeft,
    #[serde(rename = "center right")]
    CenterRight,
    #[serde(rename = "lower center")]
    LowerCenter,
    #[serde(rename = "upper center")]
    UpperCenter,
    #[serde(rename = "center")]
    Center,
}

impl fmt::Display for LegendLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Best => "best",
            Self::UpperRight => "upper right",
            Self::UpperLeft => "upper left",
            Self::LowerLeft => "lower left",
            Self::LowerRight => "lower right",
            Self::Right => "right",
            Self::CenterLeft => "center left",
            Self::CenterRight => "center right",
            Self::LowerCenter => "lower center",
            Self::UpperCenter => "upper center",
            Self::Center => "center",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationKeyword {
    Horizontal,
    Vertical,
}

/// Rotation of x tick labels: a keyword or an angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelRotation {
    Keyword(RotationKeyword),
    Degrees(f64),
}

impl Default for LabelRotation {
    fn default() -> Self {
        Self::Keyword(RotationKeyword::Horizontal)
    }
}

impl LabelRotation {
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Keyword(RotationKeyword::Horizontal) => 0.0,
            Self::Keyword(RotationKeyword::Vertical) => 90.0,
            Self::Degrees(deg) => *deg,
        }
    }
}

/// Per-entry colors, edges, hatches and axes decorations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Appearance {
    /// Fill color per entry: hex, a base letter, a common CSS name or an
    /// `[r, g, b]` triple. Defaults to the qualitative palette.
    #[serde(default)]
    pub colors: Option<Vec<ColorSpec>>,

    /// Bar edge color; `"none"` draws no edge.
    #[serde(default = "default_black")]
    pub edgecolor: ColorSpec,

    #[serde(default = "default_linewidth")]
    pub linewidth: f64,

    /// Hatch pattern per entry; an empty string means no hatch.
    #[serde(default)]
    pub hatches: Option<Vec<String>>,

    #[serde(default = "default_black")]
    pub hatchcolor: ColorSpec,

    #[serde(default)]
    pub legend_loc: LegendLoc,

    #[serde(default = "default_legend_columns")]
    pub legend_columns: usize,

    /// Log-scale value axis.
    #[serde(default)]
    pub log: bool,

    #[serde(default)]
    pub xticklabel_fontsize: Option<f64>,

    #[serde(default)]
    pub xticklabel_rotation: LabelRotation,
}

fn default_black() -> ColorSpec {
    ColorSpec::from("k")
}

const fn default_linewidth() -> f64 {
    0.5
}

const fn default_legend_columns() -> usize {
    1
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            colors: None,
            edgecolor: default_black(),
            linewidth: default_linewidth(),
            hatches: None,
            hatchcolor: default_black(),
            legend_loc: LegendLoc::default(),
            legend_columns: default_legend_columns(),
            log: false,
            xticklabel_fontsize: None,
            xticklabel_rotation: LabelRotation::default(),
        }
    }
}

impl Appearance {
    #[must_use]
    pub fn with_colors<C: Into<ColorSpec>>(mut self, colors: impl IntoIterator<Item = C>) -> Self {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_hatches<S: Into<String>>(mut self, hatches: impl IntoIterator<Item = S>) -> Self {
        self.hatches = Some(hatches.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_edgecolor(mut self, color: impl Into<ColorSpec>) -> Self {
        self.edgecolor = color.into();
        self
    }

    #[must_use]
    pub const fn with_legend(mut self, loc: LegendLoc, columns: usize) -> Self {
        self.legend_loc = loc;
        self.legend_columns = columns;
        self
    }
}
