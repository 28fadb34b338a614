use serde::{Deserialize, Serialize};

use crate::array::ArrayInput;
use crate::chart::{Appearance, BarChartSpec};
use crate::error::Result;
use crate::layout::LayoutOptions;
use crate::style::{DEFAULT_PAPER_FONT_SIZE, FontSpec, PlotStyle};
use crate::table::Table;

/// A chart description file: the data plus everything needed to lay it out
/// and style it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartFile {
    /// Groups × entries values, one inner list per group.
    pub data: ArrayInput,

    #[serde(default)]
    pub group_names: Option<Vec<String>>,

    #[serde(default)]
    pub entry_names: Option<Vec<String>>,

    #[serde(default)]
    pub layout: LayoutOptions,

    #[serde(default)]
    pub appearance: Appearance,

    #[serde(default)]
    pub style: StyleSection,
}

/// `[style]` section: paper styling applied by the rendering backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSection {
    #[serde(default)]
    pub font: FontSpec,

    #[serde(default = "default_fontsize")]
    pub fontsize: f64,

    /// Render text through TeX.
    #[serde(default)]
    pub use_tex: bool,
}

const fn default_fontsize() -> f64 {
    DEFAULT_PAPER_FONT_SIZE
}

impl Default for StyleSection {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            fontsize: default_fontsize(),
            use_tex: false,
        }
    }
}

impl ChartFile {
    /// Chart file holding only `data`, everything else defaulted.
    #[must_use]
    pub fn new(data: impl Into<ArrayInput>) -> Self {
        Self {
            data: data.into(),
            group_names: None,
            entry_names: None,
            layout: LayoutOptions::default(),
            appearance: Appearance::default(),
            style: StyleSection::default(),
        }
    }

    /// # Errors
    /// Returns shape or dimension errors when `data` is not a non-empty
    /// rectangular 2-D list.
    pub fn table(&self) -> Result<Table> {
        Table::from_input(&self.data)
    }

    #[must_use]
    pub fn chart_spec(&self) -> BarChartSpec {
        BarChartSpec {
            group_names: self.group_names.clone(),
            entry_names: self.entry_names.clone(),
            appearance: self.appearance.clone(),
        }
    }

    /// # Errors
    /// Returns an invalid parameter error for a non-positive font size.
    pub fn plot_style(&self) -> Result<PlotStyle> {
        let style = PlotStyle::paper(self.style.fontsize, &self.style.font)?;
        Ok(style.with_tex(self.style.use_tex))
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
