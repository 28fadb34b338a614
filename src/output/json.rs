use serde::Serialize;

use crate::chart::BarChartPlan;
use crate::color::Rgb;
use crate::error::Result;
use crate::layout::LayoutResult;
use crate::style::{FigSize, PlotStyle};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonLayout<'a> {
    num_groups: usize,
    num_entries: usize,
    xlim: [f64; 2],
    #[serde(flatten)]
    layout: &'a LayoutResult,
}

#[derive(Serialize)]
struct JsonPlan<'a> {
    #[serde(flatten)]
    plan: &'a BarChartPlan,
    style: &'a PlotStyle,
}

#[derive(Serialize)]
struct JsonPalette<'a> {
    count: usize,
    colors: &'a [Rgb],
}

#[derive(Serialize)]
struct JsonFigSize {
    width_pt: f64,
    width_in: f64,
    height_in: f64,
}

impl OutputFormatter for JsonFormatter {
    fn format_layout(&self, layout: &LayoutResult) -> Result<String> {
        let output = JsonLayout {
            num_groups: layout.num_groups(),
            num_entries: layout.num_entries(),
            xlim: layout.xlim(),
            layout,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_plan(&self, plan: &BarChartPlan, style: &PlotStyle) -> Result<String> {
        Ok(serde_json::to_string_pretty(&JsonPlan { plan, style })?)
    }

    fn format_palette(&self, colors: &[Rgb]) -> Result<String> {
        let output = JsonPalette {
            count: colors.len(),
            colors,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_fig_size(&self, width_pt: f64, size: &FigSize) -> Result<String> {
        let output = JsonFigSize {
            width_pt,
            width_in: size.width,
            height_in: size.height,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
