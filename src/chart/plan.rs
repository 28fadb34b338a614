use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::color::{ColorSpec, Rgb, default_colors};
use crate::error::{PaperPlotError, Result};
use crate::layout::{LayoutOptions, LayoutResult, Rect, layout};
use crate::table::Table;

use super::anchor::BarAnchor;
use super::appearance::{Appearance, LabelRotation, LegendLoc};

/// Hatch patterns are built from these marks, each optionally repeated for density.
static HATCH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[/\\|\-+xoO.*]+$").expect("Invalid regex"));

/// Everything needed to draw a bar chart, minus the drawing itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarChartSpec {
    pub group_names: Option<Vec<String>>,
    pub entry_names: Option<Vec<String>>,
    pub appearance: Appearance,
}

impl BarChartSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_group_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.group_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_entry_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.entry_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }
}

/// One bar primitive: the backend's x argument plus the true geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarPrimitive {
    pub x: f64,
    pub rect: Rect,
}

/// Unfilled polygons drawn over an entry's bars to show its hatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HatchOverlay {
    pub pattern: String,
    pub color: Rgb,
    pub polygons: Vec<[[f64; 2]; 4]>,
}

/// All bars of one entry with their shared styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPlan {
    pub entry: usize,
    pub name: Option<String>,
    pub fill: Rgb,
    pub edge: Option<Rgb>,
    pub linewidth: f64,
    pub hatch: Option<HatchOverlay>,
    pub bars: Vec<BarPrimitive>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickLabels {
    pub positions: Vec<f64>,
    pub labels: Vec<String>,
    pub fontsize: Option<f64>,
    pub rotation: LabelRotation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendPlan {
    pub labels: Vec<String>,
    pub loc: LegendLoc,
    pub columns: usize,
}

/// Backend-neutral drawing instructions for a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartPlan {
    pub anchor: BarAnchor,
    pub series: Vec<SeriesPlan>,
    pub xtick_labels: Option<TickLabels>,
    pub legend: Option<LegendPlan>,
    pub xlim: [f64; 2],
    pub log_scale: bool,
    #[serde(skip)]
    layout: LayoutResult,
}

impl BarChartPlan {
    /// Lays out `table` and attaches per-entry styling.
    ///
    /// # Errors
    /// Returns layout validation errors first, then size mismatches for
    /// names, colors and hatches, then invalid colors, hatch patterns or
    /// decoration parameters.
    pub fn build(
        table: &Table,
        options: &LayoutOptions,
        spec: &BarChartSpec,
        anchor: BarAnchor,
    ) -> Result<Self> {
        let layout = layout(table, options)?;
        let (groups, entries) = (table.num_groups(), table.num_entries());
        let appearance = &spec.appearance;

        check_len("group_names", spec.group_names.as_deref(), groups)?;
        check_len("entry_names", spec.entry_names.as_deref(), entries)?;
        let fills = resolve_fills(appearance, entries)?;
        let hatches = resolve_hatches(appearance, entries)?;
        check_decorations(appearance)?;

        let edge = if appearance.edgecolor.is_none() {
            None
        } else {
            Some(appearance.edgecolor.resolve()?)
        };
        let hatch_color = appearance.hatchcolor.resolve()?;

        let series = fills
            .into_iter()
            .zip(hatches)
            .enumerate()
            .map(|(e, (fill, hatch))| {
                let rects = layout.rects(e);
                SeriesPlan {
                    entry: e,
                    name: spec.entry_names.as_ref().map(|names| names[e].clone()),
                    fill,
                    edge,
                    linewidth: appearance.linewidth,
                    hatch: hatch.map(|pattern| HatchOverlay {
                        pattern,
                        color: hatch_color,
                        polygons: rects.iter().map(Rect::corners).collect(),
                    }),
                    bars: rects
                        .iter()
                        .map(|rect| BarPrimitive {
                            x: anchor.x_for(rect),
                            rect: *rect,
                        })
                        .collect(),
                }
            })
            .collect();

        let xtick_labels = spec.group_names.as_ref().map(|names| TickLabels {
            positions: layout.xticks().to_vec(),
            labels: names.clone(),
            fontsize: appearance.xticklabel_fontsize,
            rotation: appearance.xticklabel_rotation,
        });
        let legend = spec.entry_names.as_ref().map(|names| LegendPlan {
            labels: names.clone(),
            loc: appearance.legend_loc,
            columns: appearance.legend_columns,
        });

        Ok(Self {
            anchor,
            series,
            xtick_labels,
            legend,
            xlim: layout.xlim(),
            log_scale: appearance.log,
            layout,
        })
    }

    /// The geometry the plan was built from.
    #[must_use]
    pub const fn layout(&self) -> &LayoutResult {
        &self.layout
    }
}

fn check_len(what: &str, items: Option<&[String]>, expected: usize) -> Result<()> {
    match items {
        Some(items) if items.len() != expected => {
            Err(PaperPlotError::size_mismatch(what, expected, items.len()))
        }
        _ => Ok(()),
    }
}

fn resolve_fills(appearance: &Appearance, entries: usize) -> Result<Vec<Rgb>> {
    match &appearance.colors {
        None => default_colors(entries),
        Some(colors) if colors.len() < entries => {
            Err(PaperPlotError::size_mismatch("colors", entries, colors.len()))
        }
        Some(colors) => colors.iter().take(entries).map(ColorSpec::resolve).collect(),
    }
}

fn resolve_hatches(appearance: &Appearance, entries: usize) -> Result<Vec<Option<String>>> {
    let Some(hatches) = &appearance.hatches else {
        return Ok(vec![None; entries]);
    };
    if hatches.len() != entries {
        return Err(PaperPlotError::size_mismatch("hatches", entries, hatches.len()));
    }
    hatches
        .iter()
        .map(|pattern| {
            if pattern.is_empty() {
                Ok(None)
            } else if HATCH_PATTERN.is_match(pattern) {
                Ok(Some(pattern.clone()))
            } else {
                Err(PaperPlotError::InvalidHatch(pattern.clone()))
            }
        })
        .collect()
}

fn check_decorations(appearance: &Appearance) -> Result<()> {
    if appearance.legend_columns == 0 {
        return Err(PaperPlotError::invalid_parameter(
            "legend_columns",
            0,
            "must be at least 1",
        ));
    }
    if !appearance.linewidth.is_finite() || appearance.linewidth < 0.0 {
        return Err(PaperPlotError::invalid_parameter(
            "linewidth",
            appearance.linewidth,
            "must be a non-negative number",
        ));
    }
    if let Some(size) = appearance.xticklabel_fontsize
        && (!size.is_finite() || size <= 0.0)
    {
        return Err(PaperPlotError::invalid_parameter(
            "xticklabel_fontsize",
            size,
            "must be a positive number",
        ));
    }
    Ok(())
}
