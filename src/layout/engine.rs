use serde::Serialize;

use crate::array::ArrayInput;
use crate::error::{PaperPlotError, Result};
use crate::table::Table;

use super::options::{DEFAULT_CLUSTER_SHRINK, LayoutOptions};
use super::rect::Rect;

/// How entries of one group are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// One bar per group, entries stacked bottom-up.
    Stacked,
    /// One bar per entry, placed left to right inside the group's slot.
    Clustered,
}

/// Bar geometry for every entry across every group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    mode: LayoutMode,
    /// Rendered width of each individual bar.
    bar_width: f64,
    /// Width reserved for one bar before shrinking.
    slot_width: f64,
    cluster_shrink: f64,
    xticks: Vec<f64>,
    /// `entries[e][g]` is the rectangle of entry `e` in group `g`.
    entries: Vec<Vec<Rect>>,
}

impl LayoutResult {
    #[must_use]
    pub const fn mode(&self) -> LayoutMode {
        self.mode
    }

    #[must_use]
    pub const fn bar_width(&self) -> f64 {
        self.bar_width
    }

    #[must_use]
    pub const fn slot_width(&self) -> f64 {
        self.slot_width
    }

    #[must_use]
    pub const fn cluster_shrink(&self) -> f64 {
        self.cluster_shrink
    }

    /// Resolved group centers, used for tick placement.
    #[must_use]
    pub fn xticks(&self) -> &[f64] {
        &self.xticks
    }

    #[must_use]
    pub fn num_groups(&self) -> usize {
        self.xticks.len()
    }

    #[must_use]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// Rectangles of one entry, in group order.
    ///
    /// # Panics
    /// Panics if `entry >= self.num_entries()`.
    #[must_use]
    pub fn rects(&self, entry: usize) -> &[Rect] {
        &self.entries[entry]
    }

    /// # Panics
    /// Panics if `group` or `entry` is out of range. See [`Self::get_rect`].
    #[must_use]
    pub fn rect(&self, group: usize, entry: usize) -> Rect {
        self.entries[entry][group]
    }

    /// Rectangle at (`group`, `entry`), or `None` when either is out of range.
    #[must_use]
    pub fn get_rect(&self, group: usize, entry: usize) -> Option<Rect> {
        self.entries.get(entry)?.get(group).copied()
    }

    /// Rectangles of one group, in entry order.
    ///
    /// # Panics
    /// The iterator panics on its first item if `group >= self.num_groups()`.
    pub fn group_rects(&self, group: usize) -> impl Iterator<Item = Rect> + '_ {
        self.entries.iter().map(move |rects| rects[group])
    }

    pub fn iter_entries(&self) -> impl Iterator<Item = &[Rect]> {
        self.entries.iter().map(Vec::as_slice)
    }

    /// X-axis limits leaving one unit of margin around the outer groups.
    #[must_use]
    pub fn xlim(&self) -> [f64; 2] {
        let first = self.xticks.first().copied().unwrap_or_default();
        let last = self.xticks.last().copied().unwrap_or_default();
        [first - 1.0, last + 1.0]
    }
}

/// Coerces nested input into a table and lays it out.
///
/// # Errors
/// Returns the first validation error in order: ragged input, rank other
/// than 2 or an empty table, then any option error reported by [`layout`].
pub fn layout_data(data: &ArrayInput, options: &LayoutOptions) -> Result<LayoutResult> {
    let table = Table::from_input(data)?;
    layout(&table, options)
}

/// Computes stacked or clustered bar rectangles for `table`.
///
/// Rectangles carry the true left edge of each bar; anchoring to a
/// backend's bar primitive is left to the caller.
///
/// # Errors
/// Returns a size mismatch when `xticks` does not have one position per
/// group, and an invalid parameter error for a cluster shrink outside
/// (0, 1], a non-positive width, or non-finite positions.
pub fn layout(table: &Table, options: &LayoutOptions) -> Result<LayoutResult> {
    let params = Resolved::new(table, options)?;
    let entries = match params.mode {
        LayoutMode::Stacked => stacked(table, &params),
        LayoutMode::Clustered => clustered(table, &params),
    };

    Ok(LayoutResult {
        mode: params.mode,
        bar_width: params.slot_width * params.shrink,
        slot_width: params.slot_width,
        cluster_shrink: params.shrink,
        xticks: params.xticks,
        entries,
    })
}

/// Options after defaults and validation.
struct Resolved {
    mode: LayoutMode,
    slot_width: f64,
    shrink: f64,
    xticks: Vec<f64>,
}

impl Resolved {
    #[allow(clippy::cast_precision_loss)] // Group counts are far below 2^52
    fn new(table: &Table, options: &LayoutOptions) -> Result<Self> {
        let groups = table.num_groups();
        let xticks = match &options.xticks {
            Some(xticks) if xticks.len() != groups => {
                return Err(PaperPlotError::size_mismatch("xticks", groups, xticks.len()));
            }
            Some(xticks) => xticks.clone(),
            None => (0..groups).map(|g| g as f64).collect(),
        };

        let (mode, shrink) = if options.breakdown {
            (LayoutMode::Stacked, DEFAULT_CLUSTER_SHRINK)
        } else {
            let shrink = options.cluster_shrink.unwrap_or(DEFAULT_CLUSTER_SHRINK);
            validate_shrink(shrink)?;
            (LayoutMode::Clustered, shrink)
        };

        let width = options.resolved_width();
        if !width.is_finite() || width <= 0.0 {
            return Err(PaperPlotError::invalid_parameter(
                "width",
                width,
                "must be a positive finite number",
            ));
        }
        if let Some((g, x)) = xticks.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            return Err(PaperPlotError::invalid_parameter(
                format!("xticks[{g}]"),
                x,
                "must be finite",
            ));
        }

        let slot_width = match mode {
            LayoutMode::Stacked => width,
            LayoutMode::Clustered => width / table.num_entries() as f64,
        };

        Ok(Self {
            mode,
            slot_width,
            shrink,
            xticks,
        })
    }
}

fn validate_shrink(shrink: f64) -> Result<()> {
    if shrink > 1.0 {
        return Err(PaperPlotError::invalid_parameter(
            "cluster_shrink",
            shrink,
            "must be no more than 1",
        ));
    }
    if !shrink.is_finite() || shrink <= 0.0 {
        return Err(PaperPlotError::invalid_parameter(
            "cluster_shrink",
            shrink,
            "must be greater than 0",
        ));
    }
    Ok(())
}

fn stacked(table: &Table, params: &Resolved) -> Vec<Vec<Rect>> {
    let width = params.slot_width;
    let lefts: Vec<f64> = params
        .xticks
        .iter()
        .map(|x| width.mul_add(-0.5, *x))
        .collect();
    let mut bottoms = vec![0.0; table.num_groups()];

    (0..table.num_entries())
        .map(|e| {
            lefts
                .iter()
                .zip(bottoms.iter_mut())
                .zip(table.column(e))
                .map(|((&left, bottom), value)| {
                    let rect = Rect::new(left, *bottom, width, value);
                    *bottom += value;
                    rect
                })
                .collect()
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)] // Entry counts are far below 2^52
fn clustered(table: &Table, params: &Resolved) -> Vec<Vec<Rect>> {
    let slot = params.slot_width;
    let entries = table.num_entries() as f64;
    let nudge = (1.0 - params.shrink) * slot / 2.0;
    let bar_width = slot * params.shrink;
    let cluster_lefts: Vec<f64> = params
        .xticks
        .iter()
        .map(|x| x - slot * entries / 2.0)
        .collect();

    (0..table.num_entries())
        .map(|e| {
            let offset = (e as f64).mul_add(slot, nudge);
            cluster_lefts
                .iter()
                .zip(table.column(e))
                .map(|(&cluster_left, value)| Rect::new(cluster_left + offset, 0.0, bar_width, value))
                .collect()
        })
        .collect()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
