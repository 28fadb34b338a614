use serde::Serialize;

use crate::error::{PaperPlotError, Result};

/// Inches per typographic point.
pub const INCHES_PER_PT: f64 = 1.0 / 72.0;

/// Golden ratio conjugate, 0.618...
pub const GOLDEN_RATIO: f64 = 0.618_033_988_749_894_8;

/// Figure dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FigSize {
    pub width: f64,
    pub height: f64,
}

/// Figure of the given width (in points) with golden-ratio height.
#[must_use]
pub fn fig_dims(width_pt: f64) -> FigSize {
    let width = width_pt * INCHES_PER_PT;
    FigSize {
        width,
        height: width * GOLDEN_RATIO,
    }
}

/// Axes position in figure-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxesBox {
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
}

impl AxesBox {
    #[must_use]
    pub const fn new(x0: f64, y0: f64, width: f64, height: f64) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
        }
    }

    /// Shrinks the box by the given ratios.
    ///
    /// By default the right and bottom sides move in; `to_right` keeps the
    /// right side and moves the left one, `to_bottom` keeps the bottom side
    /// and moves the top one.
    ///
    /// # Errors
    /// Returns an invalid parameter error when a ratio is outside (0, 1].
    pub fn resize(&self, wratio: f64, hratio: f64, to_right: bool, to_bottom: bool) -> Result<Self> {
        check_ratio("wratio", wratio)?;
        check_ratio("hratio", hratio)?;

        let width = self.width * wratio;
        let height = self.height * hratio;
        let x0 = if to_right {
            self.width.mul_add(1.0 - wratio, self.x0)
        } else {
            self.x0
        };
        let y0 = if to_bottom {
            self.y0
        } else {
            self.height.mul_add(1.0 - hratio, self.y0)
        };
        Ok(Self::new(x0, y0, width, height))
    }
}

fn check_ratio(name: &str, ratio: f64) -> Result<()> {
    if ratio > 0.0 && ratio <= 1.0 {
        Ok(())
    } else {
        Err(PaperPlotError::invalid_parameter(
            name,
            ratio,
            "must be in (0, 1]",
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickSide {
    Bottom,
    Top,
    Left,
    Right,
    Both,
}

/// Spine visibility and tick placement of one axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxesFrame {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    pub xticks: TickSide,
    pub yticks: TickSide,
}

impl Default for AxesFrame {
    fn default() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
            xticks: TickSide::Both,
            yticks: TickSide::Both,
        }
    }
}

impl AxesFrame {
    /// Open box: no top or right spine, ticks only at bottom and left.
    ///
    /// A twin axes sharing the x axis keeps its right spine and puts its
    /// y ticks on the right.
    pub fn turn_off_box(&mut self, twin: Option<&mut Self>) {
        self.top = false;
        self.right = false;
        self.xticks = TickSide::Bottom;
        self.yticks = TickSide::Left;

        if let Some(twin) = twin {
            twin.top = false;
            twin.left = false;
            twin.right = true;
            twin.xticks = TickSide::Bottom;
            twin.yticks = TickSide::Right;
        }
    }
}
