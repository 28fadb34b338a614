//! Paper-ready plot styling as plain data.
//!
//! Nothing here talks to a plotting library. Backends receive a
//! [`PlotStyle`], [`AxesFrame`] or computed labels and apply them.

mod axes;
mod paper;
mod ticks;

pub use axes::{AxesBox, AxesFrame, FigSize, GOLDEN_RATIO, INCHES_PER_PT, TickSide, fig_dims};
pub use paper::{DEFAULT_PAPER_FONT_SIZE, FontFamily, FontSpec, PlotStyle, StyleContext};
pub use ticks::{GroupLabel, group_xticklabels, percent_label};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
