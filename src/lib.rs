//! Layout arithmetic and styling-as-data for paper-ready grouped bar charts.
//!
//! [`layout`] turns a groups × entries [`table::Table`] into stacked or
//! clustered bar rectangles, [`chart`] attaches colors, hatches and labels,
//! and [`color`], [`math`] and [`style`] provide the palette, normalization
//! and figure helpers that go with them. Nothing here renders.

pub mod array;
pub mod chart;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod math;
pub mod output;
pub mod style;
pub mod table;

pub use error::{PaperPlotError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VALIDATION_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
