//! Backend-neutral bar chart drawing plans.
//!
//! A plan combines a layout with colors, edges, hatches, tick labels and a
//! legend, validated against the table's shape. Rendering it is up to the
//! caller's plotting backend.

mod anchor;
mod appearance;
mod plan;

pub use anchor::BarAnchor;
pub use appearance::{Appearance, LabelRotation, LegendLoc, RotationKeyword};
pub use plan::{
    BarChartPlan, BarChartSpec, BarPrimitive, HatchOverlay, LegendPlan, SeriesPlan, TickLabels,
};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
