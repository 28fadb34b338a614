//! Grouped bar layout: turns a groups × entries table into stacked or
//! clustered bar rectangles.
//!
//! The engine is a pure function of its inputs. It never renders anything
//! and always reports true left edges; see [`crate::chart::BarAnchor`] for
//! backends whose bar primitive is center-anchored.

mod engine;
mod options;
mod rect;

pub use engine::{LayoutMode, LayoutResult, layout, layout_data};
pub use options::{DEFAULT_CLUSTER_SHRINK, DEFAULT_WIDTH, LayoutOptions};
pub use rect::Rect;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
