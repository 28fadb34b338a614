use serde::Serialize;

use crate::layout::Rect;

/// Which point of a bar a backend's bar primitive is positioned by.
///
/// Layouts always carry true left edges; backends that place bars by their
/// center get the offset applied here instead of in the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarAnchor {
    #[default]
    LeftEdge,
    Center,
}

impl BarAnchor {
    /// X argument to hand the backend for `rect`.
    #[must_use]
    pub fn x_for(self, rect: &Rect) -> f64 {
        match self {
            Self::LeftEdge => rect.left,
            Self::Center => rect.center_x(),
        }
    }
}
