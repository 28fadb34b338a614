use serde::Serialize;

/// Axis-aligned bar rectangle in data coordinates.
///
/// `left` is always the true left edge. `height` may be negative, in which
/// case the bar extends below `bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.bottom + self.height
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.width.mul_add(0.5, self.left)
    }

    /// Corners in drawing order: bottom-left, top-left, top-right, bottom-right.
    #[must_use]
    pub fn corners(&self) -> [[f64; 2]; 4] {
        let (right, top) = (self.right(), self.top());
        [
            [self.left, self.bottom],
            [self.left, top],
            [right, top],
            [right, self.bottom],
        ]
    }
}
