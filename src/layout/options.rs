//! Caller-facing layout options.

use serde::{Deserialize, Serialize};

/// Default total width of a stacked bar or of one cluster.
pub const DEFAULT_WIDTH: f64 = 0.8;

/// Default per-bar shrink factor inside a cluster (no gap).
pub const DEFAULT_CLUSTER_SHRINK: f64 = 1.0;

/// Options controlling bar placement. Unset fields take their defaults
/// when the layout is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutOptions {
    /// Stack entries vertically (`true`) or cluster them side by side.
    #[serde(default = "default_true")]
    pub breakdown: bool,

    /// Center x-position of each group. Defaults to `0..groups`.
    #[serde(default)]
    pub xticks: Option<Vec<f64>>,

    /// Width of one stacked bar, or total width of one cluster.
    #[serde(default)]
    pub width: Option<f64>,

    /// Shrink factor for each bar within a cluster, in (0, 1].
    /// Ignored for stacked bars.
    #[serde(default)]
    pub cluster_shrink: Option<f64>,
}

const fn default_true() -> bool {
    true
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            breakdown: true,
            xticks: None,
            width: None,
            cluster_shrink: None,
        }
    }
}

impl LayoutOptions {
    /// Stacked layout with default width and positions.
    #[must_use]
    pub fn stacked() -> Self {
        Self::default()
    }

    /// Clustered layout with default width, positions and no shrink.
    #[must_use]
    pub fn clustered() -> Self {
        Self {
            breakdown: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_xticks(mut self, xticks: impl Into<Vec<f64>>) -> Self {
        self.xticks = Some(xticks.into());
        self
    }

    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub const fn with_cluster_shrink(mut self, shrink: f64) -> Self {
        self.cluster_shrink = Some(shrink);
        self
    }

    /// Width after applying the default.
    #[must_use]
    pub fn resolved_width(&self) -> f64 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }
}
