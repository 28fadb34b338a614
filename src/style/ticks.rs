use serde::Serialize;

use crate::error::{PaperPlotError, Result};

/// Tick label for a fraction shown as a whole percentage, e.g. `0.25` → `25%`.
///
/// The percentage is truncated toward zero. Under TeX the percent sign is
/// escaped.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Truncation is the intended rounding
pub fn percent_label(value: f64, use_tex: bool) -> String {
    let percent = (100.0 * value).trunc() as i64;
    if use_tex {
        format!(r"{percent}$\%$")
    } else {
        format!("{percent}%")
    }
}

/// A label drawn once for a group of consecutive ticks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Places one label per group of ticks.
///
/// `xvals` is split into `labels.len()` consecutive chunks of equal size;
/// each label sits at the mean of its chunk, at height `y`.
///
/// # Errors
/// Returns a size mismatch when `xvals` is not a non-zero multiple of the
/// number of labels.
#[allow(clippy::cast_precision_loss)] // Chunk sizes are tiny
pub fn group_xticklabels<S: AsRef<str>>(labels: &[S], xvals: &[f64], y: f64) -> Result<Vec<GroupLabel>> {
    if labels.is_empty() || xvals.is_empty() || xvals.len() % labels.len() != 0 {
        return Err(PaperPlotError::size_mismatch(
            "xvals (must be a multiple of the label count)",
            labels.len(),
            xvals.len(),
        ));
    }

    let chunk = xvals.len() / labels.len();
    Ok(labels
        .iter()
        .zip(xvals.chunks(chunk))
        .map(|(label, xs)| GroupLabel {
            text: label.as_ref().to_string(),
            x: xs.iter().sum::<f64>() / chunk as f64,
            y,
        })
        .collect())
}
