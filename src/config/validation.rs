//! Chart file semantic validation.
//!
//! Checks cross-field constraints the TOML schema cannot express. Value
//! checks that belong to the layout engine or the chart plan (xtick
//! counts, shrink ranges, colors, hatches) are left to those stages so the
//! same rules apply to library callers.

use std::fmt::Write;

use crate::array::ArrayInput;
use crate::config::ChartFile;
use crate::{PaperPlotError, Result};

/// Validates semantic correctness of a chart file.
///
/// # Errors
/// Returns a configuration error if `data` is a bare number or holds a
/// non-finite value, a name is blank, or the style font size is not
/// positive.
pub fn validate_chart_semantics(chart: &ChartFile) -> Result<()> {
    validate_data(chart)?;
    validate_names("group_names", chart.group_names.as_deref())?;
    validate_names("entry_names", chart.entry_names.as_deref())?;
    validate_style_section(chart)?;
    Ok(())
}

fn validate_data(chart: &ChartFile) -> Result<()> {
    match &chart.data {
        ArrayInput::Scalar(value) => Err(PaperPlotError::Config(format!(
            "data must be a list of groups, got the number {value}"
        ))),
        ArrayInput::List(groups) => {
            let mut path = Vec::new();
            check_finite(groups, &mut path)
        }
    }
}

/// `path` holds the indices leading to `items`; a 2-D table reports
/// `data[group][entry]`.
fn check_finite(items: &[ArrayInput], path: &mut Vec<usize>) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        path.push(i);
        match item {
            ArrayInput::Scalar(value) if !value.is_finite() => {
                let mut location = String::new();
                for index in &*path {
                    let _ = write!(location, "[{index}]");
                }
                let detail = match path.as_slice() {
                    [group, entry] => format!(" (group {group}, entry {entry})"),
                    _ => String::new(),
                };
                return Err(PaperPlotError::Config(format!(
                    "data{location}{detail} must be finite, got {value}"
                )));
            }
            ArrayInput::Scalar(_) => {}
            ArrayInput::List(nested) => check_finite(nested, path)?,
        }
        path.pop();
    }
    Ok(())
}

fn validate_names(section: &str, names: Option<&[String]>) -> Result<()> {
    for (i, name) in names.unwrap_or_default().iter().enumerate() {
        if name.trim().is_empty() {
            return Err(PaperPlotError::Config(format!(
                "{section}[{i}] must not be blank"
            )));
        }
    }
    Ok(())
}

fn validate_style_section(chart: &ChartFile) -> Result<()> {
    let size = chart.style.fontsize;
    if !size.is_finite() || size <= 0.0 {
        return Err(PaperPlotError::Config(format!(
            "style.fontsize must be a positive number, got {size}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
