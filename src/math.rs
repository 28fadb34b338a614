//! Presentation helpers over n-D arrays: normalization and geometric mean.

use serde::{Deserialize, Serialize};

use crate::array::NdArray;
use crate::error::{PaperPlotError, Result};

/// Which axes an operation works along.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisSelection {
    /// Every axis of the array.
    #[default]
    All,
    /// A single axis; negative values count from the last axis.
    One(isize),
    /// Several axes. An empty list selects no axis at all.
    Many(Vec<isize>),
}

/// Position along each selected axis of the element used as denominator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexSelection {
    /// Index 0 along every selected axis.
    #[default]
    Default,
    One(isize),
    Many(Vec<isize>),
}

impl From<isize> for AxisSelection {
    fn from(axis: isize) -> Self {
        Self::One(axis)
    }
}

impl From<Vec<isize>> for AxisSelection {
    fn from(axes: Vec<isize>) -> Self {
        Self::Many(axes)
    }
}

impl From<isize> for IndexSelection {
    fn from(index: isize) -> Self {
        Self::One(index)
    }
}

impl From<Vec<isize>> for IndexSelection {
    fn from(indices: Vec<isize>) -> Self {
        Self::Many(indices)
    }
}

impl AxisSelection {
    /// Resolves to concrete, distinct, in-range axes in selection order.
    ///
    /// # Errors
    /// Returns an invalid parameter error for out-of-range or repeated axes.
    pub fn resolve(&self, ndim: usize) -> Result<Vec<usize>> {
        let requested: Vec<isize> = match self {
            Self::All => return Ok((0..ndim).collect()),
            Self::One(axis) => vec![*axis],
            Self::Many(axes) => axes.clone(),
        };

        let mut resolved = Vec::with_capacity(requested.len());
        for axis in requested {
            let concrete = wrap(axis, ndim).ok_or_else(|| {
                PaperPlotError::invalid_parameter(
                    "axis",
                    axis,
                    format!("out of range for a {ndim}-dimensional array"),
                )
            })?;
            if resolved.contains(&concrete) {
                return Err(PaperPlotError::invalid_parameter(
                    "axis",
                    axis,
                    "duplicate axis",
                ));
            }
            resolved.push(concrete);
        }
        Ok(resolved)
    }
}

impl IndexSelection {
    /// Resolves one index per axis, padding with 0 and dropping extras.
    ///
    /// # Errors
    /// Returns an invalid parameter error when an index is out of range for
    /// its axis.
    pub fn resolve(&self, axes: &[usize], shape: &[usize]) -> Result<Vec<usize>> {
        let requested: Vec<isize> = match self {
            Self::Default => Vec::new(),
            Self::One(index) => vec![*index],
            Self::Many(indices) => indices.clone(),
        };

        axes.iter()
            .enumerate()
            .map(|(i, &axis)| {
                let index = requested.get(i).copied().unwrap_or(0);
                wrap(index, shape[axis]).ok_or_else(|| {
                    PaperPlotError::invalid_parameter(
                        "index",
                        index,
                        format!("out of range for axis {axis} of size {}", shape[axis]),
                    )
                })
            })
            .collect()
    }
}

fn wrap(value: isize, len: usize) -> Option<usize> {
    let len = isize::try_from(len).ok()?;
    let wrapped = if value < 0 { value + len } else { value };
    (0..len).contains(&wrapped).then(|| wrapped.unsigned_abs())
}

/// Divides every element by the element at `index` along `axis`.
///
/// Subarrays spanning the selected axes are normalized together: each
/// element is divided by the member of its subarray at the selected index.
/// Selecting no axis divides every element by itself.
///
/// # Errors
/// Returns an invalid parameter error for bad axes or indices.
pub fn normalize(data: &NdArray, axis: &AxisSelection, index: &IndexSelection) -> Result<NdArray> {
    let axes = axis.resolve(data.ndim())?;
    if data.is_empty() {
        return Ok(data.clone());
    }
    let indices = index.resolve(&axes, data.shape())?;

    let values = data.as_slice();
    let normalized = (0..values.len())
        .map(|flat| {
            let mut at = data.unravel(flat);
            for (&axis, &i) in axes.iter().zip(&indices) {
                at[axis] = i;
            }
            values[flat] / values[data.flat_index(&at)]
        })
        .collect();

    Ok(NdArray::from_parts(data.shape().to_vec(), normalized))
}

/// Geometric mean along `axis`; the reduced axes are removed from the shape.
///
/// # Errors
/// Returns an invalid parameter error for bad axes, or when the reduction
/// covers no elements.
#[allow(clippy::cast_precision_loss)] // Element counts are far below 2^52
pub fn geomean(data: &NdArray, axis: &AxisSelection) -> Result<NdArray> {
    let axes = axis.resolve(data.ndim())?;
    let count: usize = axes.iter().map(|&a| data.shape()[a]).product();
    if count == 0 {
        return Err(PaperPlotError::invalid_parameter(
            "axis",
            format!("{axis:?}"),
            "geometric mean over zero elements",
        ));
    }

    let kept: Vec<usize> = (0..data.ndim()).filter(|a| !axes.contains(a)).collect();
    let out_shape: Vec<usize> = kept.iter().map(|&a| data.shape()[a]).collect();
    let out = NdArray::from_parts(out_shape.clone(), Vec::new());
    let mut products = vec![1.0; out_shape.iter().product()];

    for (flat, value) in data.as_slice().iter().enumerate() {
        let at = data.unravel(flat);
        let kept_at: Vec<usize> = kept.iter().map(|&a| at[a]).collect();
        products[out.flat_index(&kept_at)] *= value;
    }

    let exponent = 1.0 / count as f64;
    let means = products.into_iter().map(|p| p.powf(exponent)).collect();
    Ok(NdArray::from_parts(out_shape, means))
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
