//! Rectangular n-dimensional arrays built from nested numeric input.

use serde::{Deserialize, Serialize};

use crate::error::{PaperPlotError, Result};

/// Nested numeric input as it arrives from callers or chart files.
///
/// `[[1.0, 2.0], [3.0, 4.0]]` deserializes as a list of lists of scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayInput {
    Scalar(f64),
    List(Vec<ArrayInput>),
}

impl From<f64> for ArrayInput {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for ArrayInput {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Dense row-major array of `f64` with an explicit shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NdArray {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl NdArray {
    /// Builds an array from a shape and row-major values.
    ///
    /// # Errors
    /// Returns a shape error if the number of values does not match the shape.
    pub fn new(shape: Vec<usize>, data: Vec<f64>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(PaperPlotError::Shape(format!(
                "shape {shape:?} holds {expected} value(s), got {}",
                data.len()
            )));
        }
        Ok(Self { shape, data })
    }

    pub(crate) const fn from_parts(shape: Vec<usize>, data: Vec<f64>) -> Self {
        Self { shape, data }
    }

    /// Rank-0 array holding a single value.
    #[must_use]
    pub fn scalar(value: f64) -> Self {
        Self {
            shape: Vec::new(),
            data: vec![value],
        }
    }

    /// Coerces nested input into a rectangular array.
    ///
    /// # Errors
    /// Returns a shape error when sibling lists differ in length or nesting depth.
    pub fn from_input(input: &ArrayInput) -> Result<Self> {
        let shape = infer_shape(input, &mut Vec::new())?;
        let mut data = Vec::with_capacity(shape.iter().product());
        flatten_into(input, &mut data);
        Ok(Self { shape, data })
    }

    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Value at a multi-index, or `None` when the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        if index.len() != self.shape.len() || index.iter().zip(&self.shape).any(|(i, n)| i >= n) {
            return None;
        }
        Some(self.data[self.flat_index(index)])
    }

    pub(crate) fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1; self.shape.len()];
        for axis in (0..self.shape.len().saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * self.shape[axis + 1];
        }
        strides
    }

    pub(crate) fn flat_index(&self, index: &[usize]) -> usize {
        index
            .iter()
            .zip(self.strides())
            .map(|(i, stride)| i * stride)
            .sum()
    }

    /// Multi-index of a flat row-major position.
    pub(crate) fn unravel(&self, mut flat: usize) -> Vec<usize> {
        let mut index = vec![0; self.shape.len()];
        for axis in (0..self.shape.len()).rev() {
            let extent = self.shape[axis];
            if extent > 0 {
                index[axis] = flat % extent;
                flat /= extent;
            }
        }
        index
    }
}

fn infer_shape(input: &ArrayInput, path: &mut Vec<usize>) -> Result<Vec<usize>> {
    match input {
        ArrayInput::Scalar(_) => Ok(Vec::new()),
        ArrayInput::List(items) => {
            let mut child_shape: Option<Vec<usize>> = None;
            for (i, item) in items.iter().enumerate() {
                path.push(i);
                let shape = infer_shape(item, path)?;
                path.pop();
                match &child_shape {
                    None => child_shape = Some(shape),
                    Some(first) if *first != shape => {
                        return Err(PaperPlotError::Shape(format!(
                            "ragged input at {}: element {i} has shape {shape:?}, expected {first:?}",
                            describe_path(path)
                        )));
                    }
                    Some(_) => {}
                }
            }
            let mut shape = vec![items.len()];
            shape.extend(child_shape.unwrap_or_default());
            Ok(shape)
        }
    }
}

fn describe_path(path: &[usize]) -> String {
    if path.is_empty() {
        return "top level".to_string();
    }
    path.iter().map(|i| format!("[{i}]")).collect()
}

fn flatten_into(input: &ArrayInput, out: &mut Vec<f64>) {
    match input {
        ArrayInput::Scalar(v) => out.push(*v),
        ArrayInput::List(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
    }
}

#[cfg(test)]
#[path = "array_tests.rs"]
mod tests;
