//! Validated groups × entries table consumed by the layout engine.

use serde::Serialize;

use crate::array::{ArrayInput, NdArray};
use crate::error::{PaperPlotError, Result};

/// Immutable 2-D table: one row per group, one column per entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    groups: usize,
    entries: usize,
    values: Vec<f64>,
}

impl Table {
    /// Builds a table from per-group rows.
    ///
    /// # Errors
    /// Returns a shape error for ragged rows and a dimension error when
    /// there are no groups or no entries.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let entries = rows.first().map_or(0, |row| row.as_ref().len());
        let mut values = Vec::with_capacity(rows.len() * entries);
        for (g, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != entries {
                return Err(PaperPlotError::Shape(format!(
                    "group {g} has {} entries, expected {entries}",
                    row.len()
                )));
            }
            values.extend_from_slice(row);
        }
        Self::checked(rows.len(), entries, values)
    }

    /// Coerces nested input into a table.
    ///
    /// # Errors
    /// Returns a shape error for ragged input, a dimension error when the
    /// input is not exactly 2-D or is empty.
    pub fn from_input(input: &ArrayInput) -> Result<Self> {
        Self::try_from(NdArray::from_input(input)?)
    }

    fn checked(groups: usize, entries: usize, values: Vec<f64>) -> Result<Self> {
        if groups == 0 || entries == 0 {
            return Err(PaperPlotError::EmptyTable { groups, entries });
        }
        Ok(Self {
            groups,
            entries,
            values,
        })
    }

    #[must_use]
    pub const fn num_groups(&self) -> usize {
        self.groups
    }

    #[must_use]
    pub const fn num_entries(&self) -> usize {
        self.entries
    }

    #[must_use]
    pub fn value(&self, group: usize, entry: usize) -> f64 {
        self.values[group * self.entries + entry]
    }

    /// All entry values of one group.
    #[must_use]
    pub fn row(&self, group: usize) -> &[f64] {
        let start = group * self.entries;
        &self.values[start..start + self.entries]
    }

    /// Values of one entry across all groups, in group order.
    pub fn column(&self, entry: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().skip(entry).step_by(self.entries).copied()
    }

    /// Sum of each group's entries, accumulated in entry order.
    #[must_use]
    pub fn row_sums(&self) -> Vec<f64> {
        (0..self.groups)
            .map(|g| self.row(g).iter().fold(0.0, |acc, v| acc + v))
            .collect()
    }
}

impl TryFrom<NdArray> for Table {
    type Error = PaperPlotError;

    fn try_from(array: NdArray) -> Result<Self> {
        if array.ndim() != 2 {
            return Err(PaperPlotError::Dimension {
                expected: 2,
                actual: array.ndim(),
            });
        }
        let (groups, entries) = (array.shape()[0], array.shape()[1]);
        Self::checked(groups, entries, array.into_vec())
    }
}

impl From<&Table> for NdArray {
    fn from(table: &Table) -> Self {
        Self::from_parts(vec![table.groups, table.entries], table.values.clone())
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
