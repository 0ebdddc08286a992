//! Two-dimensional table keyed by fixed label sets.
//!
//! Every access validates both labels; an out-of-set label is an error, not
//! a silent no-op. Cells start empty, so "not yet computed" and "computed"
//! are distinct states.

use serde_json::{Map, Value};

use crate::error::{BjError, BjResult};

/// Relative tolerance for distribution checks.
pub const REL_TOL: f64 = 1e-9;

/// Whether two floats agree within `REL_TOL`.
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= REL_TOL * a.abs().max(b.abs())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    name: &'static str,
    xlabels: Vec<&'static str>,
    ylabels: Vec<&'static str>,
    cells: Vec<Option<T>>,
}

impl<T> Table<T> {
    pub fn new(name: &'static str, xlabels: &[&'static str], ylabels: &[&'static str]) -> Table<T> {
        let cells = std::iter::repeat_with(|| None)
            .take(xlabels.len() * ylabels.len())
            .collect();
        Table {
            name,
            xlabels: xlabels.to_vec(),
            ylabels: ylabels.to_vec(),
            cells,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn xlabels(&self) -> &[&'static str] {
        &self.xlabels
    }

    pub fn ylabels(&self) -> &[&'static str] {
        &self.ylabels
    }

    fn index(&self, row: &str, col: &str) -> BjResult<usize> {
        let y = self
            .ylabels
            .iter()
            .position(|&label| label == row)
            .ok_or_else(|| BjError::InvalidRowLabel {
                table: self.name,
                label: row.to_string(),
            })?;
        let x = self
            .xlabels
            .iter()
            .position(|&label| label == col)
            .ok_or_else(|| BjError::InvalidColumnLabel {
                table: self.name,
                label: col.to_string(),
            })?;
        Ok(y * self.xlabels.len() + x)
    }

    /// Read a cell. `Ok(None)` means the cell has not been set.
    pub fn get(&self, row: &str, col: &str) -> BjResult<Option<&T>> {
        Ok(self.cells[self.index(row, col)?].as_ref())
    }

    pub fn set(&mut self, row: &str, col: &str, value: T) -> BjResult<()> {
        let i = self.index(row, col)?;
        self.cells[i] = Some(value);
        Ok(())
    }

    /// Value of a cell the pipeline must already have filled.
    pub fn value(&self, row: &str, col: &str) -> BjResult<T>
    where
        T: Clone,
    {
        self.get(row, col)?
            .cloned()
            .ok_or_else(|| BjError::EmptyCell {
                table: self.name,
                row: row.to_string(),
                col: col.to_string(),
            })
    }
}

impl Table<f64> {
    /// Add into a cell, treating an empty cell as zero mass.
    pub fn accumulate(&mut self, row: &str, col: &str, amount: f64) -> BjResult<()> {
        let i = self.index(row, col)?;
        *self.cells[i].get_or_insert(0.0) += amount;
        Ok(())
    }

    /// Sum of every filled cell.
    pub fn total(&self) -> f64 {
        self.cells.iter().flatten().sum()
    }
}

impl<T: serde::Serialize> Table<T> {
    /// Nested row → column → value view, omitting empty cells.
    pub fn to_json(&self) -> Value {
        let mut rows = Map::new();
        for &row in &self.ylabels {
            let mut cols = Map::new();
            for &col in &self.xlabels {
                if let Ok(Some(value)) = self.get(row, col) {
                    let json = serde_json::to_value(value).unwrap_or(Value::Null);
                    cols.insert(col.to_string(), json);
                }
            }
            rows.insert(row.to_string(), Value::Object(cols));
        }
        Value::Object(rows)
    }
}
