//!
//! The column layout of a benchmark report table.
//!

use std::ops::Range;

use crate::input::row::Row;

///
/// The column layout of a benchmark report table, discovered from its header row.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    /// The index of the method name column.
    pub method: usize,
    /// The index of the runtime column, if the table distinguishes runtimes.
    pub runtime: Option<usize>,
    /// The index of the mean duration column.
    pub mean: usize,
    /// The index of the allocated memory column, if the table reports allocations.
    pub allocated: Option<usize>,
}

impl Columns {
    /// The method name column label.
    pub const LABEL_METHOD: &'static str = "Method";
    /// The runtime column label.
    pub const LABEL_RUNTIME: &'static str = "Runtime";
    /// The mean duration column label.
    pub const LABEL_MEAN: &'static str = "Mean";
    /// The allocated memory column label.
    pub const LABEL_ALLOCATED: &'static str = "Allocated";

    ///
    /// Discovers the layout from the header row.
    ///
    /// Returns `None` when the method or mean column is missing, which makes the
    /// table unrecognized. Tables repeating the mean column per measurement group
    /// are resolved to the last occurrence. The allocated column only counts when
    /// it follows the mean column, since allocation sizes to the left of it belong
    /// to another measurement group.
    ///
    pub fn discover(header: &Row) -> Option<Self> {
        let labels = header.columns.as_slice();
        let method = labels.iter().position(|label| label == Self::LABEL_METHOD)?;
        let runtime = labels.iter().position(|label| label == Self::LABEL_RUNTIME);
        let mean = labels.iter().rposition(|label| label == Self::LABEL_MEAN)?;
        let allocated = labels
            .iter()
            .enumerate()
            .skip(mean)
            .find(|(_index, label)| label.as_str() == Self::LABEL_ALLOCATED)
            .map(|(index, _label)| index);
        Some(Self {
            method,
            runtime,
            mean,
            allocated,
        })
    }

    ///
    /// The range of dimension columns: everything between the identity columns and
    /// the mean column. The range may be empty.
    ///
    pub fn dimensions(&self) -> Range<usize> {
        let start = match self.runtime {
            Some(runtime) => self.method.max(runtime) + 1,
            None => self.method + 1,
        };
        start..self.mean
    }

    ///
    /// Joins the dimension cells of a row into a category string.
    ///
    /// Applied to the header row itself, this yields the category axis title.
    ///
    pub fn join_dimensions(&self, row: &Row) -> String {
        self.dimensions()
            .map(|index| row.cell(index))
            .collect::<Vec<&str>>()
            .join(", ")
    }

    ///
    /// The method name cell of a row.
    ///
    pub fn method<'a>(&self, row: &'a Row) -> &'a str {
        row.cell(self.method)
    }

    ///
    /// The runtime cell of a row, when the table distinguishes runtimes.
    ///
    pub fn runtime<'a>(&self, row: &'a Row) -> Option<&'a str> {
        self.runtime.map(|index| row.cell(index))
    }

    ///
    /// The mean duration cell of a row.
    ///
    pub fn duration<'a>(&self, row: &'a Row) -> &'a str {
        row.cell(self.mean)
    }

    ///
    /// The allocated memory cell of a row. `None` when the table has no allocated
    /// column or the row is too short to reach it.
    ///
    pub fn allocation<'a>(&self, row: &'a Row) -> Option<&'a str> {
        self.allocated
            .and_then(|index| row.columns.get(index).map(String::as_str))
    }
}
