//!
//! The benchmark report input.
//!

pub mod error;
pub mod row;


use std::path::Path;

use self::error::Error;
use self::row::Row;

///
/// The benchmark report: the tokenized rows of the pipe table found in the input text.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// The table rows in source order, the header row first.
    pub rows: Vec<Row>,
}

impl Report {
    ///
    /// Tokenizes a benchmark report text into table rows.
    ///
    /// Keeps only trimmed lines bounded by `|` on both sides, then drops the line at
    /// position 1 among them regardless of content, since the header separator of a
    /// well-formed table sits there. Rows whose cells are all empty are dropped as well.
    ///
    /// Never fails: text without a single table line yields an empty report.
    ///
    pub fn from_text(text: &str) -> Self {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| line.len() > 2 && line.starts_with('|') && line.ends_with('|'))
            .enumerate()
            .filter(|(index, _line)| *index != 1)
            .map(|(_index, line)| Row::parse(line))
            .filter(|row| !row.is_empty())
            .collect();
        Self { rows }
    }

    ///
    /// The header row, present whenever the report has any rows at all.
    ///
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    ///
    /// The data rows following the header.
    ///
    pub fn data(&self) -> &[Row] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }
}

impl TryFrom<&Path> for Report {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.is_empty() {
            return Err(Error::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        Ok(Self::from_text(text.as_str()))
    }
}
