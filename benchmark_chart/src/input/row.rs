//!
//! A single tokenized row of a benchmark report table.
//!

///
/// A single tokenized row of a benchmark report table.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The original trimmed line the row was read from.
    pub text: String,
    /// The cell values in column order, with emphasis markers stripped.
    pub columns: Vec<String>,
}

impl Row {
    ///
    /// Splits a trimmed table line into cells.
    ///
    /// The bounding delimiters produce the first and last fragments, which are discarded.
    /// Each remaining cell is stripped of `*` emphasis markers and trimmed.
    ///
    pub fn parse(line: &str) -> Self {
        let mut fragments: Vec<&str> = line.split('|').collect();
        fragments.remove(0);
        fragments.pop();
        let columns = fragments
            .into_iter()
            .map(|fragment| fragment.replace('*', "").trim().to_owned())
            .collect();
        Self {
            text: line.to_owned(),
            columns,
        }
    }

    ///
    /// Whether every cell of the row is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|column| column.is_empty())
    }

    ///
    /// Returns the cell at `index`, or an empty string for cells missing from short rows.
    ///
    pub fn cell(&self, index: usize) -> &str {
        self.columns
            .get(index)
            .map(String::as_str)
            .unwrap_or_default()
    }
}
