//!
//! A parsed numeric measurement with its unit.
//!

///
/// A parsed numeric measurement with its unit.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Measure {
    /// The numeric value. `NaN` when the cell does not contain a parseable number.
    pub value: f64,
    /// The unit suffix as written in the report, empty when absent.
    pub unit: String,
}

impl Measure {
    ///
    /// Parses a formatted report cell such as `1,234.56 us`.
    ///
    /// The part before the first space is filtered down to digits and dots and parsed,
    /// which tolerates thousands separators of any locale. The part after the first
    /// space becomes the unit. Cells without a number yield `NaN` instead of an error.
    ///
    pub fn parse(cell: &str) -> Self {
        let (number, unit) = match cell.find(' ') {
            Some(position) => (&cell[..position], cell[position + 1..].trim()),
            None => (cell, ""),
        };
        let number: String = number
            .chars()
            .filter(|character| character.is_ascii_digit() || *character == '.')
            .collect();
        let value = number.parse::<f64>().unwrap_or(f64::NAN);
        Self {
            value,
            unit: unit.to_owned(),
        }
    }
}
