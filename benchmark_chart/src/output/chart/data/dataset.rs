//!
//! A single series of the chart.
//!

///
/// A single series of the chart.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// The series name shown in the legend.
    pub label: String,
    /// The values aligned to the category labels. Gaps serialize as `null`.
    pub data: Vec<Option<f64>>,
    /// The bar fill color.
    pub background_color: String,
    /// The draw order. Lower orders are drawn in front.
    pub order: u8,
}

impl Dataset {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(label: String, data: Vec<Option<f64>>, background_color: String, order: u8) -> Self {
        Self {
            label,
            data,
            background_color,
            order,
        }
    }
}
