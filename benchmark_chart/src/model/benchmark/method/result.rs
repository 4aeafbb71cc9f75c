//!
//! A single measured data point of a benchmark method.
//!

use crate::model::benchmark::measure::Measure;

///
/// A single measured data point of a benchmark method.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Result {
    /// The category the point belongs to, joined from the dimension cells.
    pub category: String,
    /// The mean duration of the method at this category.
    pub duration: Measure,
    /// The allocated memory at this category, if the table reports allocations.
    pub allocation: Option<Measure>,
}

impl Result {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(category: String, duration: Measure, allocation: Option<Measure>) -> Self {
        Self {
            category,
            duration,
            allocation,
        }
    }
}
