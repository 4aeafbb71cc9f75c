//!
//! The chart data: category labels and series.
//!

pub mod dataset;

use self::dataset::Dataset;

///
/// The chart data: category labels and series.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct Data {
    /// The category axis labels.
    pub labels: Vec<String>,
    /// The series drawn over the labels.
    pub datasets: Vec<Dataset>,
}
