//!
//! The chart axes.
//!

pub mod axis;

use self::axis::Axis;

///
/// The chart axes.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct Scales {
    /// The category axis.
    pub x: Axis,
    /// The value axis.
    pub y: Axis,
}
