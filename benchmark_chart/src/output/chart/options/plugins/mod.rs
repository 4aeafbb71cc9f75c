//!
//! The chart plugin options.
//!

pub mod subtitle;

use self::subtitle::Subtitle;

///
/// The chart plugin options.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Plugins {
    /// The credit line in the chart corner.
    pub subtitle: Subtitle,
}
