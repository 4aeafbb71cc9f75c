//!
//! The chart behavior and appearance options.
//!

pub mod plugins;
pub mod scales;

use self::plugins::Plugins;
use self::scales::Scales;

///
/// The chart behavior and appearance options.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Whether the canvas keeps its aspect ratio on resize.
    pub maintain_aspect_ratio: bool,
    /// The plugin options.
    pub plugins: Plugins,
    /// The axes.
    pub scales: Scales,
}
