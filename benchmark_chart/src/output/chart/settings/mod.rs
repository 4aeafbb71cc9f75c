//!
//! The chart rendering settings.
//!

pub mod display_mode;
pub mod scale_type;
pub mod theme;

use self::display_mode::DisplayMode;
use self::scale_type::ScaleType;
use self::theme::Theme;

///
/// The chart rendering settings.
///
/// Settings select presentation only. Parsing and normalization never depend on them.
///
#[derive(Debug, Default, Clone)]
pub struct Settings {
    /// The value axis scale.
    pub scale: ScaleType,
    /// The displayed measurement kinds.
    pub display: DisplayMode,
    /// The color theme.
    pub theme: Theme,
    /// When set, only the methods whose name matches contribute series.
    pub filter: Option<regex::Regex>,
}

impl Settings {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        scale: ScaleType,
        display: DisplayMode,
        theme: Theme,
        filter: Option<regex::Regex>,
    ) -> Self {
        Self {
            scale,
            display,
            theme,
            filter,
        }
    }

    ///
    /// Whether a method contributes series under the current filter.
    ///
    pub fn matches(&self, name: &str) -> bool {
        match self.filter {
            Some(ref filter) => filter.is_match(name),
            None => true,
        }
    }
}
