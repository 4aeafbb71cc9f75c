//!
//! A single chart axis.
//!

///
/// A single chart axis.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct Axis {
    /// The axis scale type identifier. Only the value axis carries one.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<&'static str>,
    /// The axis title.
    pub title: Title,
    /// The grid line style.
    pub grid: Grid,
}

impl Axis {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(r#type: Option<&'static str>, text: String, grid_color: &'static str) -> Self {
        Self {
            r#type,
            title: Title::new(text),
            grid: Grid { color: grid_color },
        }
    }
}

///
/// An axis title.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct Title {
    /// Whether the title is drawn.
    pub display: bool,
    /// The title text.
    pub text: String,
    /// The title color.
    pub color: &'static str,
}

impl Title {
    /// The fixed title color, readable on both themes.
    pub const COLOR: &'static str = "#606060";

    ///
    /// A shortcut constructor. The title is always displayed and may carry an
    /// empty text.
    ///
    pub fn new(text: String) -> Self {
        Self {
            display: true,
            text,
            color: Self::COLOR,
        }
    }
}

///
/// The grid line style of an axis.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct Grid {
    /// The grid line color.
    pub color: &'static str,
}
