//!
//! The chart subtitle used as a credit line.
//!

///
/// The chart subtitle used as a credit line along the right edge.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtitle {
    /// Whether the subtitle is drawn.
    pub display: bool,
    /// The subtitle text.
    pub text: &'static str,
    /// The subtitle placement side.
    pub position: &'static str,
    /// The subtitle alignment along its side.
    pub align: &'static str,
    /// Whether the subtitle takes a full row of the chart layout.
    pub full_size: bool,
    /// The subtitle font.
    pub font: Font,
    /// The subtitle text color.
    pub color: &'static str,
}

impl Subtitle {
    /// The credit text.
    pub const TEXT: &'static str = "Made with benchmark-chart";

    ///
    /// Creates the credit line with the theme color.
    ///
    pub fn new(color: &'static str) -> Self {
        Self {
            display: true,
            text: Self::TEXT,
            position: "right",
            align: "center",
            full_size: false,
            font: Font::default(),
            color,
        }
    }
}

///
/// The subtitle font.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Font {
    /// The font size in pixels.
    pub size: u32,
    /// The font family stack.
    pub family: &'static str,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            size: 10,
            family:
                "SFMono-Regular,Menlo,Monaco,Consolas,\"Liberation Mono\",\"Courier New\",monospace",
        }
    }
}
