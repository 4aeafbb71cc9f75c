//!
//! A measurement unit with its short and long forms.
//!

///
/// A measurement unit with its short and long forms.
///
/// The long form is the human-readable name used for axis titles.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Unit {
    /// The unit as written in the report.
    pub short: String,
    /// The spelled-out unit name.
    pub long: String,
}

impl From<&str> for Unit {
    ///
    /// Resolves the long form of a unit suffix found in a report.
    ///
    /// Both the ASCII `us` spelling and the two Unicode micro signs denote
    /// microseconds. Unrecognized suffixes pass through unchanged.
    ///
    fn from(short: &str) -> Self {
        let long = match short {
            "us" | "\u{00B5}s" | "\u{03BC}s" => "Microseconds",
            "ms" => "Milliseconds",
            "s" => "Seconds",
            "B" => "Bytes",
            "KB" => "Kilobytes",
            "MB" => "Megabytes",
            "GB" => "Gigabytes",
            "TB" => "Terabytes",
            "PB" => "Petabytes",
            _ => short,
        };
        Self {
            short: short.to_owned(),
            long: long.to_owned(),
        }
    }
}
