//!
//! The value axis scale type.
//!

///
/// The value axis scale type.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScaleType {
    /// Linear value axis.
    #[default]
    Linear,
    /// Base-10 logarithmic value axis.
    Log10,
    /// Base-2 logarithmic value axis, provided by the renderer as a custom scale.
    Log2,
}

impl ScaleType {
    ///
    /// The axis type identifier in the chart configuration.
    ///
    pub fn type_id(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Log10 => "logarithmic",
            Self::Log2 => "log2",
        }
    }
}

impl std::str::FromStr for ScaleType {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "log10" => Ok(Self::Log10),
            "log2" => Ok(Self::Log2),
            string => anyhow::bail!(
                "Unknown scale type `{string}`. Supported scale types: {}",
                vec![Self::Linear, Self::Log10, Self::Log2]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for ScaleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Log10 => write!(f, "log10"),
            Self::Log2 => write!(f, "log2"),
        }
    }
}
