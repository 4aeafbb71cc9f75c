//!
//! The output format of the tool.
//!

///
/// The output format of the tool.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Format {
    /// Chart configuration consumed by Chart.js-compatible renderers.
    #[default]
    Chart,
    /// Unstable JSON format, corresponds to the inner data model of the tool.
    Json,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "chart" => Ok(Self::Chart),
            "json" => Ok(Self::Json),
            string => anyhow::bail!(
                "Unknown output format `{string}`. Supported formats: {}",
                vec![Self::Chart, Self::Json]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart => write!(f, "chart"),
            Self::Json => write!(f, "json"),
        }
    }
}
