//!
//! The displayed measurement kinds.
//!

///
/// The displayed measurement kinds.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Mean duration series only.
    #[default]
    Duration,
    /// Allocated memory series only.
    Allocation,
    /// Duration series with allocation series drawn in front of them.
    Both,
}

impl DisplayMode {
    ///
    /// Whether duration series are drawn.
    ///
    pub fn shows_duration(&self) -> bool {
        matches!(self, Self::Duration | Self::Both)
    }

    ///
    /// Whether allocation series are drawn.
    ///
    pub fn shows_allocation(&self) -> bool {
        matches!(self, Self::Allocation | Self::Both)
    }
}

impl std::str::FromStr for DisplayMode {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "duration" => Ok(Self::Duration),
            "allocation" => Ok(Self::Allocation),
            "both" => Ok(Self::Both),
            string => anyhow::bail!(
                "Unknown display mode `{string}`. Supported display modes: {}",
                vec![Self::Duration, Self::Allocation, Self::Both]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duration => write!(f, "duration"),
            Self::Allocation => write!(f, "allocation"),
            Self::Both => write!(f, "both"),
        }
    }
}
