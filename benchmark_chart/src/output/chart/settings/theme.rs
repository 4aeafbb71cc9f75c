//!
//! The chart color theme.
//!

///
/// The chart color theme.
///
/// The theme only selects colors. Layout and data are identical across themes.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// For dark page backgrounds.
    #[default]
    Dark,
    /// For light page backgrounds.
    Light,
}

impl Theme {
    ///
    /// The grid line color.
    ///
    pub fn grid_color(&self) -> &'static str {
        match self {
            Self::Dark => "#66666638",
            Self::Light => "#0000001a",
        }
    }

    ///
    /// The credit line color.
    ///
    pub fn credit_color(&self) -> &'static str {
        match self {
            Self::Dark => "#66666675",
            Self::Light => "#00000040",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            string => anyhow::bail!(
                "Unknown theme `{string}`. Supported themes: {}",
                vec![Self::Dark, Self::Light]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}
