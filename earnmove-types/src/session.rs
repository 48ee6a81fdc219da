use serde::{Deserialize, Serialize};

/// When an earnings announcement happened relative to the regular trading session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Session {
    /// Announced before the market opened (BMO).
    BeforeMarket,
    /// Announced after the market closed (AMC).
    AfterMarket,
    /// The provider did not say. Aligned exactly like [`Session::AfterMarket`].
    #[default]
    Unknown,
}

impl Session {
    /// Parse a provider time-of-day label.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. Labels
    /// that are not recognized map to [`Session::Unknown`].
    ///
    /// ```
    /// use earnmove_types::Session;
    ///
    /// assert_eq!(Session::from_label("AM"), Session::BeforeMarket);
    /// assert_eq!(Session::from_label(" amc "), Session::AfterMarket);
    /// assert_eq!(Session::from_label("TAS"), Session::Unknown);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "am" | "bmo" | "before market open" | "pre-market" | "premarket" => {
                Self::BeforeMarket
            }
            "pm" | "amc" | "after market close" | "post-market" | "postmarket" => {
                Self::AfterMarket
            }
            _ => Self::Unknown,
        }
    }

    /// Session used for alignment: `Unknown` is treated as `AfterMarket`.
    #[must_use]
    pub const fn effective(self) -> Self {
        match self {
            Self::BeforeMarket => Self::BeforeMarket,
            Self::AfterMarket | Self::Unknown => Self::AfterMarket,
        }
    }

    /// Short display code (`BMO`, `AMC`, or `-` when unknown).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BeforeMarket => "BMO",
            Self::AfterMarket => "AMC",
            Self::Unknown => "-",
        }
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
