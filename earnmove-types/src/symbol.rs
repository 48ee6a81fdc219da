use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EarnmoveError;

/// Normalized ticker symbol (trimmed, upper-case, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Normalize and validate a ticker entered by a user or returned by a provider.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the ticker is blank or contains whitespace.
    pub fn new(raw: &str) -> Result<Self, EarnmoveError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EarnmoveError::InvalidArg(
                "please provide a valid stock ticker".into(),
            ));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(EarnmoveError::InvalidArg(format!(
                "ticker must not contain whitespace: {trimmed:?}"
            )));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// Borrow the normalized ticker.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = EarnmoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = EarnmoveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Symbol> for String {
    fn from(s: Symbol) -> Self {
        s.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
