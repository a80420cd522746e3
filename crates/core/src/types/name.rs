//! Display name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`DisplayName`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum DisplayNameError {
    /// The input string is empty after trimming.
    #[error("name cannot be empty")]
    Empty,
}

/// A profile display name.
///
/// The only constraint is that the name is non-empty after trimming;
/// surrounding whitespace is stripped on parse.
///
/// ## Examples
///
/// ```
/// use makeready_core::DisplayName;
///
/// assert!(DisplayName::parse("Dana Whitfield").is_ok());
/// assert!(DisplayName::parse("  trimmed  ").is_ok());
///
/// assert!(DisplayName::parse("").is_err());
/// assert!(DisplayName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Parse a `DisplayName` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayNameError::Empty`] if the input is empty after
    /// trimming.
    pub fn parse(s: &str) -> Result<Self, DisplayNameError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DisplayNameError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `DisplayName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DisplayName {
    type Err = DisplayNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let name = DisplayName::parse("Dana Whitfield").unwrap();
        assert_eq!(name.as_str(), "Dana Whitfield");
    }

    #[test]
    fn test_parse_trims() {
        let name = DisplayName::parse("  Dana  ").unwrap();
        assert_eq!(name.as_str(), "Dana");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(DisplayName::parse(""), Err(DisplayNameError::Empty)));
    }

    #[test]
    fn test_parse_whitespace_only() {
        assert!(matches!(
            DisplayName::parse(" \t "),
            Err(DisplayNameError::Empty)
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let name = DisplayName::parse("Dana").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Dana\"");

        let parsed: DisplayName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }
}
