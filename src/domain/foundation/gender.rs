//! Gender value object.
//!
//! Gender is an open category: whatever values the users collection holds
//! ("Male", "Female", or anything else) are reported as-is. Only trimming and
//! a non-empty check are applied.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A trimmed, non-empty gender label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gender(String);

impl Gender {
    /// Creates a Gender, returning error if the label is blank.
    pub fn new(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("gender"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Gender {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Gender::new(value)
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.0
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_trims_whitespace() {
        let gender = Gender::new("  Female ").unwrap();
        assert_eq!(gender.as_str(), "Female");
    }

    #[test]
    fn gender_rejects_blank_labels() {
        assert!(Gender::new("").is_err());
        assert!(Gender::new("   ").is_err());
    }

    #[test]
    fn gender_accepts_values_outside_male_female() {
        assert!(Gender::new("Non-binary").is_ok());
    }

    #[test]
    fn gender_serializes_as_plain_string() {
        let gender = Gender::new("Male").unwrap();
        assert_eq!(serde_json::to_string(&gender).unwrap(), "\"Male\"");
    }

    #[test]
    fn gender_deserialization_validates() {
        let ok: Result<Gender, _> = serde_json::from_str("\"Female\"");
        assert!(ok.is_ok());

        let blank: Result<Gender, _> = serde_json::from_str("\" \"");
        assert!(blank.is_err());
    }
}
