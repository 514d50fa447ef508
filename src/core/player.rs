//! Player name validation

use std::fmt;
use thiserror::Error;

/// Minimum number of characters in a player name
pub const MIN_NAME_LENGTH: usize = 3;

/// A validated, title-cased player name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Your name must be at least {MIN_NAME_LENGTH} characters long")]
    TooShort,
    #[error("Your name can only contain letters/numbers")]
    InvalidCharacters,
}

impl PlayerName {
    /// Validate and normalize a raw name
    ///
    /// Surrounding whitespace is ignored. Letters are title-cased: the first
    /// letter of each run of letters is uppercased and the rest lowercased.
    ///
    /// # Errors
    /// Returns `NameError` if the trimmed name is shorter than three
    /// characters or contains anything other than letters and digits.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::PlayerName;
    ///
    /// assert_eq!(PlayerName::parse("  ada ").unwrap().as_str(), "Ada");
    /// assert_eq!(PlayerName::parse("john3doe").unwrap().as_str(), "John3Doe");
    /// assert!(PlayerName::parse("al").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let trimmed = raw.trim();

        if trimmed.chars().count() < MIN_NAME_LENGTH {
            return Err(NameError::TooShort);
        }

        if !trimmed.chars().all(char::is_alphanumeric) {
            return Err(NameError::InvalidCharacters);
        }

        Ok(Self(title_case(trimmed)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for ch in text.chars() {
        if previous_is_letter {
            result.extend(ch.to_lowercase());
        } else {
            result.extend(ch.to_uppercase());
        }
        previous_is_letter = ch.is_alphabetic();
    }

    result
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
