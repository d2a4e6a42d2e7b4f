//! Generation inputs: event details, tone, and target platform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ValidationError};

/// Details of the event a post is written about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    /// Event name (required).
    pub name: String,
    /// Event description (required).
    pub description: String,
    /// Free-form date text, if known.
    pub date: Option<String>,
    /// Free-form location text, if known.
    pub location: Option<String>,
}

impl EventDetails {
    /// Create event details with only the required fields.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            date: None,
            location: None,
        }
    }

    /// Set the date. Empty text leaves the date unset.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = non_empty(date.into());
        self
    }

    /// Set the location. Empty text leaves the location unset.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_empty(location.into());
        self
    }

    /// Check that the required fields are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.description.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }

    /// Date and location, only when both are set.
    pub fn date_and_location(&self) -> Option<(&str, &str)> {
        match (self.date.as_deref(), self.location.as_deref()) {
            (Some(date), Some(location)) => Some((date, location)),
            _ => None,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Stylistic modifier applied to generated posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Enthusiastic,
    Sarcastic,
    Formal,
    Humorous,
}

impl Tone {
    /// All tones, in menu order.
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Enthusiastic,
        Tone::Sarcastic,
        Tone::Formal,
        Tone::Humorous,
    ];

    /// Display name, e.g. "Sarcastic".
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Enthusiastic => "Enthusiastic",
            Tone::Sarcastic => "Sarcastic",
            Tone::Formal => "Formal",
            Tone::Humorous => "Humorous",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::new("tone", s))
    }
}

/// A social network a post variant is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    LinkedIn,
    Twitter,
    WhatsApp,
}

impl Platform {
    /// All platforms, in generation order.
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Twitter, Platform::WhatsApp];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
            Platform::WhatsApp => "WhatsApp",
        }
    }

    /// Advisory character limit. Never enforced at generation time.
    pub fn char_limit(self) -> Option<usize> {
        match self {
            Platform::Twitter => Some(280),
            Platform::LinkedIn | Platform::WhatsApp => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Platform::LinkedIn => 0,
            Platform::Twitter => 1,
            Platform::WhatsApp => 2,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::new("platform", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_optional_fields_are_unset() {
        let event = EventDetails::new("Tech Conf", "A great event")
            .with_date("")
            .with_location("");

        assert!(event.date.is_none());
        assert!(event.location.is_none());
        assert!(event.date_and_location().is_none());
    }

    #[test]
    fn test_date_and_location_requires_both() {
        let event = EventDetails::new("Tech Conf", "A great event").with_date("May 1");
        assert!(event.date_and_location().is_none());

        let event = event.with_location("Berlin");
        assert_eq!(event.date_and_location(), Some(("May 1", "Berlin")));
    }

    #[test]
    fn test_validate_requires_name_and_description() {
        assert!(EventDetails::new("Tech Conf", "A great event").validate().is_ok());
        assert_eq!(
            EventDetails::new("Tech Conf", "").validate(),
            Err(ValidationError::MissingRequiredFields)
        );
        assert_eq!(
            EventDetails::new("", "A great event").validate(),
            Err(ValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_validate_accepts_whitespace_only_fields() {
        assert!(EventDetails::new("  ", "A great event").validate().is_ok());
        assert!(EventDetails::new("Tech Conf", " \n").validate().is_ok());
    }

    #[test]
    fn test_tone_parse_case_insensitive() {
        assert_eq!("sarcastic".parse::<Tone>().unwrap(), Tone::Sarcastic);
        assert_eq!("HUMOROUS".parse::<Tone>().unwrap(), Tone::Humorous);
        assert!("grumpy".parse::<Tone>().is_err());
    }

    #[test]
    fn test_platform_order_and_limits() {
        assert_eq!(
            Platform::ALL.map(Platform::as_str),
            ["LinkedIn", "Twitter", "WhatsApp"]
        );
        assert_eq!(Platform::Twitter.char_limit(), Some(280));
        assert_eq!(Platform::LinkedIn.char_limit(), None);
        assert_eq!("whatsapp".parse::<Platform>().unwrap(), Platform::WhatsApp);
    }
}
