//! Manual service selection.

use std::fmt;
use std::str::FromStr;

use post_core::{ParseError, ProviderIdentity};

/// The user's service choice. Anything but `AutoDetect` bypasses detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceOverride {
    #[default]
    AutoDetect,
    OpenAi,
    Gemini,
    Anthropic,
    Mock,
}

impl ServiceOverride {
    /// The forced identity, or `None` for auto-detection.
    pub fn forced(self) -> Option<ProviderIdentity> {
        match self {
            ServiceOverride::AutoDetect => None,
            ServiceOverride::OpenAi => Some(ProviderIdentity::OpenAi),
            ServiceOverride::Gemini => Some(ProviderIdentity::Gemini),
            ServiceOverride::Anthropic => Some(ProviderIdentity::Anthropic),
            ServiceOverride::Mock => Some(ProviderIdentity::Mock),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceOverride::AutoDetect => "Auto-detect",
            ServiceOverride::OpenAi => "OpenAI",
            ServiceOverride::Gemini => "Google/Gemini",
            ServiceOverride::Anthropic => "Anthropic/Claude",
            ServiceOverride::Mock => "Use Mock Generator (No API)",
        }
    }
}

impl fmt::Display for ServiceOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceOverride {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "auto-detect" | "autodetect" => Ok(ServiceOverride::AutoDetect),
            "openai" => Ok(ServiceOverride::OpenAi),
            "gemini" | "google" | "google/gemini" => Ok(ServiceOverride::Gemini),
            "anthropic" | "claude" | "anthropic/claude" => Ok(ServiceOverride::Anthropic),
            "mock" | "none" | "offline" => Ok(ServiceOverride::Mock),
            _ => Err(ParseError {
                kind: "service",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("auto".parse::<ServiceOverride>().unwrap(), ServiceOverride::AutoDetect);
        assert_eq!("OpenAI".parse::<ServiceOverride>().unwrap(), ServiceOverride::OpenAi);
        assert_eq!("Google/Gemini".parse::<ServiceOverride>().unwrap(), ServiceOverride::Gemini);
        assert_eq!("claude".parse::<ServiceOverride>().unwrap(), ServiceOverride::Anthropic);
        assert_eq!("mock".parse::<ServiceOverride>().unwrap(), ServiceOverride::Mock);
        assert!("bard".parse::<ServiceOverride>().is_err());
    }

    #[test]
    fn test_forced_identity() {
        assert_eq!(ServiceOverride::AutoDetect.forced(), None);
        assert_eq!(ServiceOverride::Mock.forced(), Some(ProviderIdentity::Mock));
        assert_eq!(
            ServiceOverride::Anthropic.forced(),
            Some(ProviderIdentity::Anthropic)
        );
    }
}
