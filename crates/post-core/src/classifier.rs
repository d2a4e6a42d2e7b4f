//! Credential classification.
//!
//! Pattern rules are pure and run first. Credentials no rule recognizes go
//! to a [`CredentialProbe`], a best-effort network check kept behind a trait
//! so callers can skip or stub it.

use std::fmt;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

static GEMINI_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^AIza[0-9A-Za-z_-]{35}$").expect("Gemini key pattern is valid")
});

/// Best-guess identity of the service a credential belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderIdentity {
    OpenAi,
    Gemini,
    Anthropic,
    Unknown,
    Mock,
    NotDetected,
}

impl ProviderIdentity {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ProviderIdentity::OpenAi => "OpenAI",
            ProviderIdentity::Gemini => "Google/Gemini",
            ProviderIdentity::Anthropic => "Anthropic/Claude",
            ProviderIdentity::Unknown => "Unknown API service",
            ProviderIdentity::Mock => "Mock",
            ProviderIdentity::NotDetected => "Not Detected",
        }
    }
}

impl fmt::Display for ProviderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A live check of whether a credential is accepted by a provider.
///
/// Implementations must not fail: any error means "not accepted".
#[async_trait]
pub trait CredentialProbe: Send + Sync {
    /// Returns true if the credential is accepted.
    async fn accepts(&self, credential: &str) -> bool;
}

/// A probe that never accepts anything and never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProbe;

#[async_trait]
impl CredentialProbe for NoProbe {
    async fn accepts(&self, _credential: &str) -> bool {
        false
    }
}

/// Classify a credential using the offline pattern rules only.
///
/// Returns `None` when no rule matches and a probe would be needed.
pub fn classify_pattern(credential: &str) -> Option<ProviderIdentity> {
    if credential.is_empty() {
        return Some(ProviderIdentity::NotDetected);
    }
    // Anthropic keys share the generic "sk-" prefix; check them first.
    if credential.starts_with("sk-ant-") {
        return Some(ProviderIdentity::Anthropic);
    }
    if credential.starts_with("sk-") {
        return Some(ProviderIdentity::OpenAi);
    }
    if GEMINI_KEY.is_match(credential) {
        return Some(ProviderIdentity::Gemini);
    }
    None
}

/// Classify a credential, falling back to `probe` when no pattern matches.
///
/// Always returns a value; probe failures degrade to `Unknown`.
pub async fn classify(credential: &str, probe: &dyn CredentialProbe) -> ProviderIdentity {
    if let Some(identity) = classify_pattern(credential) {
        debug!("Credential classified by pattern: {}", identity);
        return identity;
    }

    if probe.accepts(credential).await {
        debug!("Credential accepted by OpenAI probe");
        ProviderIdentity::OpenAi
    } else {
        debug!("Credential not recognized");
        ProviderIdentity::Unknown
    }
}
