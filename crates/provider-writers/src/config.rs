//! Configuration shared by the provider writers.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Default OpenAI API URL.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";
/// Default Gemini API URL.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";
/// Default Anthropic API URL.
pub const DEFAULT_ANTHROPIC_URL: &str = "https://api.anthropic.com";
/// Anthropic API version header value.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Errors raised while building provider configuration or clients.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    HttpClient(String),
}

/// Configuration for the provider writers and the credential probe.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    /// OpenAI API URL (also used by the credential probe).
    pub openai_url: String,
    /// Gemini API URL.
    pub gemini_url: String,
    /// Anthropic API URL.
    pub anthropic_url: String,

    /// OpenAI chat model.
    pub openai_model: String,
    /// Gemini model.
    pub gemini_model: String,
    /// Anthropic model.
    pub anthropic_model: String,

    /// Temperature for generation.
    pub temperature: f32,
    /// Maximum tokens per response.
    pub max_tokens: u32,
    /// Gemini nucleus sampling.
    pub gemini_top_p: f32,
    /// Gemini top-k sampling.
    pub gemini_top_k: u32,

    /// Timeout for each generation request.
    pub request_timeout: Duration,
    /// Timeout for the credential probe.
    pub probe_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            openai_url: DEFAULT_OPENAI_URL.to_string(),
            gemini_url: DEFAULT_GEMINI_URL.to_string(),
            anthropic_url: DEFAULT_ANTHROPIC_URL.to_string(),
            openai_model: "gpt-3.5-turbo".to_string(),
            gemini_model: "gemini-pro".to_string(),
            anthropic_model: "claude-3-haiku-20240307".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            gemini_top_p: 0.8,
            gemini_top_k: 40,
            request_timeout: Duration::from_secs(60),
            probe_timeout: Duration::from_secs(5),
        }
    }
}

impl ProviderConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `POSTGEN_OPENAI_URL` - OpenAI API URL (default: https://api.openai.com)
    /// - `POSTGEN_GEMINI_URL` - Gemini API URL (default: https://generativelanguage.googleapis.com)
    /// - `POSTGEN_ANTHROPIC_URL` - Anthropic API URL (default: https://api.anthropic.com)
    /// - `POSTGEN_OPENAI_MODEL` - OpenAI model (default: gpt-3.5-turbo)
    /// - `POSTGEN_GEMINI_MODEL` - Gemini model (default: gemini-pro)
    /// - `POSTGEN_ANTHROPIC_MODEL` - Anthropic model (default: claude-3-haiku-20240307)
    /// - `POSTGEN_TEMPERATURE` - Temperature (default: 0.7)
    /// - `POSTGEN_MAX_TOKENS` - Max tokens (default: 500)
    /// - `POSTGEN_REQUEST_TIMEOUT_SECS` - Generation request timeout (default: 60)
    /// - `POSTGEN_PROBE_TIMEOUT_SECS` - Credential probe timeout (default: 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            openai_url: env::var("POSTGEN_OPENAI_URL").unwrap_or(defaults.openai_url),
            gemini_url: env::var("POSTGEN_GEMINI_URL").unwrap_or(defaults.gemini_url),
            anthropic_url: env::var("POSTGEN_ANTHROPIC_URL").unwrap_or(defaults.anthropic_url),
            openai_model: env::var("POSTGEN_OPENAI_MODEL").unwrap_or(defaults.openai_model),
            gemini_model: env::var("POSTGEN_GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            anthropic_model: env::var("POSTGEN_ANTHROPIC_MODEL")
                .unwrap_or(defaults.anthropic_model),
            temperature: parse_var("POSTGEN_TEMPERATURE")?.unwrap_or(defaults.temperature),
            max_tokens: parse_var("POSTGEN_MAX_TOKENS")?.unwrap_or(defaults.max_tokens),
            gemini_top_p: defaults.gemini_top_p,
            gemini_top_k: defaults.gemini_top_k,
            request_timeout: parse_var("POSTGEN_REQUEST_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            probe_timeout: parse_var("POSTGEN_PROBE_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.probe_timeout),
        })
    }

    /// Create a new config builder.
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::default()
    }

    /// Point every provider at the same base URL. Used with local mock servers.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.openai_url = url.clone();
        self.gemini_url = url.clone();
        self.anthropic_url = url;
        self
    }
}

fn parse_var<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(_) => Ok(None),
    }
}

/// Builder for ProviderConfig.
#[derive(Debug, Default)]
pub struct ProviderConfigBuilder {
    config: ProviderConfig,
}

impl ProviderConfigBuilder {
    /// Set the OpenAI API URL.
    pub fn openai_url(mut self, url: impl Into<String>) -> Self {
        self.config.openai_url = url.into();
        self
    }

    /// Set the Gemini API URL.
    pub fn gemini_url(mut self, url: impl Into<String>) -> Self {
        self.config.gemini_url = url.into();
        self
    }

    /// Set the Anthropic API URL.
    pub fn anthropic_url(mut self, url: impl Into<String>) -> Self {
        self.config.anthropic_url = url.into();
        self
    }

    /// Set the OpenAI model.
    pub fn openai_model(mut self, model: impl Into<String>) -> Self {
        self.config.openai_model = model.into();
        self
    }

    /// Set the Gemini model.
    pub fn gemini_model(mut self, model: impl Into<String>) -> Self {
        self.config.gemini_model = model.into();
        self
    }

    /// Set the Anthropic model.
    pub fn anthropic_model(mut self, model: impl Into<String>) -> Self {
        self.config.anthropic_model = model.into();
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = temp;
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = tokens;
        self
    }

    /// Set the generation request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the credential probe timeout.
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.config.probe_timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ProviderConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProviderConfig::default();

        assert_eq!(config.openai_url, "https://api.openai.com");
        assert_eq!(config.gemini_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.anthropic_url, "https://api.anthropic.com");
        assert_eq!(config.openai_model, "gpt-3.5-turbo");
        assert_eq!(config.gemini_model, "gemini-pro");
        assert_eq!(config.anthropic_model, "claude-3-haiku-20240307");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.gemini_top_p, 0.8);
        assert_eq!(config.gemini_top_k, 40);
        assert_eq!(config.probe_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_builder_all_options() {
        let config = ProviderConfig::builder()
            .openai_url("http://localhost:1")
            .gemini_url("http://localhost:2")
            .anthropic_url("http://localhost:3")
            .openai_model("gpt-4o-mini")
            .gemini_model("gemini-1.5-flash")
            .anthropic_model("claude-3-5-haiku")
            .temperature(0.2)
            .max_tokens(256)
            .request_timeout(Duration::from_secs(9))
            .probe_timeout(Duration::from_secs(1))
            .build();

        assert_eq!(config.openai_url, "http://localhost:1");
        assert_eq!(config.gemini_url, "http://localhost:2");
        assert_eq!(config.anthropic_url, "http://localhost:3");
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.anthropic_model, "claude-3-5-haiku");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.request_timeout, Duration::from_secs(9));
        assert_eq!(config.probe_timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_with_base_url() {
        let config = ProviderConfig::default().with_base_url("http://127.0.0.1:9999");

        assert_eq!(config.openai_url, "http://127.0.0.1:9999");
        assert_eq!(config.gemini_url, "http://127.0.0.1:9999");
        assert_eq!(config.anthropic_url, "http://127.0.0.1:9999");
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_postgen_vars() {
            for var in [
                "POSTGEN_OPENAI_URL",
                "POSTGEN_GEMINI_URL",
                "POSTGEN_ANTHROPIC_URL",
                "POSTGEN_OPENAI_MODEL",
                "POSTGEN_GEMINI_MODEL",
                "POSTGEN_ANTHROPIC_MODEL",
                "POSTGEN_TEMPERATURE",
                "POSTGEN_MAX_TOKENS",
                "POSTGEN_REQUEST_TIMEOUT_SECS",
                "POSTGEN_PROBE_TIMEOUT_SECS",
            ] {
                std::env::remove_var(var);
            }
        }

        // Scenario 1: nothing set, defaults used
        clear_all_postgen_vars();
        let config = ProviderConfig::from_env().unwrap();
        assert_eq!(config, ProviderConfig::default());

        // Scenario 2: overrides applied
        clear_all_postgen_vars();
        std::env::set_var("POSTGEN_OPENAI_URL", "http://openai.test");
        std::env::set_var("POSTGEN_ANTHROPIC_MODEL", "claude-test");
        std::env::set_var("POSTGEN_TEMPERATURE", "0.3");
        std::env::set_var("POSTGEN_MAX_TOKENS", "120");
        std::env::set_var("POSTGEN_PROBE_TIMEOUT_SECS", "2");

        let config = ProviderConfig::from_env().unwrap();
        assert_eq!(config.openai_url, "http://openai.test");
        assert_eq!(config.anthropic_model, "claude-test");
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.max_tokens, 120);
        assert_eq!(config.probe_timeout, Duration::from_secs(2));
        assert_eq!(config.gemini_url, DEFAULT_GEMINI_URL);

        // Scenario 3: unparsable number is rejected
        clear_all_postgen_vars();
        std::env::set_var("POSTGEN_MAX_TOKENS", "lots");
        match ProviderConfig::from_env() {
            Err(ConfigError::InvalidValue { var, value }) => {
                assert_eq!(var, "POSTGEN_MAX_TOKENS");
                assert_eq!(value, "lots");
            }
            other => panic!("Expected InvalidValue error, got {:?}", other),
        }

        // Cleanup
        clear_all_postgen_vars();
    }
}
