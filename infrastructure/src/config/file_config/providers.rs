//! Provider configuration from TOML (`[providers]` section)
//!
//! ```toml
//! [providers.firecrawl]
//! api_key_env = "FIRECRAWL_API_KEY"
//!
//! [providers.scorecard]
//! base_url = "https://api.data.gov/ed/collegescorecard"
//! ```

use crate::providers::{firecrawl, scorecard, serpapi};
use crate::secret::ApiKey;
use serde::{Deserialize, Serialize};

/// Firecrawl search settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFirecrawlConfig {
    /// Environment variable name for the API key (default: "FIRECRAWL_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for FileFirecrawlConfig {
    fn default() -> Self {
        Self {
            api_key_env: "FIRECRAWL_API_KEY".to_string(),
            api_key: None,
            base_url: firecrawl::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// SerpApi settings, shared by the web and jobs engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSerpApiConfig {
    /// Environment variable name for the API key (default: "SERPAPI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for FileSerpApiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "SERPAPI_API_KEY".to_string(),
            api_key: None,
            base_url: serpapi::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// College Scorecard settings. Keys are issued by api.data.gov.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScorecardConfig {
    /// Environment variable name for the API key (default: "SCORECARD_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for FileScorecardConfig {
    fn default() -> Self {
        Self {
            api_key_env: "SCORECARD_API_KEY".to_string(),
            api_key: None,
            base_url: scorecard::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl FileFirecrawlConfig {
    /// Inline `api_key` first, then the `api_key_env` variable.
    pub fn resolve_key(&self) -> Option<ApiKey> {
        ApiKey::resolve(self.api_key.as_deref(), &self.api_key_env)
    }
}

impl FileSerpApiConfig {
    pub fn resolve_key(&self) -> Option<ApiKey> {
        ApiKey::resolve(self.api_key.as_deref(), &self.api_key_env)
    }
}

impl FileScorecardConfig {
    pub fn resolve_key(&self) -> Option<ApiKey> {
        ApiKey::resolve(self.api_key.as_deref(), &self.api_key_env)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub firecrawl: FileFirecrawlConfig,
    pub serpapi: FileSerpApiConfig,
    pub scorecard: FileScorecardConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_section_keeps_provider_defaults() {
        let config: FileProvidersConfig = toml::from_str(
            r#"
[serpapi]
base_url = "http://localhost:8080"
"#,
        )
        .unwrap();
        assert_eq!(config.serpapi.base_url, "http://localhost:8080");
        assert_eq!(config.serpapi.api_key_env, "SERPAPI_API_KEY");
        assert_eq!(config.firecrawl, FileFirecrawlConfig::default());
    }

    #[test]
    fn test_inline_key_resolves() {
        let config = FileScorecardConfig {
            api_key: Some("DEMO_KEY".to_string()),
            api_key_env: "TRADE_INSIGHT_TEST_NO_SUCH_VAR".to_string(),
            ..Default::default()
        };
        assert!(config.resolve_key().is_some());
        let unset = FileScorecardConfig {
            api_key_env: "TRADE_INSIGHT_TEST_NO_SUCH_VAR".to_string(),
            ..Default::default()
        };
        assert!(unset.resolve_key().is_none());
    }
}
