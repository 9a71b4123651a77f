//! Aggregation configuration from TOML (`[aggregation]` section)

use crate::config::issue::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use trade_insight_application::{AggregationParams, MAX_CALL_TIMEOUT};
use trade_insight_domain::MatchStrategy;

/// Which provider answers the outlook need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlookProvider {
    /// Firecrawl search (default)
    #[default]
    Firecrawl,
    /// SerpApi Google web search
    SerpApi,
}

impl OutlookProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutlookProvider::Firecrawl => "firecrawl",
            OutlookProvider::SerpApi => "serpapi",
        }
    }
}

impl std::fmt::Display for OutlookProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutlookProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "firecrawl" => Ok(OutlookProvider::Firecrawl),
            "serpapi" | "serp" | "google" => Ok(OutlookProvider::SerpApi),
            other => Err(format!("unknown outlook provider '{}'", other)),
        }
    }
}

/// Raw aggregation configuration from TOML
///
/// # Example
///
/// ```toml
/// [aggregation]
/// result_limit = 10
/// call_timeout_secs = 30
/// match_strategy = "classification-code"
/// outlook_provider = "serpapi"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAggregationConfig {
    /// Maximum hits requested per provider call
    pub result_limit: usize,
    /// Per-call timeout in seconds
    pub call_timeout_secs: u64,
    /// "title-keyword" or "classification-code"
    pub match_strategy: String,
    /// "firecrawl" or "serpapi"
    pub outlook_provider: String,
}

impl Default for FileAggregationConfig {
    fn default() -> Self {
        let params = AggregationParams::default();
        Self {
            result_limit: params.result_limit,
            call_timeout_secs: params.call_timeout.as_secs(),
            match_strategy: params.match_strategy.as_str().to_string(),
            outlook_provider: OutlookProvider::default().as_str().to_string(),
        }
    }
}

impl FileAggregationConfig {
    /// Parse match_strategy string into MatchStrategy enum
    pub fn parse_match_strategy(&self) -> (MatchStrategy, Vec<ConfigIssue>) {
        match self.match_strategy.parse::<MatchStrategy>() {
            Ok(strategy) => (strategy, vec![]),
            Err(_) => {
                let fallback = MatchStrategy::default();
                let issue = ConfigIssue::invalid_enum(
                    "aggregation.match_strategy",
                    &self.match_strategy,
                    &["title-keyword", "classification-code"],
                    fallback.as_str(),
                );
                (fallback, vec![issue])
            }
        }
    }

    /// Parse outlook_provider string into OutlookProvider enum
    pub fn parse_outlook_provider(&self) -> (OutlookProvider, Vec<ConfigIssue>) {
        match self.outlook_provider.parse::<OutlookProvider>() {
            Ok(provider) => (provider, vec![]),
            Err(_) => {
                let fallback = OutlookProvider::default();
                let issue = ConfigIssue::invalid_enum(
                    "aggregation.outlook_provider",
                    &self.outlook_provider,
                    &["firecrawl", "serpapi"],
                    fallback.as_str(),
                );
                (fallback, vec![issue])
            }
        }
    }

    /// Convert to [`AggregationParams`]. Zero values fall back to defaults.
    pub fn to_params(&self) -> (AggregationParams, Vec<ConfigIssue>) {
        let defaults = AggregationParams::default();
        let (strategy, mut issues) = self.parse_match_strategy();
        let mut params = defaults.clone().with_match_strategy(strategy);

        if self.result_limit == 0 {
            issues.push(zero_value("aggregation.result_limit", defaults.result_limit));
        } else {
            params = params.with_result_limit(self.result_limit);
        }

        let max_secs = MAX_CALL_TIMEOUT.as_secs();
        if self.call_timeout_secs == 0 {
            issues.push(zero_value(
                "aggregation.call_timeout_secs",
                defaults.call_timeout.as_secs() as usize,
            ));
        } else if self.call_timeout_secs > max_secs {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::TooLarge {
                    field: "aggregation.call_timeout_secs".to_string(),
                    max: max_secs,
                },
                format!(
                    "aggregation.call_timeout_secs: must be at most {}, using {}",
                    max_secs,
                    defaults.call_timeout.as_secs()
                ),
            ));
        } else {
            params = params.with_call_timeout(Duration::from_secs(self.call_timeout_secs));
        }

        (params, issues)
    }
}

fn zero_value(field: &str, fallback: usize) -> ConfigIssue {
    ConfigIssue::warning(
        ConfigIssueCode::ZeroValue {
            field: field.to_string(),
        },
        format!("{}: must be greater than 0, using {}", field, fallback),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_params() {
        let (params, issues) = FileAggregationConfig::default().to_params();
        assert!(issues.is_empty());
        assert_eq!(params, AggregationParams::default());
    }

    #[test]
    fn test_parse_values() {
        let config = FileAggregationConfig {
            result_limit: 25,
            call_timeout_secs: 5,
            match_strategy: "classification-code".to_string(),
            outlook_provider: "SerpApi".to_string(),
        };
        let (params, issues) = config.to_params();
        assert!(issues.is_empty());
        assert_eq!(params.result_limit, 25);
        assert_eq!(params.call_timeout, Duration::from_secs(5));
        assert_eq!(params.match_strategy, MatchStrategy::ClassificationCode);
        assert_eq!(config.parse_outlook_provider().0, OutlookProvider::SerpApi);
    }

    #[test]
    fn test_invalid_values_fall_back_with_issues() {
        let config = FileAggregationConfig {
            result_limit: 0,
            call_timeout_secs: 0,
            match_strategy: "fuzzy".to_string(),
            outlook_provider: "bing".to_string(),
        };
        let (params, issues) = config.to_params();
        assert_eq!(params, AggregationParams::default());
        assert_eq!(issues.len(), 3);
        assert!(issues[0].message.contains("aggregation.match_strategy"));

        let (provider, issues) = config.parse_outlook_provider();
        assert_eq!(provider, OutlookProvider::Firecrawl);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_oversized_timeout_falls_back() {
        let config = FileAggregationConfig {
            call_timeout_secs: u64::MAX,
            ..FileAggregationConfig::default()
        };
        let (params, issues) = config.to_params();
        assert_eq!(params.call_timeout, AggregationParams::default().call_timeout);
        assert!(params.validate().is_ok());
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0].code, ConfigIssueCode::TooLarge { max: 3600, .. }));
    }
}
