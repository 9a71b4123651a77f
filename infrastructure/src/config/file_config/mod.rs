//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod aggregation;
mod keywords;
mod output;
mod providers;

pub use aggregation::{FileAggregationConfig, OutlookProvider};
pub use keywords::build_keyword_table;
pub use output::FileOutputConfig;
pub use providers::{
    FileFirecrawlConfig, FileProvidersConfig, FileScorecardConfig, FileSerpApiConfig,
};

use super::issue::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trade_insight_domain::KeywordTable;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Limits, timeout, match strategy and outlook provider
    pub aggregation: FileAggregationConfig,
    /// Credentials and endpoints
    pub providers: FileProvidersConfig,
    /// Per-trade keyword overrides
    pub keywords: BTreeMap<String, Vec<String>>,
    /// Per-trade CIP code overrides
    pub cip_codes: BTreeMap<String, Vec<String>>,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Keyword table with the configured overrides applied.
    pub fn keyword_table(&self) -> (KeywordTable, Vec<ConfigIssue>) {
        build_keyword_table(&self.keywords, &self.cip_codes)
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Every issue is recoverable: the offending value is ignored and a
    /// default takes its place.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.aggregation.to_params().1);
        issues.extend(self.aggregation.parse_outlook_provider().1);
        issues.extend(self.keyword_table().1);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trade_insight_domain::{MatchStrategy, OutputFormat, Trade};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[aggregation]
result_limit = 5
call_timeout_secs = 12
match_strategy = "classification-code"
outlook_provider = "serpapi"

[providers.firecrawl]
api_key_env = "MY_FIRECRAWL_KEY"

[providers.scorecard]
base_url = "http://localhost:9000"

[keywords]
construction = ["carpentry", "masonry"]

[cip_codes]
construction = ["46.02"]

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.aggregation.result_limit, 5);
        assert_eq!(
            config.aggregation.parse_match_strategy().0,
            MatchStrategy::ClassificationCode
        );
        assert_eq!(config.providers.firecrawl.api_key_env, "MY_FIRECRAWL_KEY");
        assert_eq!(config.providers.scorecard.base_url, "http://localhost:9000");
        assert_eq!(config.output.format, Some(OutputFormat::Json));

        let (table, issues) = config.keyword_table();
        assert!(issues.is_empty());
        assert_eq!(table.synonyms(Trade::Construction).len(), 2);
        assert_eq!(table.codes(Trade::Construction).len(), 1);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[aggregation]
result_limit = 3
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.aggregation.call_timeout_secs, 30);
        assert_eq!(config.aggregation.outlook_provider, "firecrawl");
        assert!(config.keywords.is_empty());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[aggregation]
result_limit = 0
match_strategy = "fuzzy"
outlook_provider = "bing"

[keywords]
farming = ["tractors"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate().len(), 4);
    }
}
