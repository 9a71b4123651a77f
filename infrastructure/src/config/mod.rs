//! Configuration file loading for trade-insight
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRADE_INSIGHT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./trade-insight.toml` or `./.trade-insight.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/trade-insight/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod issue;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    FileAggregationConfig, FileConfig, FileFirecrawlConfig, FileOutputConfig, FileProvidersConfig,
    FileScorecardConfig, FileSerpApiConfig, OutlookProvider, build_keyword_table,
};
pub use issue::{ConfigIssue, ConfigIssueCode, Severity};
pub use loader::ConfigLoader;
