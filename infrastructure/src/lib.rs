//! Infrastructure layer for trade-insight
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;
pub mod secret;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileConfig, FileOutputConfig, OutlookProvider,
    Severity,
};
pub use providers::{
    FirecrawlClient, ProviderError, ProviderFactory, ScorecardClient, SerpApiJobsClient,
    SerpApiWebClient, UnconfiguredProvider,
};
pub use secret::ApiKey;
