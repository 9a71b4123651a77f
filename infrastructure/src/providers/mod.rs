//! Provider adapters
//!
//! One [`ProviderClient`](trade_insight_application::ProviderClient) per
//! external source:
//!
//! | Adapter | Need | Hit shape |
//! |---------|------|-----------|
//! | [`FirecrawlClient`] | Outlook (default) | web |
//! | [`SerpApiWebClient`] | Outlook (alternate) | web |
//! | [`ScorecardClient`] | Institutions | institution |
//! | [`SerpApiJobsClient`] | Jobs | posting |
//!
//! Adapters never return errors across the port. Transport failures, HTTP
//! error statuses and undecodable payloads are converted into diagnostics.

mod error;
mod factory;
pub mod firecrawl;
mod http;
pub mod scorecard;
pub mod serpapi;
mod unconfigured;

pub use error::ProviderError;
pub use factory::ProviderFactory;
pub use firecrawl::FirecrawlClient;
pub use http::build_client;
pub use scorecard::ScorecardClient;
pub use serpapi::{SerpApiJobsClient, SerpApiWebClient};
pub use unconfigured::UnconfiguredProvider;
