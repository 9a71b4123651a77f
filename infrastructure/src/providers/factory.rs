//! Builds the [`ProviderSet`] for a loaded configuration.

use super::firecrawl::FirecrawlClient;
use super::http::build_client;
use super::scorecard::ScorecardClient;
use super::serpapi::{SerpApiJobsClient, SerpApiWebClient};
use super::unconfigured::UnconfiguredProvider;
use crate::config::{ConfigError, FileProvidersConfig, OutlookProvider};
use crate::secret::ApiKey;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use trade_insight_application::{ProviderClient, ProviderSet};
use trade_insight_domain::ProviderKind;

/// Wires configured credentials into provider clients.
pub struct ProviderFactory<'a> {
    config: &'a FileProvidersConfig,
    http: reqwest::Client,
}

impl<'a> ProviderFactory<'a> {
    /// `transport_timeout` bounds the HTTP client itself; keep it at or
    /// above the per-call timeout.
    pub fn new(
        config: &'a FileProvidersConfig,
        transport_timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let http =
            build_client(transport_timeout).map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn build(&self, outlook: OutlookProvider) -> ProviderSet {
        info!("Using {} for labor market outlook", outlook);
        let outlook = match outlook {
            OutlookProvider::Firecrawl => self.firecrawl(),
            OutlookProvider::SerpApi => self.serpapi_web(),
        };
        ProviderSet {
            outlook,
            institutions: self.scorecard(),
            jobs: self.serpapi_jobs(),
        }
    }

    fn with_key(
        &self,
        kind: ProviderKind,
        key: Option<ApiKey>,
        api_key_env: &str,
        make: impl FnOnce(ApiKey) -> Arc<dyn ProviderClient>,
    ) -> Arc<dyn ProviderClient> {
        match key {
            Some(key) => make(key),
            None => {
                warn!("{}: no API key found (set {})", kind, api_key_env);
                Arc::new(UnconfiguredProvider::new(kind, api_key_env))
            }
        }
    }

    fn firecrawl(&self) -> Arc<dyn ProviderClient> {
        let cfg = &self.config.firecrawl;
        self.with_key(
            ProviderKind::Firecrawl,
            cfg.resolve_key(),
            &cfg.api_key_env,
            |key| Arc::new(FirecrawlClient::new(self.http.clone(), key, &cfg.base_url)),
        )
    }

    fn serpapi_web(&self) -> Arc<dyn ProviderClient> {
        let cfg = &self.config.serpapi;
        self.with_key(
            ProviderKind::SerpApiWeb,
            cfg.resolve_key(),
            &cfg.api_key_env,
            |key| Arc::new(SerpApiWebClient::new(self.http.clone(), key, &cfg.base_url)),
        )
    }

    fn serpapi_jobs(&self) -> Arc<dyn ProviderClient> {
        let cfg = &self.config.serpapi;
        self.with_key(
            ProviderKind::SerpApiJobs,
            cfg.resolve_key(),
            &cfg.api_key_env,
            |key| Arc::new(SerpApiJobsClient::new(self.http.clone(), key, &cfg.base_url)),
        )
    }

    fn scorecard(&self) -> Arc<dyn ProviderClient> {
        let cfg = &self.config.scorecard;
        self.with_key(
            ProviderKind::CollegeScorecard,
            cfg.resolve_key(),
            &cfg.api_key_env,
            |key| Arc::new(ScorecardClient::new(self.http.clone(), key, &cfg.base_url)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trade_insight_application::ProviderResponse;
    use trade_insight_domain::{DiagnosticKind, Intent, Region, Trade, build_query};

    fn unset(env: &str) -> String {
        format!("TRADE_INSIGHT_TEST_UNSET_{}", env)
    }

    #[test]
    fn test_builds_requested_outlook_provider() {
        let mut config = FileProvidersConfig::default();
        config.firecrawl.api_key = Some("fc".to_string());
        config.serpapi.api_key = Some("serp".to_string());
        config.scorecard.api_key = Some("sc".to_string());
        let factory = ProviderFactory::new(&config, Duration::from_secs(5)).unwrap();

        let set = factory.build(OutlookProvider::Firecrawl);
        assert_eq!(set.outlook.kind(), ProviderKind::Firecrawl);
        assert_eq!(set.institutions.kind(), ProviderKind::CollegeScorecard);
        assert_eq!(set.jobs.kind(), ProviderKind::SerpApiJobs);

        let set = factory.build(OutlookProvider::SerpApi);
        assert_eq!(set.outlook.kind(), ProviderKind::SerpApiWeb);
    }

    #[tokio::test]
    async fn test_missing_key_yields_unavailable_provider() {
        let mut config = FileProvidersConfig::default();
        config.scorecard.api_key_env = unset("SCORECARD");
        config.firecrawl.api_key = Some("fc".to_string());
        config.serpapi.api_key = Some("serp".to_string());
        let factory = ProviderFactory::new(&config, Duration::from_secs(5)).unwrap();
        let set = factory.build(OutlookProvider::Firecrawl);

        let query = build_query(
            Intent::Institutions,
            Trade::Energy,
            Region::from_name("Wyoming").unwrap(),
        );
        match set.institutions.query(&query, 10).await {
            ProviderResponse::Unavailable(diag) => {
                assert_eq!(diag.kind, DiagnosticKind::ProviderUnavailable);
                assert_eq!(diag.provider, ProviderKind::CollegeScorecard);
                assert!(diag.message.contains("TRADE_INSIGHT_TEST_UNSET_SCORECARD"));
            }
            other => panic!("expected unavailable, got {:?}", other),
        }
    }
}
