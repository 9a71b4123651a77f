//! SerpApi adapters: Google web search and Google Jobs.
//!
//! Both engines share one endpoint, `GET {base}/search.json`, with the API
//! key as a query parameter. SerpApi signals "nothing found" through the
//! `error` field, which is mapped to an empty hit list rather than a
//! failure.

use super::error::ProviderError;
use super::http::read_json;
use crate::secret::ApiKey;
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use trade_insight_application::{ProviderClient, ProviderResponse};
use trade_insight_domain::{PostingHit, ProviderKind, RawHit, SearchQuery, WebHit};

pub const DEFAULT_BASE_URL: &str = "https://serpapi.com";

/// Google caps `num` at 100.
const MAX_NUM: usize = 100;

const NO_RESULTS: &str = "hasn't returned any results";

/// `Ok` when the payload carries no error, or only the no-results notice.
fn check_error(error: Option<String>) -> Result<bool, ProviderError> {
    match error {
        None => Ok(true),
        Some(msg) if msg.contains(NO_RESULTS) => Ok(false),
        Some(msg) => Err(ProviderError::Api(msg)),
    }
}

// ==================== Wire types ====================

#[derive(Debug, Deserialize)]
struct WebResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
    source: Option<String>,
}

impl WebResponse {
    fn into_hits(self) -> Result<Vec<RawHit>, ProviderError> {
        if !check_error(self.error)? {
            return Ok(Vec::new());
        }
        Ok(self
            .organic_results
            .into_iter()
            .map(|r| {
                RawHit::Web(WebHit {
                    title: r.title,
                    snippet: r.snippet,
                    link: r.link,
                    source: r.source,
                })
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct JobsResponse {
    #[serde(default)]
    jobs_results: Vec<JobResult>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JobResult {
    title: Option<String>,
    company_name: Option<String>,
    location: Option<String>,
    share_link: Option<String>,
    #[serde(default)]
    apply_options: Vec<ApplyOption>,
}

#[derive(Debug, Deserialize)]
struct ApplyOption {
    link: Option<String>,
}

impl JobsResponse {
    fn into_hits(self, limit: usize) -> Result<Vec<RawHit>, ProviderError> {
        if !check_error(self.error)? {
            return Ok(Vec::new());
        }
        // Google Jobs has no page-size parameter.
        Ok(self
            .jobs_results
            .into_iter()
            .take(limit)
            .map(|job| {
                // Prefer a direct application link over the Google share link.
                let link = job
                    .apply_options
                    .into_iter()
                    .find_map(|o| o.link)
                    .or(job.share_link);
                RawHit::Posting(PostingHit {
                    title: job.title,
                    company: job.company_name,
                    location: job.location,
                    link,
                })
            })
            .collect())
    }
}

// ==================== Clients ====================

struct SerpApi {
    http: reqwest::Client,
    api_key: ApiKey,
    base_url: String,
}

impl SerpApi {
    fn new(http: reqwest::Client, api_key: ApiKey, base_url: String) -> Self {
        Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        params: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let response = self
            .http
            .get(format!("{}/search.json", self.base_url))
            .query(params)
            .query(&[("api_key", self.api_key.expose())])
            .send()
            .await?;
        read_json(response).await
    }
}

fn respond(kind: ProviderKind, result: Result<Vec<RawHit>, ProviderError>) -> ProviderResponse {
    match result {
        Ok(hits) => {
            debug!("{} returned {} hit(s)", kind, hits.len());
            ProviderResponse::Hits(hits)
        }
        Err(e) => {
            warn!("{} search failed: {}", kind, e);
            ProviderResponse::Unavailable(e.into_diagnostic(kind))
        }
    }
}

/// Outlook provider backed by SerpApi's Google engine.
pub struct SerpApiWebClient {
    inner: SerpApi,
}

impl SerpApiWebClient {
    pub fn new(http: reqwest::Client, api_key: ApiKey, base_url: impl Into<String>) -> Self {
        Self {
            inner: SerpApi::new(http, api_key, base_url.into()),
        }
    }

    async fn search(
        &self,
        query: &SearchQuery,
        limit: usize,
    ) -> Result<Vec<RawHit>, ProviderError> {
        let params = [
            ("engine", "google".to_string()),
            ("q", query.text().to_string()),
            ("num", limit.min(MAX_NUM).to_string()),
        ];
        self.inner.get::<WebResponse>(&params).await?.into_hits()
    }
}

#[async_trait]
impl ProviderClient for SerpApiWebClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::SerpApiWeb
    }

    async fn query(&self, query: &SearchQuery, limit: usize) -> ProviderResponse {
        respond(self.kind(), self.search(query, limit).await)
    }
}

/// Jobs provider backed by SerpApi's Google Jobs engine.
pub struct SerpApiJobsClient {
    inner: SerpApi,
}

impl SerpApiJobsClient {
    pub fn new(http: reqwest::Client, api_key: ApiKey, base_url: impl Into<String>) -> Self {
        Self {
            inner: SerpApi::new(http, api_key, base_url.into()),
        }
    }

    async fn search(
        &self,
        query: &SearchQuery,
        limit: usize,
    ) -> Result<Vec<RawHit>, ProviderError> {
        let params = [
            ("engine", "google_jobs".to_string()),
            ("q", query.text().to_string()),
            ("location", format!("{}, United States", query.region().name())),
        ];
        self.inner
            .get::<JobsResponse>(&params)
            .await?
            .into_hits(limit)
    }
}

#[async_trait]
impl ProviderClient for SerpApiJobsClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::SerpApiJobs
    }

    async fn query(&self, query: &SearchQuery, limit: usize) -> ProviderResponse {
        respond(self.kind(), self.search(query, limit).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trade_insight_domain::{DiagnosticKind, Intent, Region, Trade, build_query};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn jobs_query() -> SearchQuery {
        build_query(
            Intent::JobPostings,
            Trade::Healthcare,
            Region::from_name("Ohio").unwrap(),
        )
    }

    #[test]
    fn test_web_payload_keeps_source() {
        let payload: WebResponse = serde_json::from_value(json!({
            "organic_results": [{
                "position": 1,
                "title": "Healthcare Occupations : Occupational Outlook Handbook",
                "link": "https://www.bls.gov/ooh/healthcare/",
                "snippet": "Employment in healthcare occupations is projected to grow.",
                "source": "Bureau of Labor Statistics"
            }]
        }))
        .unwrap();

        let hits = payload.into_hits().unwrap();
        match &hits[0] {
            RawHit::Web(hit) => {
                assert_eq!(hit.source.as_deref(), Some("Bureau of Labor Statistics"))
            }
            other => panic!("unexpected hit shape: {:?}", other),
        }
    }

    #[test]
    fn test_no_results_notice_is_empty_not_error() {
        let payload: WebResponse = serde_json::from_value(json!({
            "error": "Google hasn't returned any results for this query."
        }))
        .unwrap();
        assert_eq!(payload.into_hits(), Ok(Vec::new()));
    }

    #[test]
    fn test_other_error_is_api_error() {
        let payload: JobsResponse = serde_json::from_value(json!({
            "error": "Invalid API key. Your API key should be here: https://serpapi.com/manage-api-key"
        }))
        .unwrap();
        assert!(matches!(payload.into_hits(10), Err(ProviderError::Api(_))));
    }

    #[test]
    fn test_jobs_payload_prefers_apply_link_and_truncates() {
        let payload: JobsResponse = serde_json::from_value(json!({
            "jobs_results": [
                {
                    "title": "Registered Nurse",
                    "company_name": "Cleveland Clinic",
                    "location": "Cleveland, OH",
                    "share_link": "https://www.google.com/search?ibp=htl;jobs#1",
                    "apply_options": [
                        { "title": "LinkedIn", "link": "https://www.linkedin.com/jobs/view/1" }
                    ]
                },
                {
                    "title": "Medical Assistant",
                    "company_name": "OhioHealth",
                    "share_link": "https://www.google.com/search?ibp=htl;jobs#2"
                },
                { "title": "Phlebotomist" }
            ]
        }))
        .unwrap();

        let hits = payload.into_hits(2).unwrap();
        assert_eq!(hits.len(), 2);
        let links: Vec<_> = hits
            .iter()
            .map(|h| match h {
                RawHit::Posting(p) => p.link.clone(),
                _ => None,
            })
            .collect();
        assert_eq!(
            links,
            vec![
                Some("https://www.linkedin.com/jobs/view/1".to_string()),
                Some("https://www.google.com/search?ibp=htl;jobs#2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_jobs_client_sends_engine_and_location() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param("engine", "google_jobs"))
            .and(query_param("q", "healthcare jobs in Ohio"))
            .and(query_param("location", "Ohio, United States"))
            .and(query_param("api_key", "serp-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jobs_results": [{ "title": "Registered Nurse", "company_name": "Cleveland Clinic" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SerpApiJobsClient::new(
            reqwest::Client::new(),
            ApiKey::new("serp-test").unwrap(),
            server.uri(),
        );
        match client.query(&jobs_query(), 10).await {
            ProviderResponse::Hits(hits) => assert_eq!(hits.len(), 1),
            other => panic!("expected hits, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rate_limit_becomes_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": "Your account has run out of searches."
            })))
            .mount(&server)
            .await;

        let client = SerpApiWebClient::new(
            reqwest::Client::new(),
            ApiKey::new("serp-test").unwrap(),
            server.uri(),
        );
        match client.query(&jobs_query(), 10).await {
            ProviderResponse::Unavailable(diag) => {
                assert_eq!(diag.kind, DiagnosticKind::ProviderUnavailable);
                assert_eq!(diag.status, Some(429));
                assert_eq!(diag.provider, ProviderKind::SerpApiWeb);
            }
            other => panic!("expected unavailable, got {:?}", other),
        }
    }
}
