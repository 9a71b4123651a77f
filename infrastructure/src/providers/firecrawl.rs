//! Firecrawl search adapter (labor-statistics crawler).
//!
//! `POST {base}/v1/search` with a bearer token and `{query, limit}`. Each
//! result becomes a [`WebHit`]; Firecrawl reports no publisher name, so the
//! normalizer derives the source from the link.

use super::error::ProviderError;
use super::http::read_json;
use crate::secret::ApiKey;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use trade_insight_application::{ProviderClient, ProviderResponse};
use trade_insight_domain::{ProviderKind, RawHit, SearchQuery, WebHit};

pub const DEFAULT_BASE_URL: &str = "https://api.firecrawl.dev";

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    limit: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Vec<SearchItem>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    url: Option<String>,
    title: Option<String>,
    description: Option<String>,
}

impl SearchResponse {
    fn into_hits(self) -> Result<Vec<RawHit>, ProviderError> {
        if !self.success {
            return Err(ProviderError::Api(
                self.error
                    .unwrap_or_else(|| "search was not successful".to_string()),
            ));
        }
        Ok(self
            .data
            .into_iter()
            .map(|item| {
                RawHit::Web(WebHit {
                    title: item.title,
                    snippet: item.description,
                    link: item.url,
                    source: None,
                })
            })
            .collect())
    }
}

/// Outlook provider backed by Firecrawl's search endpoint.
pub struct FirecrawlClient {
    http: reqwest::Client,
    api_key: ApiKey,
    base_url: String,
}

impl FirecrawlClient {
    pub fn new(http: reqwest::Client, api_key: ApiKey, base_url: impl Into<String>) -> Self {
        Self {
            http,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn search(
        &self,
        query: &SearchQuery,
        limit: usize,
    ) -> Result<Vec<RawHit>, ProviderError> {
        let url = format!("{}/v1/search", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(&SearchRequest {
                query: query.text(),
                limit,
            })
            .send()
            .await?;

        read_json::<SearchResponse>(response).await?.into_hits()
    }
}

#[async_trait]
impl ProviderClient for FirecrawlClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Firecrawl
    }

    async fn query(&self, query: &SearchQuery, limit: usize) -> ProviderResponse {
        match self.search(query, limit).await {
            Ok(hits) => {
                debug!("firecrawl returned {} hit(s)", hits.len());
                ProviderResponse::Hits(hits)
            }
            Err(e) => {
                warn!("firecrawl search failed: {}", e);
                ProviderResponse::Unavailable(e.into_diagnostic(self.kind()))
            }
        }
    }
}
