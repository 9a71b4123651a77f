//! College Scorecard adapter (education-records API).
//!
//! Unlike the search adapters this one ignores the rendered query text and
//! reads the structured fields: the region's postal abbreviation and the
//! term (a program-title keyword or a 4-digit CIP code).
//!
//! The API returns every 4-digit program of a matching school, so program
//! titles are filtered again locally to the ones that matched the term.
//! Keywords rarely appear verbatim in CIP titles ("carpentry" vs
//! "Carpenters."), so title matching compares word stems. When no program
//! matches locally the school's programs are kept as returned, since the
//! API-side filter already selected the school.

use super::error::ProviderError;
use super::http::read_json;
use crate::secret::ApiKey;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use trade_insight_application::{ProviderClient, ProviderResponse};
use trade_insight_domain::{InstitutionHit, ProviderKind, RawHit, SearchQuery, SearchTerm};

pub const DEFAULT_BASE_URL: &str = "https://api.data.gov/ed/collegescorecard";

const FIELDS: &str = "school.name,latest.cost.tuition.in_state,latest.programs.cip_4_digit";

/// Scorecard's page-size ceiling.
const MAX_PER_PAGE: usize = 100;

/// Leading characters of a keyword word compared against title words.
const STEM_LEN: usize = 5;

#[derive(Debug, Deserialize)]
struct SchoolsResponse {
    #[serde(default)]
    results: Vec<School>,
}

#[derive(Debug, Deserialize)]
struct School {
    #[serde(rename = "school.name")]
    name: Option<String>,
    #[serde(rename = "latest.cost.tuition.in_state")]
    tuition_in_state: Option<f64>,
    #[serde(rename = "latest.programs.cip_4_digit", default)]
    programs: Vec<Program>,
}

#[derive(Debug, Deserialize)]
struct Program {
    title: Option<String>,
    code: Option<String>,
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

fn stem(word: &str) -> String {
    word.chars().take(STEM_LEN).collect()
}

/// True when any keyword word shares its stem with a title word.
fn title_matches(title: &str, keyword: &str) -> bool {
    let title_words: Vec<String> = words(title).collect();
    words(keyword).any(|kw| {
        let kw = stem(&kw);
        title_words.iter().any(|tw| tw.starts_with(&kw))
    })
}

impl Program {
    fn matches(&self, term: &SearchTerm) -> bool {
        match term {
            SearchTerm::Keyword(keyword) => self
                .title
                .as_deref()
                .is_some_and(|t| title_matches(t, keyword)),
            SearchTerm::Code(code) => self.code.as_deref() == Some(code.compact().as_str()),
        }
    }

    fn clean_title(&self) -> Option<String> {
        self.title
            .as_deref()
            .map(|t| t.trim().trim_end_matches('.').to_string())
            .filter(|t| !t.is_empty())
    }
}

/// Titles of the programs matching `term`, or of every program when none do.
fn program_titles(programs: &[Program], term: &SearchTerm) -> Vec<String> {
    let matched: Vec<String> = programs
        .iter()
        .filter(|p| p.matches(term))
        .filter_map(Program::clean_title)
        .collect();
    if !matched.is_empty() {
        return matched;
    }
    programs.iter().filter_map(Program::clean_title).collect()
}

fn tuition_dollars(value: Option<f64>) -> Option<u32> {
    value
        .filter(|v| v.is_finite() && *v >= 0.0 && *v <= u32::MAX as f64)
        .map(|v| v.round() as u32)
}

impl SchoolsResponse {
    fn into_hits(self, term: &SearchTerm) -> Vec<RawHit> {
        self.results
            .into_iter()
            .map(|school| {
                let program_titles = program_titles(&school.programs, term);
                RawHit::Institution(InstitutionHit {
                    name: school.name,
                    tuition: tuition_dollars(school.tuition_in_state),
                    program_titles,
                })
            })
            .collect()
    }
}

/// Institutions provider backed by the College Scorecard schools endpoint.
pub struct ScorecardClient {
    http: reqwest::Client,
    api_key: ApiKey,
    base_url: String,
}

impl ScorecardClient {
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
        let filter = match query.term() {
            SearchTerm::Keyword(keyword) => ("latest.programs.cip_4_digit.title", keyword.clone()),
            SearchTerm::Code(code) => ("latest.programs.cip_4_digit.code", code.compact()),
        };
        let params = [
            ("school.state", query.region().abbreviation().to_string()),
            ("per_page", limit.min(MAX_PER_PAGE).to_string()),
            ("fields", FIELDS.to_string()),
            (filter.0, filter.1),
        ];

        let response = self
            .http
            .get(format!("{}/v1/schools", self.base_url))
            .query(&params)
            .query(&[("api_key", self.api_key.expose())])
            .send()
            .await?;

        let payload: SchoolsResponse = read_json(response).await?;
        Ok(payload.into_hits(query.term()))
    }
}

#[async_trait]
impl ProviderClient for ScorecardClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::CollegeScorecard
    }

    async fn query(&self, query: &SearchQuery, limit: usize) -> ProviderResponse {
        match self.search(query, limit).await {
            Ok(hits) => {
                debug!(term = %query.term(), "scorecard returned {} school(s)", hits.len());
                ProviderResponse::Hits(hits)
            }
            Err(e) => {
                warn!(term = %query.term(), "scorecard lookup failed: {}", e);
                ProviderResponse::Unavailable(e.into_diagnostic(self.kind()))
            }
        }
    }
}
