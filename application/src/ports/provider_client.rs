//! Provider client port
//!
//! Defines the uniform interface over every external data source.

use async_trait::async_trait;
use std::sync::Arc;
use trade_insight_domain::{Diagnostic, ProviderKind, RawHit, SearchQuery};

/// Outcome of one provider call.
///
/// `Unavailable` is deliberately not an `Err`: the cascade treats it the
/// same as an empty hit list, and only the report keeps the difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderResponse {
    Hits(Vec<RawHit>),
    Unavailable(Diagnostic),
}

impl ProviderResponse {
    pub fn empty() -> Self {
        ProviderResponse::Hits(Vec::new())
    }
}

/// Client for one external data source.
///
/// Implementations (adapters) live in the infrastructure layer. They must
/// not panic or return early with an error: every failure becomes
/// [`ProviderResponse::Unavailable`].
#[async_trait]
pub trait ProviderClient: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Issue one query, asking for at most `limit` hits.
    async fn query(&self, query: &SearchQuery, limit: usize) -> ProviderResponse;
}

/// The providers serving each need.
#[derive(Clone)]
pub struct ProviderSet {
    pub outlook: Arc<dyn ProviderClient>,
    pub institutions: Arc<dyn ProviderClient>,
    pub jobs: Arc<dyn ProviderClient>,
}

impl std::fmt::Debug for ProviderSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSet")
            .field("outlook", &self.outlook.kind())
            .field("institutions", &self.institutions.kind())
            .field("jobs", &self.jobs.kind())
            .finish()
    }
}
