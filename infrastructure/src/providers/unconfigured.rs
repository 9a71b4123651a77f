//! Stand-in for a provider whose API key is missing.

use async_trait::async_trait;
use trade_insight_application::{ProviderClient, ProviderResponse};
use trade_insight_domain::{Diagnostic, ProviderKind, SearchQuery};

/// Answers every query with an `Unavailable` diagnostic naming the
/// variable to set, so the rest of the report still gets built.
pub struct UnconfiguredProvider {
    kind: ProviderKind,
    api_key_env: String,
}

impl UnconfiguredProvider {
    pub fn new(kind: ProviderKind, api_key_env: impl Into<String>) -> Self {
        Self {
            kind,
            api_key_env: api_key_env.into(),
        }
    }
}

#[async_trait]
impl ProviderClient for UnconfiguredProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn query(&self, _query: &SearchQuery, _limit: usize) -> ProviderResponse {
        ProviderResponse::Unavailable(Diagnostic::unavailable(
            self.kind,
            None,
            format!("no API key configured (set {})", self.api_key_env),
        ))
    }
}
