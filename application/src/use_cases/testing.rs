//! Scripted providers shared by the use case tests.

use crate::ports::provider_client::{ProviderClient, ProviderResponse};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use trade_insight_domain::{
    Diagnostic, InstitutionHit, ProviderKind, RawHit, SearchQuery, WebHit,
};

/// Shared, ordered record of provider invocations: `(provider name, query text)`.
#[derive(Clone, Default)]
pub(crate) struct CallLog(Arc<Mutex<Vec<(String, String)>>>);

impl CallLog {
    fn record(&self, name: &str, query: &SearchQuery) {
        self.0
            .lock()
            .unwrap()
            .push((name.to_string(), query.text().to_string()));
    }

    pub(crate) fn names(&self) -> Vec<String> {
        self.0.lock().unwrap().iter().map(|(n, _)| n.clone()).collect()
    }

    pub(crate) fn queries(&self) -> Vec<String> {
        self.0.lock().unwrap().iter().map(|(_, q)| q.clone()).collect()
    }
}

type Script = Box<dyn Fn(&SearchQuery) -> ProviderResponse + Send + Sync>;

pub(crate) struct ScriptedProvider {
    name: String,
    kind: ProviderKind,
    calls: CallLog,
    script: Script,
    delay: Option<Duration>,
}

impl ScriptedProvider {
    pub(crate) fn new(
        name: &str,
        calls: &CallLog,
        script: impl Fn(&SearchQuery) -> ProviderResponse + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind: ProviderKind::Firecrawl,
            calls: calls.clone(),
            script: Box::new(script),
            delay: None,
        }
    }

    pub(crate) fn empty(name: &str, calls: &CallLog) -> Self {
        Self::new(name, calls, |_| ProviderResponse::empty())
    }

    pub(crate) fn returning(name: &str, calls: &CallLog, hits: Vec<RawHit>) -> Self {
        Self::new(name, calls, move |_| ProviderResponse::Hits(hits.clone()))
    }

    pub(crate) fn unavailable(name: &str, calls: &CallLog, status: u16) -> Self {
        Self::new(name, calls, move |_| {
            ProviderResponse::Unavailable(Diagnostic::unavailable(
                ProviderKind::Firecrawl,
                Some(status),
                "scripted outage",
            ))
        })
    }

    pub(crate) fn with_kind(mut self, kind: ProviderKind) -> Self {
        self.kind = kind;
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl ProviderClient for ScriptedProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn query(&self, query: &SearchQuery, _limit: usize) -> ProviderResponse {
        self.calls.record(&self.name, query);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.script)(query)
    }
}

pub(crate) fn web_hits(titles: &[&str]) -> Vec<RawHit> {
    titles
        .iter()
        .map(|t| {
            RawHit::Web(WebHit {
                title: Some(t.to_string()),
                snippet: None,
                link: Some(format!("https://www.bls.gov/{}", t)),
                source: None,
            })
        })
        .collect()
}

pub(crate) fn institution_hit(name: &str, tuition: u32, titles: &[&str]) -> RawHit {
    RawHit::Institution(InstitutionHit {
        name: Some(name.to_string()),
        tuition: Some(tuition),
        program_titles: titles.iter().map(|t| t.to_string()).collect(),
    })
}
