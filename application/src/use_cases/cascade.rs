//! Cascade resolver
//!
//! Tries an ordered list of (provider, query) attempts for one need and
//! stops at the first attempt that yields at least one normalized record.
//!
//! ```text
//! Pending ──▶ Trying(0) ──empty──▶ Trying(1) ──empty──▶ … ──▶ Exhausted
//!                │                    │
//!                └──records──▶ Resolved ◀──records──┘
//! ```
//!
//! Attempts run strictly in order, one at a time. Once an attempt
//! resolves, later attempts are never consulted even if they might have
//! returned more. An unavailable provider looks exactly like an empty one
//! here; its diagnostic is kept in the [`AttemptLog`].

use crate::config::AggregationParams;
use crate::ports::progress::ProgressNotifier;
use crate::ports::provider_client::{ProviderClient, ProviderResponse};
use std::sync::Arc;
use tracing::{debug, warn};
use trade_insight_domain::{
    AttemptLog, Diagnostic, NeedOutcome, Normalize, ResultCollection, SearchQuery, normalize_all,
};

/// One (provider, query) pair.
#[derive(Clone)]
pub struct Attempt {
    pub provider: Arc<dyn ProviderClient>,
    pub query: SearchQuery,
}

impl Attempt {
    pub fn new(provider: Arc<dyn ProviderClient>, query: SearchQuery) -> Self {
        Self { provider, query }
    }
}

impl std::fmt::Debug for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attempt")
            .field("provider", &self.provider.kind())
            .field("query", &self.query.text())
            .finish()
    }
}

/// Where a cascade currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeState<R> {
    Pending,
    Trying(usize),
    Resolved(ResultCollection<R>),
    Exhausted,
}

impl<R> CascadeState<R> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CascadeState::Resolved(_) | CascadeState::Exhausted)
    }
}

/// Single-use resolver for one need.
pub struct CascadeResolver<'a, R> {
    attempts: Vec<Attempt>,
    params: &'a AggregationParams,
    state: CascadeState<R>,
    log: Vec<AttemptLog>,
}

impl<'a, R: Normalize> CascadeResolver<'a, R> {
    pub fn new(attempts: Vec<Attempt>, params: &'a AggregationParams) -> Self {
        Self {
            attempts,
            params,
            state: CascadeState::Pending,
            log: Vec::new(),
        }
    }

    pub fn state(&self) -> &CascadeState<R> {
        &self.state
    }

    /// Advance by one transition. Terminal states do not move.
    pub async fn step(&mut self, progress: &dyn ProgressNotifier) {
        let next = match &self.state {
            CascadeState::Pending if self.attempts.is_empty() => CascadeState::Exhausted,
            CascadeState::Pending => CascadeState::Trying(0),
            CascadeState::Trying(i) => {
                let i = *i;
                let attempt = &self.attempts[i];
                progress.on_attempt_start(R::NEED, i, attempt.provider.kind(), &attempt.query);
                let (records, log) = run_attempt::<R>(attempt, self.params).await;
                progress.on_attempt_complete(R::NEED, &log);
                self.log.push(log);

                if !records.is_empty() {
                    debug!(need = %R::NEED, attempt = i, "cascade resolved");
                    CascadeState::Resolved(records)
                } else if i + 1 < self.attempts.len() {
                    CascadeState::Trying(i + 1)
                } else {
                    debug!(need = %R::NEED, "cascade exhausted");
                    CascadeState::Exhausted
                }
            }
            CascadeState::Resolved(_) | CascadeState::Exhausted => return,
        };
        self.state = next;
    }

    /// Run to a terminal state and hand back the records and attempt trail.
    pub async fn run(mut self, progress: &dyn ProgressNotifier) -> NeedOutcome<R> {
        while !self.state.is_terminal() {
            self.step(progress).await;
        }
        let records = match self.state {
            CascadeState::Resolved(records) => records,
            _ => ResultCollection::empty(),
        };
        NeedOutcome::new(records, self.log)
    }
}

/// Query one provider under the per-call timeout and normalize what comes back.
///
/// Never fails: timeouts, unavailable providers and hits that do not
/// normalize all end up as diagnostics on the returned log.
pub(crate) async fn run_attempt<R: Normalize>(
    attempt: &Attempt,
    params: &AggregationParams,
) -> (ResultCollection<R>, AttemptLog) {
    let kind = attempt.provider.kind();
    debug!(
        need = %R::NEED,
        provider = %kind,
        query = attempt.query.text(),
        "querying provider"
    );

    let call = attempt.provider.query(&attempt.query, params.result_limit);
    let response = match tokio::time::timeout(params.call_timeout, call).await {
        Ok(response) => response,
        Err(_) => ProviderResponse::Unavailable(Diagnostic::timeout(kind, params.call_timeout)),
    };

    let mut diagnostics = Vec::new();
    let (mut records, hits) = match response {
        ProviderResponse::Hits(hits) => {
            let (records, errors) = normalize_all::<R>(&hits);
            for error in errors {
                warn!(provider = %kind, "dropping hit: {}", error);
                diagnostics.push(Diagnostic::malformed(kind, error.to_string()));
            }
            (records, hits.len())
        }
        ProviderResponse::Unavailable(diagnostic) => {
            warn!(need = %R::NEED, "provider unavailable: {}", diagnostic);
            diagnostics.push(diagnostic);
            (Vec::new(), 0)
        }
    };
    records.truncate(params.result_limit);

    let log = AttemptLog {
        provider: kind,
        intent: attempt.query.intent(),
        query: attempt.query.text().to_string(),
        hits,
        records: records.len(),
        diagnostics,
    };
    (ResultCollection::from(records), log)
}
