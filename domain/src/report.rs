//! Aggregated report for one (trade, region) request

use crate::core::{region::Region, trade::Trade};
use crate::keyword::MatchStrategy;
use crate::provider::{Diagnostic, ProviderKind};
use crate::query::Intent;
use crate::record::ResultCollection;
use crate::record::entities::{InstitutionRecord, JobRecord, OutlookRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What happened on one provider call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptLog {
    pub provider: ProviderKind,
    pub intent: Intent,
    pub query: String,
    /// Raw hits the provider returned.
    pub hits: usize,
    /// Records that survived normalization.
    pub records: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Terminal state of one need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedStatus {
    Found,
    /// Every attempt came back empty. A valid answer, not a failure.
    NoData,
}

/// Records for one need plus the trail of attempts that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeedOutcome<R> {
    pub records: ResultCollection<R>,
    pub attempts: Vec<AttemptLog>,
}

impl<R> NeedOutcome<R> {
    pub fn new(records: ResultCollection<R>, attempts: Vec<AttemptLog>) -> Self {
        Self { records, attempts }
    }

    pub fn status(&self) -> NeedStatus {
        if self.records.is_empty() {
            NeedStatus::NoData
        } else {
            NeedStatus::Found
        }
    }

    /// Every diagnostic raised while serving this need, in attempt order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.attempts.iter().flat_map(|a| a.diagnostics.iter())
    }
}

impl<R> Default for NeedOutcome<R> {
    fn default() -> Self {
        Self {
            records: ResultCollection::empty(),
            attempts: Vec::new(),
        }
    }
}

/// The unified report for one (trade, region) request.
#[derive(Debug, Clone, Serialize)]
pub struct TradeReport {
    pub trade: Trade,
    pub region: Region,
    pub match_strategy: MatchStrategy,
    pub generated_at: DateTime<Utc>,
    pub outlook: NeedOutcome<OutlookRecord>,
    pub institutions: NeedOutcome<InstitutionRecord>,
    pub jobs: NeedOutcome<JobRecord>,
}

impl TradeReport {
    /// Total diagnostics across all three needs.
    pub fn diagnostic_count(&self) -> usize {
        self.outlook.diagnostics().count()
            + self.institutions.diagnostics().count()
            + self.jobs.diagnostics().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::DiagnosticKind;

    fn attempt(diagnostics: Vec<Diagnostic>) -> AttemptLog {
        AttemptLog {
            provider: ProviderKind::Firecrawl,
            intent: Intent::StateOutlook,
            query: "q".to_string(),
            hits: 0,
            records: 0,
            diagnostics,
        }
    }

    #[test]
    fn test_empty_outcome_is_no_data() {
        let outcome: NeedOutcome<OutlookRecord> = NeedOutcome::default();
        assert_eq!(outcome.status(), NeedStatus::NoData);
    }

    #[test]
    fn test_diagnostics_flatten_in_attempt_order() {
        let outcome: NeedOutcome<JobRecord> = NeedOutcome::new(
            ResultCollection::empty(),
            vec![
                attempt(vec![Diagnostic::unavailable(ProviderKind::Firecrawl, Some(500), "boom")]),
                attempt(vec![]),
                attempt(vec![Diagnostic::malformed(ProviderKind::Firecrawl, "bad")]),
            ],
        );
        let kinds: Vec<_> = outcome.diagnostics().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![DiagnosticKind::ProviderUnavailable, DiagnosticKind::MalformedResponse]
        );
    }
}
