//! Aggregate Report use case
//!
//! Orchestrates the three needs of a (trade, region) report:
//!
//! | Need | Attempts | Resolution |
//! |------|----------|------------|
//! | Outlook | state → regional → national | cascade, first non-empty wins |
//! | Institutions | one per expanded keyword (or CIP code) | all run, merged by name |
//! | Jobs | one | cascade of one |
//!
//! Needs run one after another and never affect each other: an empty or
//! failed need still leaves the other two to run, and every need always
//! returns a (possibly empty) collection.

use super::cascade::{Attempt, CascadeResolver, run_attempt};
use crate::config::AggregationParams;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::provider_client::ProviderSet;
use chrono::Utc;
use tracing::info;
use trade_insight_domain::{
    InstitutionRecord, Intent, JobRecord, KeywordExpander, Need, NeedOutcome, Normalize,
    OutlookRecord, Region, Trade, TradeReport, build_query, build_term_query, merge_institutions,
};

/// Use case for building one trade report
pub struct AggregateReportUseCase {
    providers: ProviderSet,
    expander: KeywordExpander,
    params: AggregationParams,
}

impl AggregateReportUseCase {
    pub fn new(
        providers: ProviderSet,
        expander: KeywordExpander,
        params: AggregationParams,
    ) -> Self {
        Self {
            providers,
            expander,
            params,
        }
    }

    pub fn params(&self) -> &AggregationParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, trade: Trade, region: Region) -> TradeReport {
        self.execute_with_progress(trade, region, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        trade: Trade,
        region: Region,
        progress: &dyn ProgressNotifier,
    ) -> TradeReport {
        info!(
            "Building {} report for {} ({})",
            trade,
            region,
            self.params.match_strategy
        );

        let outlook = self.outlook(trade, region, progress).await;
        let institutions = self.institutions(trade, region, progress).await;
        let jobs = self.jobs(trade, region, progress).await;

        TradeReport {
            trade,
            region,
            match_strategy: self.params.match_strategy,
            generated_at: Utc::now(),
            outlook,
            institutions,
            jobs,
        }
    }

    /// Outlook attempts, narrowest first.
    pub fn outlook_attempts(&self, trade: Trade, region: Region) -> Vec<Attempt> {
        [
            Intent::StateOutlook,
            Intent::RegionalWorkforce,
            Intent::NationalOutlook,
        ]
        .into_iter()
        .map(|intent| {
            Attempt::new(
                self.providers.outlook.clone(),
                build_query(intent, trade, region),
            )
        })
        .collect()
    }

    /// One institutions attempt per expanded term, in priority order.
    pub fn institution_attempts(&self, trade: Trade, region: Region) -> Vec<Attempt> {
        self.expander
            .terms(trade, self.params.match_strategy)
            .into_iter()
            .map(|term| {
                Attempt::new(
                    self.providers.institutions.clone(),
                    build_term_query(Intent::Institutions, trade, term, region),
                )
            })
            .collect()
    }

    pub fn job_attempts(&self, trade: Trade, region: Region) -> Vec<Attempt> {
        vec![Attempt::new(
            self.providers.jobs.clone(),
            build_query(Intent::JobPostings, trade, region),
        )]
    }

    async fn outlook(
        &self,
        trade: Trade,
        region: Region,
        progress: &dyn ProgressNotifier,
    ) -> NeedOutcome<OutlookRecord> {
        let attempts = self.outlook_attempts(trade, region);
        self.cascade(Need::Outlook, attempts, progress).await
    }

    async fn jobs(
        &self,
        trade: Trade,
        region: Region,
        progress: &dyn ProgressNotifier,
    ) -> NeedOutcome<JobRecord> {
        let attempts = self.job_attempts(trade, region);
        self.cascade(Need::Jobs, attempts, progress).await
    }

    async fn cascade<R: Normalize>(
        &self,
        need: Need,
        attempts: Vec<Attempt>,
        progress: &dyn ProgressNotifier,
    ) -> NeedOutcome<R> {
        progress.on_need_start(need, attempts.len());
        let outcome = CascadeResolver::<R>::new(attempts, &self.params)
            .run(progress)
            .await;
        info!(
            "{}: {} record(s) after {} attempt(s)",
            need,
            outcome.records.len(),
            outcome.attempts.len()
        );
        progress.on_need_complete(need, outcome.status(), outcome.records.len());
        outcome
    }

    /// Every term is queried; nothing short-circuits. Results are merged by
    /// institution name in term order.
    async fn institutions(
        &self,
        trade: Trade,
        region: Region,
        progress: &dyn ProgressNotifier,
    ) -> NeedOutcome<InstitutionRecord> {
        let attempts = self.institution_attempts(trade, region);
        progress.on_need_start(Need::Institutions, attempts.len());

        let mut collections = Vec::with_capacity(attempts.len());
        let mut logs = Vec::with_capacity(attempts.len());
        for (i, attempt) in attempts.iter().enumerate() {
            progress.on_attempt_start(
                Need::Institutions,
                i,
                attempt.provider.kind(),
                &attempt.query,
            );
            let (records, log) = run_attempt::<InstitutionRecord>(attempt, &self.params).await;
            progress.on_attempt_complete(Need::Institutions, &log);
            collections.push(records);
            logs.push(log);
        }

        let merged = merge_institutions(collections);
        info!(
            "institutions: {} unique record(s) from {} term(s)",
            merged.len(),
            logs.len()
        );
        let outcome = NeedOutcome::new(merged, logs);
        progress.on_need_complete(Need::Institutions, outcome.status(), outcome.records.len());
        outcome
    }
}
