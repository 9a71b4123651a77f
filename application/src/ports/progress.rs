//! Progress notification port
//!
//! Defines the interface for reporting progress while a report is built.

use trade_insight_domain::{AttemptLog, Need, NeedStatus, ProviderKind, SearchQuery};

/// Callback for progress updates during aggregation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when work on a need starts. `planned_attempts` is the upper
    /// bound; a cascade may stop earlier.
    fn on_need_start(&self, need: Need, planned_attempts: usize);

    /// Called right before a provider is queried.
    fn on_attempt_start(
        &self,
        _need: Need,
        _index: usize,
        _provider: ProviderKind,
        _query: &SearchQuery,
    ) {
    }

    /// Called after a provider call has been normalized.
    fn on_attempt_complete(&self, _need: Need, _log: &AttemptLog) {}

    /// Called when a need reaches its terminal state.
    fn on_need_complete(&self, need: Need, status: NeedStatus, records: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_need_start(&self, _need: Need, _planned_attempts: usize) {}
    fn on_need_complete(&self, _need: Need, _status: NeedStatus, _records: usize) {}
}
