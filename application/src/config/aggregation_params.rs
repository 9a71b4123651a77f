//! Aggregation parameters: provider call control.
//!
//! [`AggregationParams`] groups the static parameters that control how
//! [`AggregateReportUseCase`](crate::use_cases::aggregate_report::AggregateReportUseCase)
//! talks to providers. These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use trade_insight_domain::MatchStrategy;

/// Invalid parameter combinations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("result_limit must be at least 1")]
    ZeroResultLimit,

    #[error("call_timeout must be greater than zero")]
    ZeroTimeout,

    #[error("call_timeout must not exceed {max}s", max = MAX_CALL_TIMEOUT.as_secs())]
    TimeoutTooLong,
}

/// Longest accepted per-call timeout.
pub const MAX_CALL_TIMEOUT: Duration = Duration::from_secs(3600);


/// Provider call control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationParams {
    /// Maximum hits requested from a provider per call.
    pub result_limit: usize,
    /// Upper bound on a single provider call. An elapsed timeout counts as
    /// an unavailable provider.
    pub call_timeout: Duration,
    /// How institutions are matched to a trade.
    pub match_strategy: MatchStrategy,
}

impl Default for AggregationParams {
    fn default() -> Self {
        Self {
            result_limit: 10,
            call_timeout: Duration::from_secs(30),
            match_strategy: MatchStrategy::TitleKeyword,
        }
    }
}

impl AggregationParams {
    // ==================== Builder Methods ====================

    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    pub fn with_match_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.match_strategy = strategy;
        self
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.result_limit == 0 {
            return Err(ParamsError::ZeroResultLimit);
        }
        if self.call_timeout.is_zero() {
            return Err(ParamsError::ZeroTimeout);
        }
        if self.call_timeout > MAX_CALL_TIMEOUT {
            return Err(ParamsError::TimeoutTooLong);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = AggregationParams::default();
        assert_eq!(params.result_limit, 10);
        assert_eq!(params.call_timeout, Duration::from_secs(30));
        assert_eq!(params.match_strategy, MatchStrategy::TitleKeyword);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let params = AggregationParams::default()
            .with_result_limit(25)
            .with_call_timeout(Duration::from_secs(5))
            .with_match_strategy(MatchStrategy::ClassificationCode);

        assert_eq!(params.result_limit, 25);
        assert_eq!(params.call_timeout, Duration::from_secs(5));
        assert_eq!(params.match_strategy, MatchStrategy::ClassificationCode);
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        assert_eq!(
            AggregationParams::default().with_result_limit(0).validate(),
            Err(ParamsError::ZeroResultLimit)
        );
        assert_eq!(
            AggregationParams::default()
                .with_call_timeout(Duration::ZERO)
                .validate(),
            Err(ParamsError::ZeroTimeout)
        );
    }

    #[test]
    fn test_validate_rejects_oversized_timeout() {
        let at_max = AggregationParams::default().with_call_timeout(MAX_CALL_TIMEOUT);
        assert!(at_max.validate().is_ok());
        assert_eq!(
            AggregationParams::default()
                .with_call_timeout(Duration::from_secs(u64::MAX))
                .validate(),
            Err(ParamsError::TimeoutTooLong)
        );
    }
}
