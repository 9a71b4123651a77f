//! Provider identity and the diagnostics providers leave behind
//!
//! A provider call never fails outward: a transport error, an HTTP error
//! status, a timeout, or an undecodable payload all collapse into "no
//! hits" for the cascade. The [`Diagnostic`] is the side channel that
//! keeps the cause, so a report (or a test) can still tell an outage from
//! a genuinely empty answer.

use serde::{Deserialize, Serialize};

/// External data sources the engine knows how to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Firecrawl search (labor-statistics crawler).
    Firecrawl,
    /// SerpApi Google organic web search.
    SerpApiWeb,
    /// SerpApi Google Jobs.
    SerpApiJobs,
    /// U.S. Department of Education College Scorecard.
    CollegeScorecard,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Firecrawl => "firecrawl",
            ProviderKind::SerpApiWeb => "serpapi-web",
            ProviderKind::SerpApiJobs => "serpapi-jobs",
            ProviderKind::CollegeScorecard => "college-scorecard",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a provider call contributed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Transport, auth, rate-limit, or HTTP error status.
    ProviderUnavailable,
    /// The per-call timeout elapsed.
    Timeout,
    /// The payload (or one hit in it) could not be decoded or normalized.
    MalformedResponse,
}

/// Side-channel record of a failed or partially unusable provider call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub provider: ProviderKind,
    pub kind: DiagnosticKind,
    /// HTTP status code, when the failure came with one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub message: String,
}

impl Diagnostic {
    pub fn unavailable(
        provider: ProviderKind,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            kind: DiagnosticKind::ProviderUnavailable,
            status,
            message: message.into(),
        }
    }

    pub fn timeout(provider: ProviderKind, after: std::time::Duration) -> Self {
        Self {
            provider,
            kind: DiagnosticKind::Timeout,
            status: None,
            message: format!("no response within {:.1}s", after.as_secs_f64()),
        }
    }

    pub fn malformed(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self {
            provider,
            kind: DiagnosticKind::MalformedResponse,
            status: None,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} [{}]: {}", self.provider, status, self.message),
            None => write!(f, "{}: {}", self.provider, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_display_with_status() {
        let d = Diagnostic::unavailable(ProviderKind::SerpApiWeb, Some(429), "rate limited");
        assert_eq!(d.to_string(), "serpapi-web [429]: rate limited");
        assert_eq!(d.kind, DiagnosticKind::ProviderUnavailable);
    }

    #[test]
    fn test_timeout_message() {
        let d = Diagnostic::timeout(ProviderKind::Firecrawl, Duration::from_millis(1500));
        assert_eq!(d.kind, DiagnosticKind::Timeout);
        assert_eq!(d.to_string(), "firecrawl: no response within 1.5s");
    }

    #[test]
    fn test_serialize_omits_missing_status() {
        let d = Diagnostic::malformed(ProviderKind::CollegeScorecard, "bad json");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["kind"], "malformed_response");
        assert!(json.get("status").is_none());
    }
}
