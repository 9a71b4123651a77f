//! Provider adapter errors.

use thiserror::Error;
use trade_insight_domain::{Diagnostic, ProviderKind};

/// Why a provider call produced no hits.
///
/// Never leaves the infrastructure layer: adapters convert it into a
/// [`Diagnostic`] before answering the port.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("provider reported an error: {0}")]
    Api(String),

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ProviderError {
    pub fn into_diagnostic(self, provider: ProviderKind) -> Diagnostic {
        match self {
            ProviderError::Status { status, message } => {
                Diagnostic::unavailable(provider, Some(status), message)
            }
            ProviderError::Transport(message) | ProviderError::Api(message) => {
                Diagnostic::unavailable(provider, None, message)
            }
            ProviderError::Decode(message) => Diagnostic::malformed(provider, message),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest includes the full URL in its messages, and some providers
        // take the API key as a query parameter.
        ProviderError::Transport(err.without_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trade_insight_domain::DiagnosticKind;

    #[test]
    fn test_status_keeps_code() {
        let diag = ProviderError::Status {
            status: 429,
            message: "rate limited".to_string(),
        }
        .into_diagnostic(ProviderKind::SerpApiJobs);
        assert_eq!(diag.kind, DiagnosticKind::ProviderUnavailable);
        assert_eq!(diag.status, Some(429));
        assert_eq!(diag.provider, ProviderKind::SerpApiJobs);
    }

    #[test]
    fn test_decode_is_malformed() {
        let diag = ProviderError::Decode("expected value".to_string())
            .into_diagnostic(ProviderKind::CollegeScorecard);
        assert_eq!(diag.kind, DiagnosticKind::MalformedResponse);
        assert_eq!(diag.status, None);
    }

    #[test]
    fn test_api_error_is_unavailable() {
        let diag = ProviderError::Api("Invalid API key".to_string())
            .into_diagnostic(ProviderKind::Firecrawl);
        assert_eq!(diag.kind, DiagnosticKind::ProviderUnavailable);
        assert!(diag.message.contains("Invalid API key"));
    }
}
