//! Shared HTTP plumbing for the provider adapters.

use super::error::ProviderError;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("trade-insight/", env!("CARGO_PKG_VERSION"));

/// Longest error body excerpt carried into a diagnostic.
const MAX_ERROR_BODY: usize = 200;

/// Build the client shared by every adapter.
///
/// `timeout` is a transport-level backstop; the per-call timeout that the
/// report relies on is enforced by the aggregation use case.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .build()
        .map_err(ProviderError::from)
}

/// Check the status and decode the body as `T`.
///
/// A non-success status becomes [`ProviderError::Status`] carrying an
/// excerpt of the body; a body that does not match `T` becomes
/// [`ProviderError::Decode`].
pub async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ProviderError::Status {
            status: status.as_u16(),
            message: error_excerpt(status, &body),
        });
    }

    serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
}

fn error_excerpt(status: reqwest::StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("request rejected")
            .to_string();
    }
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_error_excerpt_empty_body_uses_reason() {
        assert_eq!(
            error_excerpt(StatusCode::TOO_MANY_REQUESTS, "  "),
            "Too Many Requests"
        );
    }

    #[test]
    fn test_error_excerpt_truncates() {
        let long = "x".repeat(500);
        let excerpt = error_excerpt(StatusCode::BAD_GATEWAY, &long);
        assert_eq!(excerpt.chars().count(), MAX_ERROR_BODY + 1);
        assert!(excerpt.ends_with('…'));
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(5)).is_ok());
    }
}
