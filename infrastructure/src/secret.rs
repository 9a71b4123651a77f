//! Opaque API credentials.

use std::fmt;

/// A provider API key.
///
/// The value is only handed to the HTTP layer when a request is built.
/// `Debug` is redacted and there is no `Display`, so a key cannot end up in
/// log fields or error messages by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key. Surrounding whitespace (e.g. a trailing newline from a
    /// secrets file) is stripped; a blank key yields `None`.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Resolve a key from an inline value or, failing that, an environment
    /// variable.
    pub fn resolve(inline: Option<&str>, env_var: &str) -> Option<Self> {
        inline
            .and_then(|v| Self::new(v))
            .or_else(|| std::env::var(env_var).ok().and_then(Self::new))
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
