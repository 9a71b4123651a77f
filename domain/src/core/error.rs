//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown trade: '{0}'")]
    UnknownTrade(String),

    #[error("Unknown state: '{0}'")]
    UnknownRegion(String),

    #[error("Keyword cannot be empty")]
    EmptyKeyword,

    #[error("Invalid CIP code: '{0}' (expected NN.NN)")]
    InvalidCipCode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_trade_display() {
        let error = DomainError::UnknownTrade("Baking".to_string());
        assert_eq!(error.to_string(), "Unknown trade: 'Baking'");
    }

    #[test]
    fn test_unknown_region_display() {
        let error = DomainError::UnknownRegion("Atlantis".to_string());
        assert_eq!(error.to_string(), "Unknown state: 'Atlantis'");
    }
}
