//! CIP (Classification of Instructional Programs) codes

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A 4-digit CIP program family code, e.g. `46.02` (Carpenters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CipCode(String);

impl CipCode {
    /// Parse `NN.NN` or `NNNN`.
    pub fn parse(code: &str) -> Result<Self, DomainError> {
        let digits: String = code.trim().chars().filter(|c| *c != '.').collect();
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidCipCode(code.to_string()));
        }
        Ok(Self(format!("{}.{}", &digits[..2], &digits[2..])))
    }

    /// Built-in table entries, already in dotted form.
    pub(crate) fn known(dotted: &str) -> Self {
        Self(dotted.to_string())
    }

    /// Dotted form, `46.02`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Undotted form used by the College Scorecard filter, `4602`.
    pub fn compact(&self) -> String {
        self.0.replace('.', "")
    }
}

impl std::fmt::Display for CipCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CipCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CipCode::parse(&value)
    }
}

impl From<CipCode> for String {
    fn from(code: CipCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted_and_compact() {
        assert_eq!(CipCode::parse("46.02").unwrap().as_str(), "46.02");
        assert_eq!(CipCode::parse("4602").unwrap().as_str(), "46.02");
        assert_eq!(CipCode::parse("46.02").unwrap().compact(), "4602");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(CipCode::parse("46").is_err());
        assert!(CipCode::parse("46.0A").is_err());
        assert!(CipCode::parse("").is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: CipCode = serde_json::from_str("\"51.38\"").unwrap();
        assert_eq!(ok.compact(), "5138");
        assert!(serde_json::from_str::<CipCode>("\"nursing\"").is_err());
    }
}
