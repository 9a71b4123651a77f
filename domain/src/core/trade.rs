//! Trade value object representing a labor-market industry category

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported trades (Value Object)
///
/// A closed set of industry categories the caller selects from. Every
/// aggregation request is scoped to exactly one trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Trade {
    Manufacturing,
    Automotive,
    Construction,
    Energy,
    Healthcare,
    InformationTechnology,
}

impl Trade {
    /// Every trade, in display order.
    pub const ALL: [Trade; 6] = [
        Trade::Manufacturing,
        Trade::Automotive,
        Trade::Construction,
        Trade::Energy,
        Trade::Healthcare,
        Trade::InformationTechnology,
    ];

    /// Display label for this trade
    pub fn label(&self) -> &'static str {
        match self {
            Trade::Manufacturing => "Manufacturing",
            Trade::Automotive => "Automotive",
            Trade::Construction => "Construction",
            Trade::Energy => "Energy",
            Trade::Healthcare => "Healthcare",
            Trade::InformationTechnology => "Information Technology",
        }
    }

    /// Lowercase label, used as the primary search keyword.
    pub fn lowercase_label(&self) -> String {
        self.label().to_lowercase()
    }

    /// Snake-case key used in configuration tables (`[keywords]`).
    pub fn config_key(&self) -> &'static str {
        match self {
            Trade::Manufacturing => "manufacturing",
            Trade::Automotive => "automotive",
            Trade::Construction => "construction",
            Trade::Energy => "energy",
            Trade::Healthcare => "healthcare",
            Trade::InformationTechnology => "information_technology",
        }
    }
}

impl std::fmt::Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Trade {
    type Err = DomainError;

    /// Accepts the display label, the config key, or `it`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if needle == "it" {
            return Ok(Trade::InformationTechnology);
        }
        Trade::ALL
            .into_iter()
            .find(|t| t.lowercase_label() == needle || t.config_key() == needle)
            .ok_or_else(|| DomainError::UnknownTrade(s.to_string()))
    }
}

impl Serialize for Trade {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Trade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
