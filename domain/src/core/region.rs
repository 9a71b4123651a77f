//! Region value object: a U.S. state and its postal abbreviation

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A U.S. state (Value Object)
///
/// The full name is the external key callers select by; the two-letter
/// abbreviation is what the education-records API filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    name: &'static str,
    abbreviation: &'static str,
}

const STATES: [(&str, &str); 50] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

impl Region {
    /// Look up a state by its full name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        let needle = name.trim();
        STATES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(needle))
            .map(|&(name, abbreviation)| Self { name, abbreviation })
            .ok_or_else(|| DomainError::UnknownRegion(name.to_string()))
    }

    /// Look up a state by its two-letter abbreviation, ignoring case.
    pub fn from_abbreviation(abbreviation: &str) -> Result<Self, DomainError> {
        let needle = abbreviation.trim();
        STATES
            .iter()
            .find(|(_, a)| a.eq_ignore_ascii_case(needle))
            .map(|&(name, abbreviation)| Self { name, abbreviation })
            .ok_or_else(|| DomainError::UnknownRegion(abbreviation.to_string()))
    }

    /// All 50 states in alphabetical order.
    pub fn all() -> impl Iterator<Item = Region> {
        STATES
            .iter()
            .map(|&(name, abbreviation)| Self { name, abbreviation })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn abbreviation(&self) -> &'static str {
        self.abbreviation
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::str::FromStr for Region {
    type Err = DomainError;

    /// Full names are the primary key; two-letter abbreviations are also accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::from_name(s).or_else(|_| {
            if s.trim().len() == 2 {
                Region::from_abbreviation(s)
            } else {
                Err(DomainError::UnknownRegion(s.to_string()))
            }
        })
    }
}

impl Serialize for Region {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
