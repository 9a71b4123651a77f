//! Normalized record types, one per information need

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Sentinel for any string field a provider did not supply.
pub const NOT_AVAILABLE: &str = "N/A";

/// Annual tuition, or the explicit absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TuitionCost {
    Usd(u32),
    #[default]
    NotAvailable,
}

impl TuitionCost {
    pub fn from_option(value: Option<u32>) -> Self {
        value.map_or(TuitionCost::NotAvailable, TuitionCost::Usd)
    }

    pub fn amount(&self) -> Option<u32> {
        match self {
            TuitionCost::Usd(v) => Some(*v),
            TuitionCost::NotAvailable => None,
        }
    }
}

impl std::fmt::Display for TuitionCost {
    /// `$10,000` or `N/A`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuitionCost::NotAvailable => write!(f, "{}", NOT_AVAILABLE),
            TuitionCost::Usd(amount) => {
                let digits = amount.to_string();
                let mut grouped = String::new();
                for (i, ch) in digits.chars().enumerate() {
                    if i > 0 && (digits.len() - i) % 3 == 0 {
                        grouped.push(',');
                    }
                    grouped.push(ch);
                }
                write!(f, "${}", grouped)
            }
        }
    }
}

impl Serialize for TuitionCost {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TuitionCost::Usd(amount) => serializer.serialize_u32(*amount),
            TuitionCost::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// Labor-market outlook finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlookRecord {
    pub title: String,
    /// Summary text for the finding.
    pub snippet: String,
    pub link: String,
    pub source: String,
}

/// A training institution, identified by its exact name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstitutionRecord {
    pub name: String,
    pub tuition_cost: TuitionCost,
    pub program_titles: BTreeSet<String>,
}

impl InstitutionRecord {
    pub fn new(
        name: impl Into<String>,
        tuition_cost: TuitionCost,
        program_titles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            tuition_cost,
            program_titles: program_titles.into_iter().map(Into::into).collect(),
        }
    }

    /// Identity key used by the dedup merge: exact, case-sensitive name.
    pub fn identity(&self) -> &str {
        &self.name
    }
}

/// A posted job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
}

/// Any normalized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum NormalizedRecord {
    Outlook(OutlookRecord),
    Institution(InstitutionRecord),
    Job(JobRecord),
}

impl From<OutlookRecord> for NormalizedRecord {
    fn from(r: OutlookRecord) -> Self {
        NormalizedRecord::Outlook(r)
    }
}

impl From<InstitutionRecord> for NormalizedRecord {
    fn from(r: InstitutionRecord) -> Self {
        NormalizedRecord::Institution(r)
    }
}

impl From<JobRecord> for NormalizedRecord {
    fn from(r: JobRecord) -> Self {
        NormalizedRecord::Job(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuition_display() {
        assert_eq!(TuitionCost::Usd(10000).to_string(), "$10,000");
        assert_eq!(TuitionCost::Usd(950).to_string(), "$950");
        assert_eq!(TuitionCost::Usd(1234567).to_string(), "$1,234,567");
        assert_eq!(TuitionCost::NotAvailable.to_string(), "N/A");
    }

    #[test]
    fn test_tuition_serialize() {
        assert_eq!(serde_json::to_string(&TuitionCost::Usd(4200)).unwrap(), "4200");
        assert_eq!(
            serde_json::to_string(&TuitionCost::NotAvailable).unwrap(),
            "\"N/A\""
        );
    }

    #[test]
    fn test_program_titles_are_ordered() {
        let record =
            InstitutionRecord::new("X", TuitionCost::NotAvailable, ["Welding", "Machining"]);
        let titles: Vec<_> = record.program_titles.iter().cloned().collect();
        assert_eq!(titles, vec!["Machining", "Welding"]);
    }

    #[test]
    fn test_normalized_record_tagging() {
        let record: NormalizedRecord = JobRecord {
            title: "Electrician".into(),
            company: NOT_AVAILABLE.into(),
            location: "Austin, TX".into(),
            link: NOT_AVAILABLE.into(),
        }
        .into();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["variant"], "job");
        assert_eq!(json["company"], "N/A");
    }
}
