//! Provider hits, normalized records and result collections.

pub mod entities;
pub mod normalize;
pub mod raw;

use serde::{Deserialize, Serialize};

/// The three information needs of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Need {
    Outlook,
    Institutions,
    Jobs,
}

impl Need {
    pub fn as_str(&self) -> &'static str {
        match self {
            Need::Outlook => "outlook",
            Need::Institutions => "institutions",
            Need::Jobs => "jobs",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Need::Outlook => "Labor Market Outlook",
            Need::Institutions => "Training Programs",
            Need::Jobs => "Job Postings",
        }
    }
}

impl std::fmt::Display for Need {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered records of one variant for one need.
///
/// An empty collection means "no data found", which is a valid outcome and
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultCollection<R> {
    records: Vec<R>,
}

impl<R> ResultCollection<R> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<R> Default for ResultCollection<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R> From<Vec<R>> for ResultCollection<R> {
    fn from(records: Vec<R>) -> Self {
        Self { records }
    }
}

impl<R> FromIterator<R> for ResultCollection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<R> IntoIterator for ResultCollection<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a ResultCollection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
