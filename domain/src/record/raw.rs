//! Raw provider hits
//!
//! Providers decode their own wire payloads and hand the engine one of
//! these shapes. Every field is optional because providers omit fields
//! freely; the normalizer decides what a missing field becomes.

use serde::{Deserialize, Serialize};

/// A search-engine style hit: title, snippet and link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebHit {
    pub title: Option<String>,
    pub snippet: Option<String>,
    pub link: Option<String>,
    /// Publisher name, when the provider reports one.
    pub source: Option<String>,
}

/// An education-records hit: one institution and its matching programs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionHit {
    pub name: Option<String>,
    /// Annual in-state tuition in whole dollars.
    pub tuition: Option<u32>,
    pub program_titles: Vec<String>,
}

/// A job-board hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingHit {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub link: Option<String>,
}

/// One provider hit, in the shape its provider delivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum RawHit {
    Web(WebHit),
    Institution(InstitutionHit),
    Posting(PostingHit),
}

impl RawHit {
    pub fn shape(&self) -> &'static str {
        match self {
            RawHit::Web(_) => "web",
            RawHit::Institution(_) => "institution",
            RawHit::Posting(_) => "posting",
        }
    }
}
