//! Result normalizer: raw hits to complete records
//!
//! One mapping per (hit shape, need). Missing string fields become
//! [`NOT_AVAILABLE`] and missing tuition becomes
//! [`TuitionCost::NotAvailable`], so every record of a variant carries the
//! same complete field set. A hit that does not fit the need at all is an
//! error and contributes no record.

use super::entities::{
    InstitutionRecord, JobRecord, NOT_AVAILABLE, OutlookRecord, TuitionCost,
};
use super::raw::RawHit;
use super::Need;
use thiserror::Error;

/// Why a single hit could not become a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("{shape} hit cannot serve the {need} need")]
    ShapeMismatch { need: Need, shape: &'static str },

    #[error("{need} hit has no {field}")]
    MissingIdentity { need: Need, field: &'static str },

    #[error("{need} hit carries no usable fields")]
    Empty { need: Need },
}

/// A record type that can be produced from raw hits.
pub trait Normalize: Sized {
    /// The need this record type serves.
    const NEED: Need;

    fn normalize(hit: &RawHit) -> Result<Self, NormalizeError>;
}

/// Normalize every hit, keeping the records and the per-hit failures apart.
pub fn normalize_all<R: Normalize>(hits: &[RawHit]) -> (Vec<R>, Vec<NormalizeError>) {
    let mut records = Vec::with_capacity(hits.len());
    let mut errors = Vec::new();
    for hit in hits {
        match R::normalize(hit) {
            Ok(record) => records.push(record),
            Err(e) => errors.push(e),
        }
    }
    (records, errors)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn or_sentinel(value: &Option<String>) -> String {
    present(value).unwrap_or(NOT_AVAILABLE).to_string()
}

/// Host part of a URL, without `www.`.
fn host_of(link: &str) -> Option<&str> {
    let rest = link.split_once("://").map_or(link, |(_, rest)| rest);
    let host = rest.split(['/', '?', '#']).next()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    (!host.is_empty()).then_some(host)
}

impl Normalize for OutlookRecord {
    const NEED: Need = Need::Outlook;

    fn normalize(hit: &RawHit) -> Result<Self, NormalizeError> {
        let RawHit::Web(web) = hit else {
            return Err(NormalizeError::ShapeMismatch {
                need: Self::NEED,
                shape: hit.shape(),
            });
        };
        if present(&web.title).is_none() && present(&web.snippet).is_none() {
            return Err(NormalizeError::Empty { need: Self::NEED });
        }
        let source = present(&web.source)
            .or_else(|| present(&web.link).and_then(host_of))
            .unwrap_or(NOT_AVAILABLE)
            .to_string();
        Ok(OutlookRecord {
            title: or_sentinel(&web.title),
            snippet: or_sentinel(&web.snippet),
            link: or_sentinel(&web.link),
            source,
        })
    }
}

impl Normalize for InstitutionRecord {
    const NEED: Need = Need::Institutions;

    fn normalize(hit: &RawHit) -> Result<Self, NormalizeError> {
        let RawHit::Institution(inst) = hit else {
            return Err(NormalizeError::ShapeMismatch {
                need: Self::NEED,
                shape: hit.shape(),
            });
        };
        // Names are kept exactly as sourced; only surrounding whitespace goes.
        let name = present(&inst.name).ok_or(NormalizeError::MissingIdentity {
            need: Self::NEED,
            field: "name",
        })?;
        let titles = inst
            .program_titles
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty());
        Ok(InstitutionRecord::new(
            name,
            TuitionCost::from_option(inst.tuition),
            titles,
        ))
    }
}

impl Normalize for JobRecord {
    const NEED: Need = Need::Jobs;

    fn normalize(hit: &RawHit) -> Result<Self, NormalizeError> {
        match hit {
            RawHit::Posting(posting) => {
                if present(&posting.title).is_none() && present(&posting.link).is_none() {
                    return Err(NormalizeError::Empty { need: Self::NEED });
                }
                Ok(JobRecord {
                    title: or_sentinel(&posting.title),
                    company: or_sentinel(&posting.company),
                    location: or_sentinel(&posting.location),
                    link: or_sentinel(&posting.link),
                })
            }
            // Plain search results about job listings: title and link only.
            RawHit::Web(web) => {
                if present(&web.title).is_none() && present(&web.link).is_none() {
                    return Err(NormalizeError::Empty { need: Self::NEED });
                }
                Ok(JobRecord {
                    title: or_sentinel(&web.title),
                    company: or_sentinel(&web.source),
                    location: NOT_AVAILABLE.to_string(),
                    link: or_sentinel(&web.link),
                })
            }
            RawHit::Institution(_) => Err(NormalizeError::ShapeMismatch {
                need: Self::NEED,
                shape: hit.shape(),
            }),
        }
    }
}
