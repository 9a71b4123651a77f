//! Domain layer for trade-insight
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! A request is one ([`Trade`], [`Region`]) pair. It is answered with a
//! [`TradeReport`] covering three needs:
//!
//! - **Outlook**: labor-market projections, found by a cascade of
//!   progressively broader queries
//! - **Institutions**: training programs, found by querying every expanded
//!   keyword and merging the results by institution name
//! - **Jobs**: current postings, found by a single query
//!
//! Provider payloads arrive as [`RawHit`]s and leave as normalized records
//! with every field populated (missing values become [`NOT_AVAILABLE`]).

pub mod config;
pub mod core;
pub mod keyword;
pub mod merge;
pub mod provider;
pub mod query;
pub mod record;
pub mod report;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, region::Region, trade::Trade};
pub use keyword::{CipCode, KeywordExpander, KeywordSet, KeywordTable, MatchStrategy, SearchTerm};
pub use merge::{Mergeable, merge, merge_institutions};
pub use provider::{Diagnostic, DiagnosticKind, ProviderKind};
pub use query::{Intent, SearchQuery, build_query, build_term_query};
pub use record::{
    Need, ResultCollection,
    entities::{
        InstitutionRecord, JobRecord, NOT_AVAILABLE, NormalizedRecord, OutlookRecord, TuitionCost,
    },
    normalize::{Normalize, NormalizeError, normalize_all},
    raw::{InstitutionHit, PostingHit, RawHit, WebHit},
};
pub use report::{AttemptLog, NeedOutcome, NeedStatus, TradeReport};
