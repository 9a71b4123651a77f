//! Keyword expansion: from one trade label to the search terms used
//! against providers.
//!
//! A trade like *Construction* is too coarse to find every relevant
//! training program with a single query, so it is expanded into a
//! [`KeywordSet`]: the trade's own lowercase label followed by synonyms
//! from a [`KeywordTable`]. Institutions can alternatively be matched by
//! CIP program classification codes ([`CipCode`]); which of the two the
//! institutions search uses is a [`MatchStrategy`].
//!
//! | Strategy | Terms produced | Provider filter |
//! |----------|----------------|-----------------|
//! | [`TitleKeyword`](MatchStrategy::TitleKeyword) | label + synonyms | program title matches term |
//! | [`ClassificationCode`](MatchStrategy::ClassificationCode) | CIP 4-digit codes | program code equals term |

mod cip;
mod expander;
mod table;

pub use cip::CipCode;
pub use expander::{KeywordExpander, KeywordSet, MatchStrategy, SearchTerm};
pub use table::KeywordTable;
