//! Core domain concepts shared across all subdomains.
//!
//! - [`trade::Trade`]: the closed set of supported trades
//! - [`region::Region`]: U.S. states with their postal abbreviations
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod region;
pub mod trade;
