//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod aggregate_report;
pub mod cascade;

#[cfg(test)]
pub(crate) mod testing;
