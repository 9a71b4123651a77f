//! Application layer for trade-insight
//!
//! This crate contains the cascade resolver, the report use case, port
//! definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AggregationParams, MAX_CALL_TIMEOUT, ParamsError};
pub use ports::{
    progress::{NoProgress, ProgressNotifier},
    provider_client::{ProviderClient, ProviderResponse, ProviderSet},
};
pub use use_cases::aggregate_report::AggregateReportUseCase;
pub use use_cases::cascade::{Attempt, CascadeResolver, CascadeState};
