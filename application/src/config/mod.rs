//! Application-level configuration.
//!
//! - [`AggregationParams`]: result limits, per-call timeout and the
//!   institutions match strategy

pub mod aggregation_params;

pub use aggregation_params::{AggregationParams, MAX_CALL_TIMEOUT, ParamsError};
