//! Presentation layer for trade-insight
//!
//! This crate contains the CLI definition, report formatters
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, StrategyArg};
pub use output::{
    ConsoleFormatter, JsonFormatter, MarkdownFormatter, ReportFormatter, formatter_for,
};
pub use progress::reporter::{ProgressDisplay, ProgressReporter, SimpleProgress};
