//! Report formatters

pub mod console;
pub mod formatter;
pub mod markdown;

pub use console::ConsoleFormatter;
pub use formatter::{JsonFormatter, ReportFormatter, formatter_for};
pub use markdown::MarkdownFormatter;
