//! Output formatter trait

use super::console::ConsoleFormatter;
use super::markdown::MarkdownFormatter;
use trade_insight_domain::{OutputFormat, TradeReport};

/// Trait for rendering a finished report
pub trait ReportFormatter {
    fn format(&self, report: &TradeReport) -> String;
}

/// Pretty-printed JSON of the whole report, attempts and diagnostics included
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &TradeReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }
}

pub fn formatter_for(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Full => Box::new(ConsoleFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trips_to_value() {
        let json = JsonFormatter.format(&fixtures::report());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["trade"], "Construction");
        assert_eq!(value["region"], "Texas");
        assert_eq!(value["outlook"]["records"], serde_json::json!([]));
        assert_eq!(value["institutions"]["records"][0]["tuition_cost"], 10000);
        assert_eq!(
            value["outlook"]["attempts"][0]["diagnostics"][0]["status"],
            402
        );
    }
}
