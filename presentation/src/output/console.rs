//! Console output formatter for trade reports

use super::formatter::ReportFormatter;
use colored::Colorize;
use trade_insight_domain::{Diagnostic, Need, NeedOutcome, TradeReport};

/// Formats reports for console display
pub struct ConsoleFormatter;

impl ReportFormatter for ConsoleFormatter {
    fn format(&self, report: &TradeReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!(
            "{} in {}",
            report.trade, report.region
        )));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Generated:".cyan().bold(),
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Programs matched by:".cyan().bold(),
            report.match_strategy
        ));

        // Outlook
        output.push_str(&Self::section_header(Need::Outlook));
        for (i, record) in report.outlook.records.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("{}.", i + 1).yellow().bold(),
                record.title.bold()
            ));
            output.push_str(&format!("{}\n", Self::indent(&record.snippet, "   ")));
            output.push_str(&format!(
                "   {} {}\n",
                record.source.dimmed(),
                record.link.blue()
            ));
        }
        output.push_str(&Self::need_footer(&report.outlook));

        // Institutions
        output.push_str(&Self::section_header(Need::Institutions));
        for record in report.institutions.records.iter() {
            output.push_str(&format!(
                "\n{} {}\n",
                "*".yellow().bold(),
                record.name.bold()
            ));
            output.push_str(&format!(
                "   {} {}\n",
                "In-state tuition:".dimmed(),
                record.tuition_cost
            ));
            if !record.program_titles.is_empty() {
                let titles: Vec<&str> = record.program_titles.iter().map(String::as_str).collect();
                output.push_str(&format!(
                    "   {} {}\n",
                    "Programs:".dimmed(),
                    titles.join(", ")
                ));
            }
        }
        output.push_str(&Self::need_footer(&report.institutions));

        // Jobs
        output.push_str(&Self::section_header(Need::Jobs));
        for record in report.jobs.records.iter() {
            output.push_str(&format!(
                "\n{} {}\n",
                "*".yellow().bold(),
                record.title.bold()
            ));
            output.push_str(&format!("   {} ({})\n", record.company, record.location));
            output.push_str(&format!("   {}\n", record.link.blue()));
        }
        output.push_str(&Self::need_footer(&report.jobs));

        output.push_str(&Self::footer());
        output
    }
}

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(need: Need) -> String {
        format!("\n{}\n{}\n", need.display_name().cyan().bold(), "-".repeat(40))
    }

    /// "No data found" for empty needs, then any diagnostics.
    fn need_footer<R>(outcome: &NeedOutcome<R>) -> String {
        let mut output = String::new();
        if outcome.records.is_empty() {
            output.push_str(&format!("\n{}\n", "No data found.".yellow()));
        }
        for diagnostic in outcome.diagnostics() {
            output.push_str(&Self::diagnostic_line(diagnostic));
        }
        output
    }

    fn diagnostic_line(diagnostic: &Diagnostic) -> String {
        format!("  {} {}\n", "!".red().bold(), diagnostic.to_string().dimmed())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
