//! Markdown report formatter
//!
//! One table per need. Cell text has pipes escaped and line breaks
//! flattened so a record always stays on one table row.

use super::formatter::ReportFormatter;
use trade_insight_domain::{NOT_AVAILABLE, Need, NeedOutcome, TradeReport};

pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &TradeReport) -> String {
        let mut out = format!(
            "# {} in {}\n\n_Generated {} · programs matched by {}_\n",
            report.trade,
            report.region,
            report.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.match_strategy
        );

        out.push_str(&section(Need::Outlook));
        if !report.outlook.records.is_empty() {
            out.push_str("| Title | Summary | Source |\n|---|---|---|\n");
            for r in report.outlook.records.iter() {
                out.push_str(&format!(
                    "| {} | {} | {} |\n",
                    link(&r.title, &r.link),
                    cell(&r.snippet),
                    cell(&r.source)
                ));
            }
        }
        out.push_str(&need_notes(&report.outlook));

        out.push_str(&section(Need::Institutions));
        if !report.institutions.records.is_empty() {
            out.push_str("| Institution | In-state tuition | Programs |\n|---|---:|---|\n");
            for r in report.institutions.records.iter() {
                let titles: Vec<&str> = r.program_titles.iter().map(String::as_str).collect();
                out.push_str(&format!(
                    "| {} | {} | {} |\n",
                    cell(&r.name),
                    r.tuition_cost,
                    cell(&titles.join(", "))
                ));
            }
        }
        out.push_str(&need_notes(&report.institutions));

        out.push_str(&section(Need::Jobs));
        if !report.jobs.records.is_empty() {
            out.push_str("| Title | Company | Location |\n|---|---|---|\n");
            for r in report.jobs.records.iter() {
                out.push_str(&format!(
                    "| {} | {} | {} |\n",
                    link(&r.title, &r.link),
                    cell(&r.company),
                    cell(&r.location)
                ));
            }
        }
        out.push_str(&need_notes(&report.jobs));

        out
    }
}

fn section(need: Need) -> String {
    format!("\n## {}\n\n", need.display_name())
}

fn need_notes<R>(outcome: &NeedOutcome<R>) -> String {
    let mut out = String::new();
    if outcome.records.is_empty() {
        out.push_str("_No data found._\n");
    }
    let diagnostics: Vec<String> = outcome
        .diagnostics()
        .map(|d| format!("> ⚠ {}\n", cell(&d.to_string())))
        .collect();
    if !diagnostics.is_empty() {
        out.push('\n');
        out.push_str(&diagnostics.concat());
    }
    out
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn link(text: &str, url: &str) -> String {
    if url == NOT_AVAILABLE {
        cell(text)
    } else {
        format!("[{}]({})", cell(text), url)
    }
}
