//! Progress reporting for report aggregation
//!
//! Everything here writes to stderr so stdout carries only the report.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use trade_insight_application::ProgressNotifier;
use trade_insight_domain::{AttemptLog, Need, NeedStatus, ProviderKind, SearchQuery};

/// Longest query excerpt shown next to the bar.
const MAX_QUERY_CHARS: usize = 60;

/// Reports progress with one bar per need
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn need_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn excerpt(text: &str) -> String {
    match text.char_indices().nth(MAX_QUERY_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

fn status_line(status: NeedStatus, records: usize) -> String {
    match status {
        NeedStatus::Found => format!("{} {} record(s)", "v".green(), records),
        NeedStatus::NoData => format!("{} no data found", "-".yellow()),
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_need_start(&self, need: Need, planned_attempts: usize) {
        let pb = ProgressBar::with_draw_target(
            Some(planned_attempts as u64),
            ProgressDrawTarget::stderr(),
        );
        pb.set_style(Self::need_style());
        pb.set_prefix(need.display_name());
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_attempt_start(
        &self,
        _need: Need,
        _index: usize,
        provider: ProviderKind,
        query: &SearchQuery,
    ) {
        self.with_bar(|pb| pb.set_message(format!("{}: {}", provider, excerpt(query.text()))));
    }

    fn on_attempt_complete(&self, _need: Need, _log: &AttemptLog) {
        self.with_bar(|pb| pb.inc(1));
    }

    fn on_need_complete(&self, _need: Need, status: NeedStatus, records: usize) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(status_line(status, records));
        }
    }
}

/// How progress is drawn on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressDisplay {
    /// Redrawn indicatif bars
    Bars,
    /// One plain line per event, for logs and pipes
    Lines,
}

impl ProgressDisplay {
    /// Bars on a terminal, plain lines anywhere else.
    pub fn detect(stderr_is_terminal: bool) -> Self {
        if stderr_is_terminal {
            ProgressDisplay::Bars
        } else {
            ProgressDisplay::Lines
        }
    }

    pub fn notifier(self) -> Box<dyn ProgressNotifier> {
        match self {
            ProgressDisplay::Bars => Box::new(ProgressReporter::new()),
            ProgressDisplay::Lines => Box::new(SimpleProgress),
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_need_start(&self, need: Need, planned_attempts: usize) {
        eprintln!(
            "{} {} (up to {} queries)",
            "->".cyan(),
            need.display_name().bold(),
            planned_attempts
        );
    }

    fn on_attempt_complete(&self, _need: Need, log: &AttemptLog) {
        if log.diagnostics.is_empty() {
            eprintln!("  {} {}: {} hit(s)", "v".green(), log.provider, log.hits);
        } else {
            for diagnostic in &log.diagnostics {
                eprintln!("  {} {}", "x".red(), diagnostic);
            }
        }
    }

    fn on_need_complete(&self, _need: Need, status: NeedStatus, records: usize) {
        eprintln!("  {}", status_line(status, records));
    }
}
