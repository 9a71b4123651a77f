//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use trade_insight_domain::{MatchStrategy, OutputFormat as ReportFormat};

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned console report
    Full,
    /// Markdown document
    Markdown,
    /// JSON output
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => ReportFormat::Full,
            OutputFormat::Markdown => ReportFormat::Markdown,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

/// How institutions are matched to the trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Search program titles for the trade's keywords
    TitleKeyword,
    /// Match programs by CIP classification code
    ClassificationCode,
}

impl From<StrategyArg> for MatchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::TitleKeyword => MatchStrategy::TitleKeyword,
            StrategyArg::ClassificationCode => MatchStrategy::ClassificationCode,
        }
    }
}

/// CLI arguments for trade-insight
#[derive(Parser, Debug)]
#[command(name = "trade-insight")]
#[command(
    author,
    version,
    about = "Labor market outlook, training programs and job postings for a trade in a US state"
)]
#[command(long_about = r#"
trade-insight builds a report on one trade in one US state from three
independent lookups:

1. Outlook:      employment projections, from the state level down to national
2. Institutions: colleges offering matching programs, merged by school name
3. Jobs:         current postings

A lookup that finds nothing does not stop the others.

API keys are read from FIRECRAWL_API_KEY, SERPAPI_API_KEY and
SCORECARD_API_KEY (names configurable).

Configuration files are loaded from (in priority order):
1. --config <path>                          Explicit config file
2. ./trade-insight.toml                     Project-level config
3. ~/.config/trade-insight/config.toml      Global config

Example:
  trade-insight construction Texas
  trade-insight "Information Technology" CA -o markdown
  trade-insight healthcare ohio -s classification-code --limit 5
"#)]
pub struct Cli {
    /// Trade to report on (e.g. construction, healthcare, "information technology")
    #[arg(required_unless_present_any = ["list", "show_config"])]
    pub trade: Option<String>,

    /// US state, by name or postal abbreviation
    #[arg(required_unless_present_any = ["list", "show_config"])]
    pub state: Option<String>,

    /// Output format [default: full, or [output].format from config]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Institution match strategy
    #[arg(short, long, value_enum, value_name = "STRATEGY")]
    pub strategy: Option<StrategyArg>,

    /// Maximum results requested per provider call
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Per-call timeout in seconds (at most one hour)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub timeout: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List supported trades and states and exit
    #[arg(long)]
    pub list: bool,
}
