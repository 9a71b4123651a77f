//! CLI entrypoint for trade-insight
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::IsTerminal;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use trade_insight_application::{AggregateReportUseCase, AggregationParams};
use trade_insight_domain::{KeywordExpander, OutputFormat, Region, Trade};
use trade_insight_infrastructure::{ConfigLoader, FileConfig, ProviderFactory, Severity};
use trade_insight_presentation::{Cli, ProgressDisplay, formatter_for};

/// Slack between the per-call timeout and the HTTP client's own timeout.
const TRANSPORT_SLACK: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    if cli.list {
        print_supported();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => error!("config: {}", issue),
            Severity::Warning => warn!("config: {}", issue),
        }
    }

    let trade = parse_trade(cli.trade.as_deref())?;
    let region = parse_region(cli.state.as_deref())?;

    let params = build_params(&cli, &config)?;
    let (table, _) = config.keyword_table();
    let expander = KeywordExpander::new(table);

    // === Dependency Injection ===
    let (outlook, _) = config.aggregation.parse_outlook_provider();
    let transport_timeout = params.call_timeout.saturating_add(TRANSPORT_SLACK);
    let providers = ProviderFactory::new(&config.providers, transport_timeout)?.build(outlook);

    info!("Starting trade-insight for {} in {}", trade, region);
    let use_case = AggregateReportUseCase::new(providers, expander, params);

    let report = if cli.quiet {
        use_case.execute(trade, region).await
    } else {
        let progress = ProgressDisplay::detect(std::io::stderr().is_terminal()).notifier();
        use_case
            .execute_with_progress(trade, region, progress.as_ref())
            .await
    };

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    if cli.no_color || !config.output.color || format != OutputFormat::Full {
        colored::control::set_override(false);
    }

    println!("{}", formatter_for(format).format(&report));

    Ok(())
}

/// Config values first, then CLI flags on top.
fn build_params(cli: &Cli, config: &FileConfig) -> Result<AggregationParams> {
    let (mut params, _) = config.aggregation.to_params();
    if let Some(strategy) = cli.strategy {
        params = params.with_match_strategy(strategy.into());
    }
    if let Some(limit) = cli.limit {
        let limit = usize::try_from(limit).context("--limit is too large")?;
        params = params.with_result_limit(limit);
    }
    if let Some(secs) = cli.timeout {
        params = params.with_call_timeout(Duration::from_secs(secs));
    }
    params.validate()?;
    Ok(params)
}

fn parse_trade(input: Option<&str>) -> Result<Trade> {
    let input = input.ok_or_else(|| anyhow!("a trade is required"))?;
    input.parse::<Trade>().map_err(|e| {
        let valid: Vec<&str> = Trade::ALL.iter().map(|t| t.label()).collect();
        anyhow!("{} (supported trades: {})", e, valid.join(", "))
    })
}

fn parse_region(input: Option<&str>) -> Result<Region> {
    let input = input.ok_or_else(|| anyhow!("a state is required"))?;
    input
        .parse::<Region>()
        .map_err(|e| anyhow!("{} (run with --list to see supported states)", e))
}

fn print_supported() {
    println!("Trades:");
    for trade in Trade::ALL {
        println!("  {}", trade);
    }
    println!();
    println!("States:");
    for region in Region::all() {
        println!("  {} ({})", region.name(), region.abbreviation());
    }
}
