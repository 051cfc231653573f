//! tubefolio — Command-line creator revenue and wealth projection calculator.
//!
//! Estimates channel revenue from upload cadence, views and RPM, splits it
//! under the 10-5-85 rule, and projects the invested share forward with
//! monthly compounding.

mod config;
mod display;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn};
use tubefolio_core::constants::MAX_HORIZON_YEARS;
use tubefolio_core::validation::{validate_horizon, validate_metrics};
use tubefolio_core::{
    rescale, rescale_rpm, split_allocation, ActivityMetrics, Currency, GrowthProjector,
    NumericInput, YearlySnapshot,
};
use tubefolio_growth::{build_report, CompoundingEngine, ProjectionSummary};

use crate::config::{parse_log_format, CalculatorConfig};

/// Creator revenue and wealth projection calculator.
#[derive(Parser)]
#[command(name = "tubefolio")]
#[command(version, about = "Estimate creator revenue and project its compounding growth.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    /// Display currency (THB or USD). Overrides TUBEFOLIO_CURRENCY.
    #[arg(long, global = true)]
    currency: Option<Currency>,

    /// Log level (trace, debug, info, warn, error). Overrides TUBEFOLIO_LOG_LEVEL.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format ("text" or "json"). Overrides TUBEFOLIO_LOG_FORMAT.
    #[arg(long, global = true)]
    log_format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate revenue from upload cadence, views and RPM.
    Estimate(EstimateArgs),
    /// Split a monthly revenue figure under the 10-5-85 rule.
    Allocate(AllocateArgs),
    /// Project a monthly contribution forward with monthly compounding.
    Project(ProjectArgs),
    /// Convert an amount between THB and USD at the fixed rate.
    Rescale(RescaleArgs),
    /// Run the full pipeline: estimate, allocate and project.
    Report(ReportArgs),
}

#[derive(Args)]
struct MetricsArgs {
    /// Uploads per month (or per day with --per-day). Unparseable input counts as 0.
    #[arg(allow_negative_numbers = true)]
    uploads: String,

    /// Average views per upload. Unparseable input counts as 0.
    #[arg(allow_negative_numbers = true)]
    views: String,

    /// Revenue per 1,000 views. Unparseable input counts as 0.
    #[arg(allow_negative_numbers = true)]
    rpm: String,

    /// Treat UPLOADS as a daily cadence over a 30-day month.
    #[arg(long)]
    per_day: bool,

    /// Currency the RPM was entered in, if different from the display currency.
    #[arg(long)]
    rpm_currency: Option<Currency>,
}

#[derive(Args)]
struct EstimateArgs {
    #[command(flatten)]
    metrics: MetricsArgs,
}

#[derive(Args)]
struct AllocateArgs {
    /// Monthly revenue to split. Unparseable input counts as 0.
    #[arg(allow_negative_numbers = true)]
    monthly_revenue: String,
}

#[derive(Args)]
struct RatesArgs {
    /// Annual yield as a decimal (default 0.07). Overrides TUBEFOLIO_ANNUAL_YIELD.
    #[arg(long = "yield", allow_negative_numbers = true)]
    annual_yield: Option<f64>,

    /// Annual withdrawal rate as a decimal (default 0.04). Overrides TUBEFOLIO_WITHDRAWAL_RATE.
    #[arg(long, allow_negative_numbers = true)]
    withdrawal_rate: Option<f64>,
}

#[derive(Args)]
struct ProjectArgs {
    /// Monthly contribution. Unparseable input counts as 0.
    #[arg(allow_negative_numbers = true)]
    contribution: String,

    /// Horizon in whole years (default 10, at most 30). Zero or negative yields no snapshots.
    #[arg(allow_negative_numbers = true)]
    years: Option<i64>,

    #[command(flatten)]
    rates: RatesArgs,
}

#[derive(Args)]
struct RescaleArgs {
    /// Amount to convert. Unparseable input counts as 0.
    #[arg(allow_negative_numbers = true)]
    amount: String,

    /// Source currency.
    from: Currency,

    /// Target currency.
    to: Currency,

    /// Round the result to cents, as done for an RPM.
    #[arg(long)]
    rpm: bool,
}

#[derive(Args)]
struct ReportArgs {
    #[command(flatten)]
    metrics: MetricsArgs,

    /// Horizon in whole years (default 10, at most 30).
    #[arg(long, allow_negative_numbers = true)]
    years: Option<i64>,

    #[command(flatten)]
    rates: RatesArgs,

    /// Reject inputs outside the form limits instead of computing anyway.
    #[arg(long)]
    validate: bool,
}

#[derive(Serialize)]
struct RescaleOutput {
    amount: f64,
    from: Currency,
    to: Currency,
    result: f64,
}

#[derive(Serialize)]
struct ProjectionOutput {
    monthly_contribution: f64,
    horizon_years: i64,
    annual_yield: f64,
    withdrawal_rate: f64,
    projection: Vec<YearlySnapshot>,
    summary: ProjectionSummary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    init_logging(&config.log_level, &config.log_format);
    debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Estimate(args) => run_estimate(&config, args, cli.json),
        Commands::Allocate(args) => run_allocate(&config, args, cli.json),
        Commands::Project(args) => run_project(&config, args, cli.json),
        Commands::Rescale(args) => run_rescale(args, cli.json),
        Commands::Report(args) => run_report(&config, args, cli.json),
    }
}

/// Environment first, then global flags on top.
fn resolve_config(cli: &Cli) -> Result<CalculatorConfig> {
    let mut config = CalculatorConfig::from_env().context("Failed to load configuration")?;

    if let Some(currency) = cli.currency {
        config.currency = currency;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.log_format = parse_log_format(format)?;
    }

    Ok(config)
}

/// Projector built from configured rates, with per-command overrides.
fn engine_for(config: &CalculatorConfig, rates: &RatesArgs) -> CompoundingEngine {
    CompoundingEngine::new(
        rates.annual_yield.unwrap_or(config.annual_yield),
        rates.withdrawal_rate.unwrap_or(config.withdrawal_rate),
    )
}

/// Normalize raw metric arguments into display-currency metrics.
fn metrics_from(config: &CalculatorConfig, args: &MetricsArgs) -> ActivityMetrics {
    let entered_in = args.rpm_currency.unwrap_or(config.currency);
    let metrics = if args.per_day {
        ActivityMetrics::from_daily_uploads(
            args.uploads.as_str(),
            args.views.as_str(),
            args.rpm.as_str(),
            entered_in,
        )
    } else {
        ActivityMetrics::new(
            args.uploads.as_str(),
            args.views.as_str(),
            args.rpm.as_str(),
            entered_in,
        )
    };

    if entered_in != config.currency {
        info!(from = %entered_in, to = %config.currency, "rescaling RPM to display currency");
    }
    metrics.in_currency(config.currency)
}

/// Requested or configured horizon, capped at the form limit.
fn horizon_from(config: &CalculatorConfig, years: Option<i64>) -> i64 {
    let requested = years.unwrap_or(config.horizon_years);
    if requested > MAX_HORIZON_YEARS {
        warn!(requested, max = MAX_HORIZON_YEARS, "horizon capped");
        return MAX_HORIZON_YEARS;
    }
    requested
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}

fn run_estimate(config: &CalculatorConfig, args: EstimateArgs, json: bool) -> Result<()> {
    let metrics = metrics_from(config, &args.metrics);
    let revenue = metrics.estimate();

    if json {
        return print_json(&revenue);
    }
    print!("{}", display::render_revenue(&revenue, metrics.currency));
    Ok(())
}

fn run_allocate(config: &CalculatorConfig, args: AllocateArgs, json: bool) -> Result<()> {
    let allocation = split_allocation(args.monthly_revenue.as_str());

    if json {
        return print_json(&allocation);
    }
    print!("{}", display::render_allocation(&allocation, config.currency));
    Ok(())
}

fn run_project(config: &CalculatorConfig, args: ProjectArgs, json: bool) -> Result<()> {
    let engine = engine_for(config, &args.rates);
    let horizon_years = horizon_from(config, args.years);
    let contribution = args.contribution.to_amount();

    let projection = engine.project(contribution, horizon_years);
    let summary = ProjectionSummary::from_snapshots(&projection);

    if json {
        return print_json(&ProjectionOutput {
            monthly_contribution: contribution,
            horizon_years,
            annual_yield: engine.annual_yield(),
            withdrawal_rate: engine.withdrawal_rate(),
            projection,
            summary,
        });
    }
    print!("{}", display::render_projection(&projection, config.currency));
    if !projection.is_empty() {
        println!();
        print!("{}", display::render_summary(&summary, config.currency));
    }
    Ok(())
}

fn run_rescale(args: RescaleArgs, json: bool) -> Result<()> {
    let amount = args.amount.to_amount();
    let result = if args.rpm {
        rescale_rpm(amount, args.from, args.to)
    } else {
        rescale(amount, args.from, args.to)
    };

    if json {
        return print_json(&RescaleOutput {
            amount,
            from: args.from,
            to: args.to,
            result,
        });
    }
    println!(
        "{} = {}",
        display::format_currency(amount, args.from),
        display::format_currency(result, args.to)
    );
    Ok(())
}

fn run_report(config: &CalculatorConfig, args: ReportArgs, json: bool) -> Result<()> {
    let metrics = metrics_from(config, &args.metrics);

    if args.validate {
        validate_metrics(&metrics).context("Input outside form limits")?;
        validate_horizon(args.years.unwrap_or(config.horizon_years))
            .context("Input outside form limits")?;
    }
    let horizon_years = horizon_from(config, args.years);

    let engine = engine_for(config, &args.rates);
    let report = build_report(&metrics, horizon_years, &engine);
    info!(
        monthly_revenue = report.revenue.monthly_revenue,
        years = report.summary.years,
        "report ready"
    );

    if json {
        return print_json(&report);
    }
    print!("{}", display::render_report(&report));
    Ok(())
}

/// Install the global subscriber. Results go to stdout, logs to stderr.
///
/// `RUST_LOG` wins over `level` when set. `format = "json"` emits one JSON
/// object per event.
fn init_logging(level: &str, format: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let json_layer = (format == "json").then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = json_layer.is_none().then(|| {
        fmt::layer()
            .compact()
            .without_time()
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubefolio_core::estimate_revenue;

    fn metrics_args(uploads: &str, views: &str, rpm: &str) -> MetricsArgs {
        MetricsArgs {
            uploads: uploads.into(),
            views: views.into(),
            rpm: rpm.into(),
            per_day: false,
            rpm_currency: None,
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_report_with_negative_numbers() {
        let cli = Cli::try_parse_from([
            "tubefolio", "report", "1", "10000", "-5.7", "--per-day", "--years", "5",
            "--yield", "0.08", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        let Commands::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.metrics.rpm, "-5.7");
        assert!(args.metrics.per_day);
        assert_eq!(args.years, Some(5));
        assert_eq!(args.rates.annual_yield, Some(0.08));
    }

    #[test]
    fn parses_currency_flags() {
        let cli = Cli::try_parse_from(["tubefolio", "rescale", "5.7", "usd", "THB", "--rpm"])
            .unwrap();
        let Commands::Rescale(args) = cli.command else {
            panic!("expected rescale");
        };
        assert_eq!(args.from, Currency::Usd);
        assert_eq!(args.to, Currency::Thb);
        assert!(args.rpm);
    }

    #[test]
    fn rejects_unknown_currency() {
        assert!(Cli::try_parse_from(["tubefolio", "--currency", "EUR", "allocate", "1"]).is_err());
    }

    #[test]
    fn metrics_normalize_garbage() {
        let config = CalculatorConfig::default();
        let metrics = metrics_from(&config, &metrics_args("30", "", "abc"));
        assert_eq!(metrics.uploads_per_month, 30.0);
        assert_eq!(metrics.average_views_per_upload, 0.0);
        assert_eq!(metrics.revenue_per_mille, 0.0);
    }

    #[test]
    fn metrics_per_day_cadence() {
        let config = CalculatorConfig::default();
        let mut args = metrics_args("1", "10000", "5.7");
        args.per_day = true;
        let metrics = metrics_from(&config, &args);
        assert_eq!(metrics.uploads_per_month, 30.0);
        assert_eq!(estimate_revenue(30, 10_000, 5.7), metrics.estimate());
    }

    #[test]
    fn metrics_rescale_rpm_to_display_currency() {
        let config = CalculatorConfig::default();
        let mut args = metrics_args("30", "10000", "1");
        args.rpm_currency = Some(Currency::Usd);
        let metrics = metrics_from(&config, &args);
        assert_eq!(metrics.currency, Currency::Thb);
        assert_eq!(metrics.revenue_per_mille, 31.59);
    }

    #[test]
    fn horizon_capped_at_form_limit() {
        let config = CalculatorConfig::default();
        assert_eq!(horizon_from(&config, Some(31)), MAX_HORIZON_YEARS);
        assert_eq!(horizon_from(&config, Some(100_000_000_000)), MAX_HORIZON_YEARS);
        assert_eq!(horizon_from(&config, Some(30)), 30);
        assert_eq!(horizon_from(&config, Some(0)), 0);
        assert_eq!(horizon_from(&config, None), config.horizon_years);
    }

    #[test]
    fn configured_horizon_is_capped_too() {
        let config = CalculatorConfig {
            horizon_years: 500,
            ..CalculatorConfig::default()
        };
        assert_eq!(horizon_from(&config, None), MAX_HORIZON_YEARS);
    }

    #[test]
    fn oversized_project_horizon_projects_thirty_years() {
        let cli = Cli::try_parse_from(["tubefolio", "project", "1453.5", "100000000000"]).unwrap();
        let Commands::Project(args) = cli.command else {
            panic!("expected project");
        };
        let config = CalculatorConfig::default();
        let engine = engine_for(&config, &args.rates);
        let horizon_years = horizon_from(&config, args.years);
        let projection = engine.project(args.contribution.to_amount(), horizon_years);
        assert_eq!(projection.len(), 30);
        assert_eq!(projection[29].year_index, 30);
    }

    #[test]
    fn engine_uses_overrides_then_config() {
        let config = CalculatorConfig {
            annual_yield: 0.05,
            ..CalculatorConfig::default()
        };
        let rates = RatesArgs {
            annual_yield: None,
            withdrawal_rate: Some(0.03),
        };
        let engine = engine_for(&config, &rates);
        assert_eq!(engine.annual_yield(), 0.05);
        assert_eq!(engine.withdrawal_rate(), 0.03);
    }
}
