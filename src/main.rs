//! CLI entry point for forecast_shaper.
//!
//! Reads provider forecast responses from disk or stdin and emits the hourly
//! series, the daily outlook, or a full report.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use forecast_shaper::{
    config::Settings,
    output::{print_pretty, to_json, write_records},
    parser::{parse_current, parse_forecast},
    report::WeatherReport,
    series::{ForecastSample, aggregate_daily, interpolate_hourly},
};
use std::ffi::OsStr;
use std::io::Read;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "forecast_shaper")]
#[command(
    about = "Reshape three-hourly weather forecasts into hourly and daily views",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Path to a provider forecast JSON file, or "-" for stdin
    #[arg(value_name = "FORECAST")]
    forecast: String,

    /// Reference time in epoch seconds (defaults to the current time)
    #[arg(long)]
    now: Option<i64>,

    /// Optional JSON settings file
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpolate the forecast onto a one-hour grid
    Hourly {
        #[command(flatten)]
        input: InputArgs,

        /// Number of hours to produce (overrides the settings file)
        #[arg(long)]
        hours: Option<usize>,

        /// CSV file to write rows to; prints JSON when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Summarize the forecast per UTC calendar day
    Daily {
        #[command(flatten)]
        input: InputArgs,

        /// CSV file to write rows to; prints JSON when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Build a full report with hourly and daily views
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Number of hours to produce (overrides the settings file)
        #[arg(long)]
        hours: Option<usize>,

        /// Provider current-weather JSON file to include
        #[arg(long)]
        current: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/forecast_shaper.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("forecast_shaper.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Hourly {
            input,
            hours,
            output,
        } => hourly(&input, hours, output.as_deref())?,
        Commands::Daily { input, output } => daily(&input, output.as_deref())?,
        Commands::Report {
            input,
            hours,
            current,
        } => report(&input, hours, current.as_deref())?,
    }

    Ok(())
}

/// Reads raw bytes from a file path, or from stdin when the path is "-".
fn read_source(source: &str) -> Result<Vec<u8>> {
    if source == "-" {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        Ok(bytes)
    } else {
        std::fs::read(source).with_context(|| format!("Failed to read {}", source))
    }
}

/// Loads settings, resolves the clock once, and decodes the forecast.
fn load_input(input: &InputArgs) -> Result<(Settings, i64, Vec<ForecastSample>)> {
    let settings = Settings::load_or_default(input.config.as_deref())?;
    let now = input.now.unwrap_or_else(|| Utc::now().timestamp());
    let bytes = read_source(&input.forecast)?;
    let samples = parse_forecast(&bytes, &settings.fallback())?;

    info!(samples = samples.len(), now, "Forecast loaded");
    Ok((settings, now, samples))
}

#[tracing::instrument(skip(input), fields(source = %input.forecast))]
fn hourly(input: &InputArgs, hours: Option<usize>, output: Option<&str>) -> Result<()> {
    let (settings, now, samples) = load_input(input)?;
    let hourly = interpolate_hourly(&samples, hours.unwrap_or(settings.hours), now);

    match output {
        Some(path) => {
            write_records(path, &hourly)?;
            info!(path, rows = hourly.len(), "Hourly series written");
        }
        None => println!("{}", serde_json::to_string_pretty(&hourly)?),
    }
    Ok(())
}

#[tracing::instrument(skip(input), fields(source = %input.forecast))]
fn daily(input: &InputArgs, output: Option<&str>) -> Result<()> {
    let (_, _, samples) = load_input(input)?;
    let daily = aggregate_daily(&samples);

    match output {
        Some(path) => {
            write_records(path, &daily)?;
            info!(path, rows = daily.len(), "Daily summaries written");
        }
        None => println!("{}", serde_json::to_string_pretty(&daily)?),
    }
    Ok(())
}

#[tracing::instrument(skip(input), fields(source = %input.forecast))]
fn report(input: &InputArgs, hours: Option<usize>, current: Option<&str>) -> Result<()> {
    let (settings, now, samples) = load_input(input)?;
    let hours = hours.unwrap_or(settings.hours);
    let mut report = WeatherReport::from_samples(&samples, hours, now);

    if let Some(path) = current {
        let bytes = read_source(path)?;
        let (current, location) = parse_current(&bytes, &settings.fallback())?;
        report = report.with_current(current, location);
    }

    print_pretty(&report);
    println!("{}", to_json(&report)?);

    info!(
        hourly = report.hourly.len(),
        daily = report.daily.len(),
        "Report generated"
    );
    Ok(())
}
