//! Command Line Interface for the DCA simulator.
use anyhow::{Context, Result};
use chrono::{Days, Months, NaiveDate};
use clap::{Parser, Subcommand};
use dca_data::providers::{BinanceProvider, clamp_to_earliest};
use dca_data::{BinanceConfig, CacheConfig, CachedProvider, MarketDataProvider};
use dca_domain::time::{parse_utc_date, today_utc};
use dca_domain::{Frequency, SimulationReport, SimulationRequest};
use dca_simulation::engine::simulate;
use dotenv::dotenv;
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Parser)]
#[command(name = "dca-cli")]
#[command(about = "Dollar-cost averaging simulator for BTC/USDT", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a DCA plan against historical daily candles
    Simulate {
        /// Trading pair
        #[arg(short, long, default_value = "BTCUSDT")]
        symbol: String,

        /// First purchase date (YYYY-MM-DD, UTC). Defaults to one year before the end date
        #[arg(long, value_parser = parse_utc_date)]
        start_date: Option<NaiveDate>,

        /// Last purchase date (YYYY-MM-DD, UTC). Defaults to today
        #[arg(long, value_parser = parse_utc_date)]
        end_date: Option<NaiveDate>,

        /// daily, weekly or monthly
        #[arg(short, long, default_value = "weekly")]
        frequency: String,

        /// Amount invested per purchase, in USDT
        #[arg(short, long, default_value = "100")]
        amount: Decimal,

        /// Skip fetching the latest price (no ROI or lump-sum comparison)
        #[arg(long)]
        no_latest_price: bool,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,

        /// Print every purchase as a table
        #[arg(long)]
        chart: bool,
    },
    /// Fetch recent daily candles
    MarketData {
        /// Trading pair
        #[arg(short, long, default_value = "BTCUSDT")]
        symbol: String,

        /// Days of history to fetch
        #[arg(short, long, default_value_t = 14)]
        days: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let provider = CachedProvider::new(
        BinanceProvider::new(BinanceConfig::from_env()?),
        &CacheConfig::from_env()?,
    );

    match &cli.command {
        Commands::Simulate {
            symbol,
            start_date,
            end_date,
            frequency,
            amount,
            no_latest_price,
            json,
            chart,
        } => {
            let frequency = parse_frequency(frequency);
            let end = end_date.unwrap_or_else(today_utc);
            let start = start_date.unwrap_or_else(|| default_start(end));
            let start = clamp_to_earliest(start);

            info!(%symbol, %start, %end, %frequency, %amount, "Running DCA simulation");

            let candles = provider
                .fetch_candles(symbol, start, end)
                .await
                .context("failed to fetch historical candles")?;

            let mut request = SimulationRequest::new(start, end, frequency, *amount, candles);
            if !no_latest_price {
                let latest = provider
                    .fetch_latest_price(symbol)
                    .await
                    .context("failed to fetch latest price")?;
                request = request.with_latest_price(latest);
            }

            let result = simulate(&request)?;
            let report = SimulationReport {
                start_date: start,
                end_date: end,
                frequency,
                amount: *amount,
                result,
            };

            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report::print_summary(&report);
                if *chart {
                    report::chart_table(&report.result).printstd();
                }
            }
        }
        Commands::MarketData { symbol, days } => {
            let end = today_utc();
            let start = end.checked_sub_days(Days::new(*days)).unwrap_or(end);

            println!("🔍 Fetching daily candles for {} from {} to {}...", symbol, start, end);

            let candles = provider.fetch_candles(symbol, start, end).await?;

            println!("✅ Fetched {} candles:", candles.len());
            report::candle_table(&candles).printstd();
        }
    }

    Ok(())
}

/// Lenient frequency parsing; unknown values run weekly.
fn parse_frequency(raw: &str) -> Frequency {
    let frequency = Frequency::from(raw);
    if !raw.trim().eq_ignore_ascii_case(frequency.as_str()) {
        warn!(requested = raw, "Unrecognized frequency, using weekly");
    }
    frequency
}

/// One year before `end`.
fn default_start(end: NaiveDate) -> NaiveDate {
    end.checked_sub_months(Months::new(12)).unwrap_or(end)
}
