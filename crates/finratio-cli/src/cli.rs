//! CLI argument definitions for finratio.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `roe` | Return-on-equity series aligned by fiscal period |
//! | `prices` | Closing prices with optional trailing moving averages |
//! | `profile` | Company metadata fields |
//! | `report` | Full dashboard payload |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--snapshot` | `snapshot.json` | Market-data snapshot document |
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as failures |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use finratio_core::DEFAULT_LOOKBACK;

/// Statement ratios and price averages from a market-data snapshot.
#[derive(Debug, Parser)]
#[command(
    name = "finratio",
    author,
    version,
    about = "Statement ratios and price averages from a market-data snapshot"
)]
pub struct Cli {
    /// Path to the market-data snapshot JSON document.
    #[arg(long, global = true, default_value = "snapshot.json")]
    pub snapshot: PathBuf,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented format for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Return-on-equity series aligned by fiscal period.
    Roe(RoeArgs),
    /// Closing prices with optional trailing moving averages.
    Prices(PricesArgs),
    /// Company metadata fields; unreported fields stay absent.
    Profile(ProfileArgs),
    /// Full dashboard payload: profile, ROE, closes, averages.
    Report(ReportArgs),
}

#[derive(Debug, Args)]
pub struct RoeArgs {
    /// Ticker symbol.
    pub symbol: String,

    /// Most recent aligned periods to keep.
    #[arg(long, default_value_t = DEFAULT_LOOKBACK)]
    pub periods: usize,
}

#[derive(Debug, Args)]
pub struct PricesArgs {
    /// Ticker symbol.
    pub symbol: String,

    /// Range start, YYYY-MM-DD inclusive.
    #[arg(long)]
    pub start: String,

    /// Range end, YYYY-MM-DD inclusive.
    #[arg(long)]
    pub end: String,

    /// Trailing moving-average window; may repeat.
    #[arg(long = "ma")]
    pub ma_windows: Vec<usize>,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Ticker symbol.
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Ticker symbol.
    pub symbol: String,

    /// Range start, YYYY-MM-DD inclusive.
    #[arg(long)]
    pub start: String,

    /// Range end, YYYY-MM-DD inclusive.
    #[arg(long)]
    pub end: String,

    /// Most recent aligned periods to keep.
    #[arg(long, default_value_t = DEFAULT_LOOKBACK)]
    pub periods: usize,

    /// Trailing moving-average windows.
    #[arg(long = "ma", default_values_t = [20usize, 50])]
    pub ma_windows: Vec<usize>,
}
