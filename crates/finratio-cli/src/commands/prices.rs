use serde::Serialize;

use finratio_core::{
    moving_average, MarketDataSource, MovingAverage, Period, SnapshotSource, Symbol, TimeSeries,
};

use crate::cli::PricesArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct PricesResponseData {
    symbol: Symbol,
    closes: TimeSeries,
    moving_averages: Vec<MovingAverage>,
}

pub fn run(args: &PricesArgs, source: &SnapshotSource) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let start = Period::parse(&args.start)?;
    let end = Period::parse(&args.end)?;

    let closes = source.price_series(&symbol, start, end)?;

    let mut warnings = Vec::new();
    if closes.is_empty() {
        warnings.push(format!("no closes for {symbol} between {start} and {end}"));
    }

    let mut moving_averages = Vec::with_capacity(args.ma_windows.len());
    for &window in &args.ma_windows {
        let series = moving_average(&closes, window)?;
        moving_averages.push(MovingAverage { window, series });
    }

    let data = serde_json::to_value(PricesResponseData {
        symbol,
        closes,
        moving_averages,
    })?;
    Ok(CommandResult::ok(data).with_warnings(warnings))
}
