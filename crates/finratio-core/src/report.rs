//! Dashboard report assembly: fetch, align, and derive everything one
//! render needs in a single pass.

use serde::Serialize;
use thiserror::Error;

use crate::source::{FetchError, MarketDataSource};
use crate::{
    align_statements, moving_average, return_on_equity, to_percentage, CompanyProfile,
    MetricsError, MetricsErrorKind, Period, RatioSeries, StatementMetric, Symbol, TimeSeries,
};

/// Report assembly failures the presentation layer cannot downgrade.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// One trailing moving average computed over the close series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovingAverage {
    pub window: usize,
    pub series: TimeSeries,
}

/// Everything a single dashboard render needs, fetched and computed once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub profile: CompanyProfile,
    /// `None` when the statement rows had no usable overlap; see `warnings`.
    pub roe_percent: Option<RatioSeries>,
    pub closes: TimeSeries,
    pub moving_averages: Vec<MovingAverage>,
    /// User-visible notices for sections that could not be derived.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Fetch, align, and derive the full dashboard payload for one company.
///
/// Insufficient statement overlap is a user-visible notice, not a failure;
/// invalid parameters and fetch errors propagate.
pub fn build_dashboard(
    source: &dyn MarketDataSource,
    symbol: &Symbol,
    start: Period,
    end: Period,
    lookback: usize,
    ma_windows: &[usize],
) -> Result<Dashboard, ReportError> {
    let mut warnings = Vec::new();

    let profile = source.company_profile(symbol)?;
    let net_income = source.statement_row(symbol, StatementMetric::NetIncome)?;
    let equity = source.statement_row(symbol, StatementMetric::StockholderEquity)?;

    let roe_percent = match align_statements(&net_income, &equity, lookback) {
        Ok(pair) => Some(to_percentage(&return_on_equity(&pair))),
        Err(error) if error.kind() == MetricsErrorKind::InsufficientData => {
            warnings.push(format!("return on equity unavailable for {symbol}: {error}"));
            None
        }
        Err(error) => return Err(error.into()),
    };

    let closes = source.price_series(symbol, start, end)?;

    let mut moving_averages = Vec::with_capacity(ma_windows.len());
    if closes.is_empty() && !ma_windows.is_empty() {
        warnings.push(format!(
            "no closes for {symbol} between {start} and {end}; skipping moving averages"
        ));
    } else {
        for &window in ma_windows {
            let series = moving_average(&closes, window)?;
            moving_averages.push(MovingAverage { window, series });
        }
    }

    Ok(Dashboard {
        profile,
        roe_percent,
        closes,
        moving_averages,
        warnings,
    })
}
