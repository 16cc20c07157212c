use serde::Serialize;

use finratio_core::{
    align_statements, return_on_equity, to_percentage, MarketDataSource, MetricsErrorKind, Period,
    SnapshotSource, StatementMetric, Symbol, ROE_TAG,
};

use crate::cli::RoeArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct RoeRow {
    period: Period,
    roe_percent: Option<f64>,
}

#[derive(Debug, Serialize)]
struct RoeResponseData {
    symbol: Symbol,
    tag: String,
    rows: Vec<RoeRow>,
}

pub fn run(args: &RoeArgs, source: &SnapshotSource) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    let net_income = source.statement_row(&symbol, StatementMetric::NetIncome)?;
    let equity = source.statement_row(&symbol, StatementMetric::StockholderEquity)?;

    match align_statements(&net_income, &equity, args.periods) {
        Ok(pair) => {
            let ratio = to_percentage(&return_on_equity(&pair));
            let rows = ratio
                .series
                .points()
                .iter()
                .map(|point| RoeRow {
                    period: point.period,
                    roe_percent: point.value,
                })
                .collect();

            let data = serde_json::to_value(RoeResponseData {
                symbol,
                tag: ratio.tag,
                rows,
            })?;
            Ok(CommandResult::ok(data))
        }
        // Not fatal: surface as a notice with an empty table.
        Err(error) if error.kind() == MetricsErrorKind::InsufficientData => {
            let data = serde_json::to_value(RoeResponseData {
                symbol,
                tag: String::from(ROE_TAG),
                rows: Vec::new(),
            })?;
            Ok(CommandResult::ok(data).with_warning(error.to_string()))
        }
        Err(error) => Err(error.into()),
    }
}
