use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Symbol, TimeSeries};

/// Financial-statement line items the core consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementMetric {
    NetIncome,
    StockholderEquity,
}

impl StatementMetric {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NetIncome => "net_income",
            Self::StockholderEquity => "stockholder_equity",
        }
    }

    /// Label as reported on the statements themselves.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NetIncome => "Net Income",
            Self::StockholderEquity => "Total Stockholder Equity",
        }
    }
}

impl Display for StatementMetric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable snapshot of one statement line item for one company.
///
/// Fetched once per computation and discarded after rendering; there is
/// no cross-request lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    pub symbol: Symbol,
    pub metric: StatementMetric,
    pub series: TimeSeries,
}

impl StatementRow {
    pub fn new(symbol: Symbol, metric: StatementMetric, series: TimeSeries) -> Self {
        Self {
            symbol,
            metric,
            series,
        }
    }
}
