//! Offline snapshot implementation of [`MarketDataSource`].
//!
//! Live fetching and caching are out of scope for this crate; the snapshot
//! stands in for the provider with a JSON document of previously captured
//! data. Document shape:
//!
//! ```json
//! {
//!   "companies": {
//!     "AAPL": {
//!       "profile": { "sector": "Technology", "beta": 1.29 },
//!       "statements": {
//!         "net_income": [ { "period": "2021-12-31", "value": 100.0 } ],
//!         "stockholder_equity": [ { "period": "2021-12-31", "value": 1000.0 } ]
//!       },
//!       "prices": [ { "period": "2024-01-02", "value": 185.6 } ]
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::source::{FetchError, MarketDataSource};
use crate::{
    CompanyProfile, FieldValue, Period, ProfileField, StatementMetric, StatementRow, Symbol,
    TimeSeries,
};

#[derive(Debug, Clone, Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    companies: BTreeMap<String, CompanyRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CompanyRecord {
    #[serde(default)]
    profile: BTreeMap<ProfileField, FieldValue>,
    #[serde(default)]
    statements: BTreeMap<StatementMetric, TimeSeries>,
    #[serde(default)]
    prices: TimeSeries,
}

/// File-backed market-data source for tests and the CLI.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    companies: BTreeMap<String, CompanyRecord>,
}

impl SnapshotSource {
    /// Load a snapshot document from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, FetchError> {
        let raw = fs::read_to_string(path).map_err(|error| {
            FetchError::unavailable(format!(
                "cannot read snapshot '{}': {error}",
                path.display()
            ))
        })?;
        Self::from_json(&raw)
    }

    /// Parse a snapshot document from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, FetchError> {
        let document: SnapshotDocument = serde_json::from_str(raw)
            .map_err(|error| FetchError::decode(format!("malformed snapshot: {error}")))?;

        // Normalize company keys so lookups match parsed symbols.
        let mut companies = BTreeMap::new();
        for (raw_symbol, record) in document.companies {
            let symbol = Symbol::parse(&raw_symbol).map_err(|error| {
                FetchError::decode(format!("bad company key '{raw_symbol}': {error}"))
            })?;
            companies.insert(String::from(symbol), record);
        }

        Ok(Self { companies })
    }

    fn company(&self, symbol: &Symbol) -> Result<&CompanyRecord, FetchError> {
        self.companies
            .get(symbol.as_str())
            .ok_or_else(|| FetchError::symbol_not_found(symbol))
    }
}

impl MarketDataSource for SnapshotSource {
    fn statement_row(
        &self,
        symbol: &Symbol,
        metric: StatementMetric,
    ) -> Result<StatementRow, FetchError> {
        let company = self.company(symbol)?;
        // A metric the provider never reported is an empty row, not a default.
        let series = company.statements.get(&metric).cloned().unwrap_or_default();
        Ok(StatementRow::new(symbol.clone(), metric, series))
    }

    fn price_series(
        &self,
        symbol: &Symbol,
        start: Period,
        end: Period,
    ) -> Result<TimeSeries, FetchError> {
        if start > end {
            return Err(FetchError::invalid_request(format!(
                "range start {start} is after end {end}"
            )));
        }

        let company = self.company(symbol)?;
        let points = company
            .prices
            .points()
            .iter()
            .copied()
            .filter(|point| point.period >= start && point.period <= end)
            .collect();

        // Filtering an ordered series preserves its ordering invariant.
        Ok(TimeSeries::from_points_unchecked(points))
    }

    fn company_profile(&self, symbol: &Symbol) -> Result<CompanyProfile, FetchError> {
        let company = self.company(symbol)?;
        Ok(CompanyProfile::from_fields(
            symbol.clone(),
            company.profile.clone(),
        ))
    }
}
