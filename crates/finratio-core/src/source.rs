//! External market-data collaborator boundary.

use std::fmt::{Display, Formatter};

use crate::{CompanyProfile, Period, StatementMetric, StatementRow, Symbol, TimeSeries};

/// Classification of market-data fetch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    SymbolNotFound,
    Unavailable,
    InvalidRequest,
    Decode,
    Internal,
}

/// Structured failure from a [`MarketDataSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
    retryable: bool,
}

impl FetchError {
    pub fn symbol_not_found(symbol: &Symbol) -> Self {
        Self {
            kind: FetchErrorKind::SymbolNotFound,
            message: format!("symbol '{symbol}' is not known to this source"),
            retryable: false,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Decode,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::SymbolNotFound => "source.symbol_not_found",
            FetchErrorKind::Unavailable => "source.unavailable",
            FetchErrorKind::InvalidRequest => "source.invalid_request",
            FetchErrorKind::Decode => "source.decode",
            FetchErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FetchError {}

/// External market-data collaborator.
///
/// Implementations must never substitute defaults for missing data: a
/// known symbol with an unreported metric yields an empty series, and an
/// unreported profile field stays absent. All methods are synchronous;
/// the core computations consume data that has already arrived.
pub trait MarketDataSource {
    /// One statement line item for one company; may be empty.
    fn statement_row(
        &self,
        symbol: &Symbol,
        metric: StatementMetric,
    ) -> Result<StatementRow, FetchError>;

    /// Closing prices in `[start, end]`, ascending; may be empty.
    fn price_series(
        &self,
        symbol: &Symbol,
        start: Period,
        end: Period,
    ) -> Result<TimeSeries, FetchError>;

    /// Company metadata snapshot.
    fn company_profile(&self, symbol: &Symbol) -> Result<CompanyProfile, FetchError>;
}
