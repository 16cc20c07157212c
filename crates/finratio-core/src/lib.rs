//! # finratio-core
//!
//! Statement alignment and ratio derivation for financial dashboards.
//!
//! ## Overview
//!
//! The core is a set of pure functions over already-fetched, in-memory
//! series. Raw statement rows (net income, stockholder equity) are aligned
//! by fiscal period, turned into a Return-on-Equity series, and price
//! series get trailing moving averages. Fetching lives behind the
//! [`MarketDataSource`] trait; rendering belongs to the caller.
//!
//! Control flow: `MarketDataSource` → aligner → ratio engine → presentation.
//! No component holds state across invocations.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`align`] | Statement alignment onto common reporting periods |
//! | [`domain`] | Domain types (Symbol, Period, TimeSeries, profiles) |
//! | [`error`] | Validation and metrics error types |
//! | [`ratio`] | Ratio derivation and moving averages |
//! | [`report`] | Full dashboard assembly |
//! | [`snapshot`] | JSON-snapshot market-data source |
//! | [`source`] | Market-data collaborator boundary |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use finratio_core::{
//!     align_statements, return_on_equity, to_percentage, MarketDataSource,
//!     SnapshotSource, StatementMetric, Symbol, DEFAULT_LOOKBACK,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = SnapshotSource::from_path("snapshot.json".as_ref())?;
//!     let symbol = Symbol::parse("AAPL")?;
//!
//!     let income = source.statement_row(&symbol, StatementMetric::NetIncome)?;
//!     let equity = source.statement_row(&symbol, StatementMetric::StockholderEquity)?;
//!
//!     let pair = align_statements(&income, &equity, DEFAULT_LOOKBACK)?;
//!     let roe = to_percentage(&return_on_equity(&pair));
//!
//!     for point in roe.series.points() {
//!         match point.value {
//!             Some(value) => println!("{}  {value:.2}%", point.period),
//!             None => println!("{}  undefined", point.period),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Recoverable computation failures are [`MetricsError`] values classified
//! by [`MetricsError::kind`]: insufficient data is a user-visible notice,
//! an invalid parameter is a caller bug rejected at the boundary. Undefined
//! entries within an otherwise valid series are data (`Option::None`), not
//! errors, and stay distinguishable from a defined zero. The core never
//! retries and never panics the host process.

pub mod align;
pub mod domain;
pub mod error;
pub mod ratio;
pub mod report;
pub mod snapshot;
pub mod source;

// Re-export commonly used items at the crate root for convenience

pub use align::{align_statements, AlignedPair, AlignedPoint, DEFAULT_LOOKBACK};

pub use domain::{
    CompanyProfile, FieldValue, Period, ProfileField, SeriesPoint, StatementMetric, StatementRow,
    Symbol, TimeSeries,
};

pub use error::{MetricsError, MetricsErrorKind, ValidationError};

pub use ratio::{
    compute_ratio, moving_average, return_on_equity, to_percentage, RatioSeries, ROE_TAG,
};

pub use report::{build_dashboard, Dashboard, MovingAverage, ReportError};

pub use snapshot::SnapshotSource;

pub use source::{FetchError, FetchErrorKind, MarketDataSource};
