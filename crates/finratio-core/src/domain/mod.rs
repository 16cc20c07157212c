//! Domain types shared by the aligner, the ratio engine, and the
//! collaborator boundaries.

mod period;
mod profile;
mod series;
mod statement;
mod symbol;

pub use period::Period;
pub use profile::{CompanyProfile, FieldValue, ProfileField};
pub use series::{SeriesPoint, TimeSeries};
pub use statement::{StatementMetric, StatementRow};
pub use symbol::Symbol;
