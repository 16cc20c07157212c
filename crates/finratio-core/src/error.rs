use thiserror::Error;

/// Validation and construction errors exposed by `finratio-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid fiscal period '{value}', expected YYYY-MM-DD")]
    InvalidPeriod { value: String },

    #[error("duplicate period '{period}' in series")]
    DuplicatePeriod { period: String },
    #[error("period '{period}' is not in ascending order")]
    UnorderedPeriod { period: String },
    #[error("value for period '{period}' must be finite")]
    NonFiniteValue { period: String },
}

/// Classification for recoverable metric computation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsErrorKind {
    /// No usable observations; surfaced to the user as a notice.
    InsufficientData,
    /// A window or lookback outside its valid domain; caller bug.
    InvalidParameter,
}

/// Failures produced by the aligner and the ratio engine.
///
/// All variants are recoverable by the caller; the core never panics
/// and has nothing to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricsError {
    #[error("the '{metric}' series has no observations")]
    EmptySeries { metric: String },

    #[error("'{numerator}' and '{denominator}' share no reporting periods")]
    NoCommonPeriods {
        numerator: String,
        denominator: String,
    },

    #[error("parameter '{param}' must be greater than zero, got {value}")]
    InvalidParameter { param: &'static str, value: usize },
}

impl MetricsError {
    pub const fn kind(&self) -> MetricsErrorKind {
        match self {
            Self::EmptySeries { .. } | Self::NoCommonPeriods { .. } => {
                MetricsErrorKind::InsufficientData
            }
            Self::InvalidParameter { .. } => MetricsErrorKind::InvalidParameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_error_kinds() {
        let empty = MetricsError::EmptySeries {
            metric: String::from("Net Income"),
        };
        assert_eq!(empty.kind(), MetricsErrorKind::InsufficientData);

        let parameter = MetricsError::InvalidParameter {
            param: "window",
            value: 0,
        };
        assert_eq!(parameter.kind(), MetricsErrorKind::InvalidParameter);
    }
}
