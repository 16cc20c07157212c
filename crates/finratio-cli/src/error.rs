use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] finratio_core::ValidationError),

    #[error(transparent)]
    Metrics(#[from] finratio_core::MetricsError),

    #[error(transparent)]
    Fetch(#[from] finratio_core::FetchError),

    #[error("strict mode failed: warnings={warning_count}")]
    StrictModeViolation { warning_count: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Metrics(_) => 2,
            Self::Fetch(_) => 3,
            Self::StrictModeViolation { .. } => 5,
            Self::Serialization(_) => 10,
        }
    }
}

impl From<finratio_core::ReportError> for CliError {
    fn from(error: finratio_core::ReportError) -> Self {
        match error {
            finratio_core::ReportError::Fetch(error) => Self::Fetch(error),
            finratio_core::ReportError::Metrics(error) => Self::Metrics(error),
        }
    }
}
