//! Error types for the filter backend.

use scalegen_spec::{BackendError, ScaleError};
use thiserror::Error;

/// Result type for coefficient generation.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while designing filters or generating coefficients.
///
/// None of these are retried. A failure aborts the whole batch.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The request descriptor could not be parsed.
    #[error("malformed filter request '{request}': {message}")]
    MalformedRequest {
        /// The request text.
        request: String,
        /// What was wrong with it.
        message: String,
    },

    /// The request names a family the designer does not implement.
    #[error("unknown filter family '{family}' in request '{request}'")]
    UnknownFamily {
        /// The request text.
        request: String,
        /// The family token.
        family: String,
    },

    /// Q must be positive and finite.
    #[error("invalid Q: {q}")]
    InvalidQ {
        /// The rejected Q.
        q: f64,
    },

    /// Design frequency outside the open interval (0, sample_rate / 2).
    #[error("frequency {frequency} Hz is outside (0, {nyquist}) Hz")]
    FrequencyOutOfRange {
        /// The rejected frequency.
        frequency: f64,
        /// Half the sample rate.
        nyquist: f64,
    },

    /// The designed filter has no usable response at the design frequency.
    #[error("filter '{request}' has no finite non-zero response at {frequency} Hz")]
    DegenerateResponse {
        /// The request text.
        request: String,
        /// Frequency the response was evaluated at.
        frequency: f64,
    },

    /// Sample rate of zero.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected rate.
        rate: u32,
    },

    /// Two pipelines in one bank share a name.
    #[error("duplicate filter configuration '{0}'")]
    DuplicateName(String),

    /// Configuration was rejected before any filter was built.
    #[error(transparent)]
    Config(#[from] ScaleError),
}

impl FilterError {
    /// Creates a malformed request error.
    pub fn malformed(request: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            request: request.into(),
            message: message.into(),
        }
    }
}

impl BackendError for FilterError {
    fn code(&self) -> &'static str {
        match self {
            FilterError::MalformedRequest { .. } => "FILTER_001",
            FilterError::UnknownFamily { .. } => "FILTER_002",
            FilterError::InvalidQ { .. } => "FILTER_003",
            FilterError::FrequencyOutOfRange { .. } => "FILTER_004",
            FilterError::DegenerateResponse { .. } => "FILTER_005",
            FilterError::InvalidSampleRate { .. } => "FILTER_006",
            FilterError::DuplicateName(_) => "FILTER_007",
            FilterError::Config(err) => err.code(),
        }
    }

    fn category(&self) -> &'static str {
        match self {
            FilterError::Config(_) => "scale",
            _ => "filter",
        }
    }
}
