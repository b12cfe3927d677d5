//! Error types for table construction and configuration.

use thiserror::Error;

/// Result type for table construction.
pub type ScaleResult<T> = Result<T, ScaleError>;

/// Errors raised while building scale tables or loading configuration.
///
/// Every variant describes a malformed input. Construction fails fast; no
/// table is ever truncated or padded to hide one of these.
#[derive(Debug, Error)]
pub enum ScaleError {
    /// A sub-scale declared no ratios.
    #[error("sub-scale {sub_scale}: ratio list is empty")]
    EmptyRatios {
        /// Sub-scale index (0-based).
        sub_scale: usize,
    },

    /// A sub-scale declared more ratios than the table row holds.
    #[error("sub-scale {sub_scale}: {len} ratios do not fit in a row of {max} notes")]
    TooManyRatios {
        /// Sub-scale index (0-based).
        sub_scale: usize,
        /// Number of ratios supplied.
        len: usize,
        /// Row length.
        max: usize,
    },

    /// Names were supplied but do not line up with the ratios.
    #[error("sub-scale {sub_scale}: {names} names for {ratios} ratios")]
    NameCountMismatch {
        /// Sub-scale index (0-based).
        sub_scale: usize,
        /// Number of names supplied.
        names: usize,
        /// Number of ratios supplied.
        ratios: usize,
    },

    /// A ratio, start frequency or repeat factor is zero, negative or not finite.
    #[error("sub-scale {sub_scale}: {field} must be positive and finite, got {value}")]
    NonPositive {
        /// Sub-scale index (0-based).
        sub_scale: usize,
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A tuning did not declare exactly one entry per sub-scale.
    #[error("tuning '{tuning}': expected {expected} {what}, found {found}")]
    WrongCount {
        /// Tuning id.
        tuning: String,
        /// What was being counted.
        what: &'static str,
        /// Required count.
        expected: usize,
        /// Supplied count.
        found: usize,
    },

    /// A generated frequency came out non-positive or non-finite.
    #[error("tuning '{tuning}': frequency at sub-scale {sub_scale}, note {note} is {value}")]
    InvalidFrequency {
        /// Tuning id.
        tuning: String,
        /// Sub-scale index.
        sub_scale: usize,
        /// Note index.
        note: usize,
        /// Offending value.
        value: f64,
    },

    /// Requested tuning id is not in the catalog.
    #[error("unknown tuning '{0}'")]
    UnknownTuning(String),

    /// Configuration is structurally valid JSON but semantically wrong.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// I/O error while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScaleError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            ScaleError::EmptyRatios { .. } => "SCALE_001",
            ScaleError::TooManyRatios { .. } => "SCALE_002",
            ScaleError::NameCountMismatch { .. } => "SCALE_003",
            ScaleError::NonPositive { .. } => "SCALE_004",
            ScaleError::WrongCount { .. } => "SCALE_005",
            ScaleError::InvalidFrequency { .. } => "SCALE_006",
            ScaleError::UnknownTuning(_) => "SCALE_007",
            ScaleError::InvalidConfig(_) => "SCALE_008",
            ScaleError::ConfigParse(_) => "SCALE_009",
            ScaleError::Io(_) => "SCALE_010",
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Common surface of the backend error types.
///
/// Lets the CLI report a stable code for any failure without knowing which
/// backend produced it.
pub trait BackendError: std::error::Error {
    /// Stable code like "FILTER_002".
    fn code(&self) -> &'static str;

    /// Short grouping label like "filter".
    fn category(&self) -> &'static str;
}

impl BackendError for ScaleError {
    fn code(&self) -> &'static str {
        ScaleError::code(self)
    }

    fn category(&self) -> &'static str {
        "scale"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_ratios_message() {
        let err = ScaleError::TooManyRatios {
            sub_scale: 3,
            len: 22,
            max: 21,
        };
        let msg = err.to_string();
        assert!(msg.contains("sub-scale 3"));
        assert!(msg.contains("22 ratios"));
        assert_eq!(err.code(), "SCALE_002");
    }

    #[test]
    fn test_invalid_config_helper() {
        let err = ScaleError::invalid_config("no filters");
        assert!(err.to_string().contains("no filters"));
        assert_eq!(err.code(), "SCALE_008");
    }

    #[test]
    fn test_backend_error_trait() {
        let err: Box<dyn BackendError> = Box::new(ScaleError::UnknownTuning("x".into()));
        assert_eq!(err.code(), "SCALE_007");
        assert_eq!(err.category(), "scale");
    }
}
