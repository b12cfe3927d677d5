//! JSON output types for the `--json` flag.

use serde::{Deserialize, Serialize};

use scalegen_backend_filter::FilterError;
use scalegen_spec::{BackendError, ScaleError};

/// Error codes raised by the CLI itself.
pub mod error_codes {
    /// Configuration or output file could not be read or written
    pub const FILE_IO: &str = "CLI_001";
    /// Anything not carrying a backend code
    pub const GENERAL: &str = "CLI_002";
}

/// A structured error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code, e.g. `SCALE_007` or `FILTER_004`.
    pub code: String,
    /// Human-readable message including context.
    pub message: String,
}

impl JsonError {
    /// Creates an error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Converts an `anyhow` error, picking up the first backend code in its
    /// chain.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        Self::new(error_code(err), format!("{:#}", err))
    }
}

/// First backend error code in the chain of `err`.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.chain()
        .find_map(|cause| {
            if let Some(e) = cause.downcast_ref::<FilterError>() {
                Some(e.code())
            } else if let Some(e) = cause.downcast_ref::<ScaleError>() {
                Some(e.code())
            } else if cause.downcast_ref::<std::io::Error>().is_some() {
                Some(error_codes::FILE_IO)
            } else {
                None
            }
        })
        .unwrap_or(error_codes::GENERAL)
}

/// Output of `generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateOutput {
    /// Whether the batch was generated and written.
    pub success: bool,
    /// Where the source went: a path, or `-` for stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// BLAKE3 hash of the emitted text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_hash: Option<String>,
    /// BLAKE3 hash of the canonical configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_hash: Option<String>,
    /// Emitted tuning ids, in order.
    pub tunings: Vec<String>,
    /// Filter configuration names, in order.
    pub filters: Vec<String>,
    /// Bytes of emitted text.
    pub bytes: usize,
    /// Errors, empty on success.
    pub errors: Vec<JsonError>,
}

impl GenerateOutput {
    /// A failed run.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            output: None,
            output_hash: None,
            config_hash: None,
            tunings: Vec::new(),
            filters: Vec::new(),
            bytes: 0,
            errors: vec![error],
        }
    }
}

/// One entry of `list --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TuningEntry {
    /// Tuning id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Generator kind, e.g. `interval`.
    pub generator: String,
}

/// One sub-scale in `inspect --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubScaleJson {
    /// Sub-scale label.
    pub name: String,
    /// 21 frequencies in Hz.
    pub frequencies: Vec<f64>,
    /// 21 note labels.
    pub notes: Vec<String>,
}

/// Output of `inspect --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectOutput {
    /// Tuning id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// The 11 sub-scales.
    pub sub_scales: Vec<SubScaleJson>,
    /// BLAKE3 hash of the table.
    pub table_hash: String,
}
