//! Generator configuration.
//!
//! The configuration is a small JSON document. Every field has a default, so
//! an empty object `{}` runs the full catalog through six filter
//! configurations with a 20 kHz ceiling. The default output also carries a
//! `.frequency` block per table; set `include_frequencies` to `false` for
//! the coefficient-only layout of the reference tables.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScaleError, ScaleResult};

/// Default frequency ceiling in Hz.
pub const DEFAULT_CEILING_HZ: f64 = 20000.0;

/// Default include line written at the top of the emitted source.
pub const DEFAULT_HEADER: &str = "Scales.hpp";

/// Frequency ceiling applied by every coefficient pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CeilingConfig {
    /// Highest frequency coefficients are derived for.
    #[serde(default = "default_ceiling")]
    pub frequency: f64,
    /// When false, every frequency passes through unchanged.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for CeilingConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_CEILING_HZ,
            enabled: true,
        }
    }
}

/// One filter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case", deny_unknown_fields)]
pub enum FilterConfig {
    /// One coefficient per note: `2π·f / sample_rate`.
    SinglePole {
        /// Sample rate in Hz.
        sample_rate: u32,
    },
    /// Gain-normalised bandpass resonator: `[gain, pole2, pole1]` per note.
    ResonantBiquad {
        /// Sample rate in Hz.
        sample_rate: u32,
        /// Resonator Q.
        q: u32,
        /// Target gain at the centre frequency.
        gain: f64,
    },
}

impl FilterConfig {
    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        match self {
            FilterConfig::SinglePole { sample_rate } => *sample_rate,
            FilterConfig::ResonantBiquad { sample_rate, .. } => *sample_rate,
        }
    }

    /// Stable table key, also a valid C identifier suffix.
    ///
    /// `maxq48000`, `bpre96000_q800_g40`, `bpre48000_q2_g2p5`.
    pub fn name(&self) -> String {
        match self {
            FilterConfig::SinglePole { sample_rate } => format!("maxq{}", sample_rate),
            FilterConfig::ResonantBiquad {
                sample_rate,
                q,
                gain,
            } => {
                let gain = gain.to_string().replace('.', "p");
                format!("bpre{}_q{}_g{}", sample_rate, q, gain)
            }
        }
    }

    /// Number of coefficients produced per note.
    pub fn row_len(&self) -> usize {
        match self {
            FilterConfig::SinglePole { .. } => 1,
            FilterConfig::ResonantBiquad { .. } => 3,
        }
    }

    fn validate(&self) -> ScaleResult<()> {
        if self.sample_rate() == 0 {
            return Err(ScaleError::invalid_config(format!(
                "filter '{}': sample rate must be non-zero",
                self.name()
            )));
        }
        if let FilterConfig::ResonantBiquad { q, gain, .. } = self {
            if *q == 0 {
                return Err(ScaleError::invalid_config(format!(
                    "filter '{}': Q must be non-zero",
                    self.name()
                )));
            }
            if !(gain.is_finite() && *gain > 0.0) {
                return Err(ScaleError::invalid_config(format!(
                    "filter '{}': gain must be positive, got {}",
                    self.name(),
                    gain
                )));
            }
        }
        Ok(())
    }
}

/// Top-level generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Ceiling policy shared by all pipelines.
    #[serde(default)]
    pub ceiling: CeilingConfig,
    /// Filter configurations, in emission order.
    #[serde(default = "default_filters")]
    pub filters: Vec<FilterConfig>,
    /// Tuning ids to emit, in order. `None` emits the whole catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunings: Option<Vec<String>>,
    /// Emit a `.frequency` block alongside the coefficient blocks.
    #[serde(default = "default_true")]
    pub include_frequencies: bool,
    /// Header named by the leading `#include`.
    #[serde(default = "default_header")]
    pub header: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            ceiling: CeilingConfig::default(),
            filters: default_filters(),
            tunings: None,
            include_frequencies: true,
            header: default_header(),
        }
    }
}

impl GeneratorConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> ScaleResult<Self> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ScaleResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes to pretty JSON.
    pub fn to_json_pretty(&self) -> ScaleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks ranges and that filter names are unique.
    pub fn validate(&self) -> ScaleResult<()> {
        if !(self.ceiling.frequency.is_finite() && self.ceiling.frequency > 0.0) {
            return Err(ScaleError::invalid_config(format!(
                "ceiling frequency must be positive, got {}",
                self.ceiling.frequency
            )));
        }

        let mut names = HashSet::new();
        for filter in &self.filters {
            filter.validate()?;
            let name = filter.name();
            if !names.insert(name.clone()) {
                return Err(ScaleError::invalid_config(format!(
                    "duplicate filter configuration '{}'",
                    name
                )));
            }
        }

        if let Some(tunings) = &self.tunings {
            let mut seen = HashSet::new();
            for id in tunings {
                if !seen.insert(id.as_str()) {
                    return Err(ScaleError::invalid_config(format!(
                        "tuning '{}' listed twice",
                        id
                    )));
                }
            }
        }

        if self.header.contains('"') || self.header.contains('\n') {
            return Err(ScaleError::invalid_config(
                "header must not contain quotes or newlines",
            ));
        }

        Ok(())
    }
}

fn default_ceiling() -> f64 {
    DEFAULT_CEILING_HZ
}

fn default_true() -> bool {
    true
}

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

/// The reference filter matrix: two sample rates for the single-pole family,
/// and two Q/gain pairs at two sample rates for the biquad family.
pub fn default_filters() -> Vec<FilterConfig> {
    vec![
        FilterConfig::SinglePole { sample_rate: 48000 },
        FilterConfig::SinglePole { sample_rate: 96000 },
        FilterConfig::ResonantBiquad {
            sample_rate: 48000,
            q: 2,
            gain: 2.0,
        },
        FilterConfig::ResonantBiquad {
            sample_rate: 96000,
            q: 2,
            gain: 2.0,
        },
        FilterConfig::ResonantBiquad {
            sample_rate: 48000,
            q: 800,
            gain: 40.0,
        },
        FilterConfig::ResonantBiquad {
            sample_rate: 96000,
            q: 800,
            gain: 40.0,
        },
    ]
}
