//! Interval specification for one sub-scale.

use serde::{Deserialize, Serialize};

use crate::error::{ScaleError, ScaleResult};
use crate::table::NOTES_PER_SUB_SCALE;

/// Ratios, optional names, start frequency and repeat factor of one sub-scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalSpec {
    /// Frequency ratios relative to the start frequency, first usually 1.0.
    pub ratios: Vec<f64>,
    /// Labels parallel to `ratios`; empty when the tuning has no note names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    /// Frequency of ratio 1.0 in Hz.
    pub start_frequency: f64,
    /// Multiplier applied for each repetition of the ratio list (2.0 = octave).
    pub repeat_factor: f64,
}

impl IntervalSpec {
    /// Creates an unnamed interval spec.
    pub fn new(ratios: Vec<f64>, start_frequency: f64, repeat_factor: f64) -> Self {
        Self {
            ratios,
            names: Vec::new(),
            start_frequency,
            repeat_factor,
        }
    }

    /// Attaches note names.
    pub fn with_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Checks ratios, names and factors against a row of `length` notes.
    ///
    /// `sub_scale` is only used to label errors.
    pub fn validate(&self, sub_scale: usize, length: usize) -> ScaleResult<()> {
        if self.ratios.is_empty() {
            return Err(ScaleError::EmptyRatios { sub_scale });
        }
        if self.ratios.len() > length {
            return Err(ScaleError::TooManyRatios {
                sub_scale,
                len: self.ratios.len(),
                max: length,
            });
        }
        if !self.names.is_empty() && self.names.len() != self.ratios.len() {
            return Err(ScaleError::NameCountMismatch {
                sub_scale,
                names: self.names.len(),
                ratios: self.ratios.len(),
            });
        }
        check_positive(sub_scale, "start frequency", self.start_frequency)?;
        check_positive(sub_scale, "repeat factor", self.repeat_factor)?;
        for &ratio in &self.ratios {
            check_positive(sub_scale, "ratio", ratio)?;
        }
        Ok(())
    }

    /// Checks against a standard 21-note row.
    pub fn validate_row(&self, sub_scale: usize) -> ScaleResult<()> {
        self.validate(sub_scale, NOTES_PER_SUB_SCALE)
    }
}

fn check_positive(sub_scale: usize, field: &'static str, value: f64) -> ScaleResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ScaleError::NonPositive {
            sub_scale,
            field,
            value,
        })
    }
}
