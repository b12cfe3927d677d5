//! The ceiling/fallback pipeline.
//!
//! With the ceiling enabled, a frequency above it is replaced by the last
//! in-range frequency the pipeline saw, or by the ceiling itself when there
//! has not been one yet. State is never reset during a run, so the fallback
//! for the first notes of one table can come from the previous table.

use scalegen_spec::{CeilingConfig, ScaleTable};

use crate::error::FilterResult;
use crate::family::{CoefficientFamily, CoefficientRow};

/// Ceiling policy plus the remembered in-range frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterState {
    /// Highest frequency passed through unchanged.
    pub ceiling: f64,
    /// When false, every frequency passes through and nothing is remembered.
    pub enabled: bool,
    last_valid: Option<f64>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::from_config(&CeilingConfig::default())
    }
}

impl FilterState {
    /// Creates a fresh state.
    pub fn new(ceiling: f64, enabled: bool) -> Self {
        Self {
            ceiling,
            enabled,
            last_valid: None,
        }
    }

    /// Creates a fresh state from configuration.
    pub fn from_config(config: &CeilingConfig) -> Self {
        Self::new(config.frequency, config.enabled)
    }

    /// The last in-range frequency, if any.
    pub fn last_valid(&self) -> Option<f64> {
        self.last_valid
    }

    /// The frequency coefficients should be computed for.
    ///
    /// Equal to the ceiling counts as in range.
    pub fn resolve(&mut self, frequency: f64) -> f64 {
        if !self.enabled {
            return frequency;
        }
        if frequency > self.ceiling {
            let substitute = self.last_valid.unwrap_or(self.ceiling);
            log::trace!(
                "{} Hz above ceiling {} Hz, using {} Hz",
                frequency,
                self.ceiling,
                substitute
            );
            substitute
        } else {
            self.last_valid = Some(frequency);
            frequency
        }
    }
}

/// One coefficient family with its own ceiling state.
///
/// Generation takes `&mut self`: a pipeline serves one ordered stream of
/// frequencies.
pub struct CoefficientPipeline {
    family: Box<dyn CoefficientFamily>,
    state: FilterState,
}

impl CoefficientPipeline {
    /// Creates a pipeline.
    pub fn new(family: Box<dyn CoefficientFamily>, state: FilterState) -> Self {
        Self { family, state }
    }

    /// Configuration name of the family.
    pub fn name(&self) -> String {
        self.family.name()
    }

    /// Values per row.
    pub fn row_len(&self) -> usize {
        self.family.row_len()
    }

    /// Current ceiling state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Coefficients for one frequency, applying the ceiling policy.
    pub fn generate(&mut self, frequency: f64) -> FilterResult<CoefficientRow> {
        let effective = self.state.resolve(frequency);
        self.family.calculate(effective)
    }

    /// Coefficients for every note of a table, in row-major order.
    pub fn generate_table(&mut self, table: &ScaleTable) -> FilterResult<Vec<CoefficientRow>> {
        log::debug!("Running '{}' over '{}'", self.name(), table.id);
        table
            .frequencies
            .iter()
            .map(|&frequency| self.generate(frequency))
            .collect()
    }
}
