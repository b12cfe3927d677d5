//! An ordered set of coefficient pipelines.

use std::collections::HashSet;

use scalegen_spec::{GeneratorConfig, ScaleTable};

use crate::error::{FilterError, FilterResult};
use crate::family::{family_for, CoefficientRow};
use crate::pipeline::{CoefficientPipeline, FilterState};

/// Coefficient rows of one table for one filter configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSet {
    /// Configuration name, e.g. `bpre48000_q2_g2`.
    pub filter: String,
    /// Values per row.
    pub row_len: usize,
    /// One row per note, row-major.
    pub rows: Vec<CoefficientRow>,
}

impl CoefficientSet {
    /// Rows as slices, for hashing and emission.
    pub fn row_slices(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(CoefficientRow::values)
    }
}

/// Runs every table through every pipeline, in configuration order.
///
/// Each pipeline keeps its ceiling state for the lifetime of the bank.
pub struct FilterBank {
    pipelines: Vec<CoefficientPipeline>,
}

impl FilterBank {
    /// Builds the bank described by a configuration.
    pub fn from_config(config: &GeneratorConfig) -> FilterResult<Self> {
        config.validate()?;
        let pipelines = config
            .filters
            .iter()
            .map(|filter| {
                let family = family_for(filter)?;
                Ok(CoefficientPipeline::new(
                    family,
                    FilterState::from_config(&config.ceiling),
                ))
            })
            .collect::<FilterResult<Vec<_>>>()?;
        Self::from_pipelines(pipelines)
    }

    /// Builds a bank from prepared pipelines, rejecting duplicate names.
    pub fn from_pipelines(pipelines: Vec<CoefficientPipeline>) -> FilterResult<Self> {
        let mut seen = HashSet::new();
        for pipeline in &pipelines {
            let name = pipeline.name();
            if !seen.insert(name.clone()) {
                return Err(FilterError::DuplicateName(name));
            }
        }
        log::debug!("Filter bank with {} pipelines", pipelines.len());
        Ok(Self { pipelines })
    }

    /// Pipeline names in order.
    pub fn names(&self) -> Vec<String> {
        self.pipelines.iter().map(CoefficientPipeline::name).collect()
    }

    /// Number of pipelines.
    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    /// True when the bank has no pipelines.
    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    /// Runs one table through every pipeline.
    pub fn process(&mut self, table: &ScaleTable) -> FilterResult<Vec<CoefficientSet>> {
        self.pipelines
            .iter_mut()
            .map(|pipeline| {
                let rows = pipeline.generate_table(table)?;
                Ok(CoefficientSet {
                    filter: pipeline.name(),
                    row_len: pipeline.row_len(),
                    rows,
                })
            })
            .collect()
    }
}
