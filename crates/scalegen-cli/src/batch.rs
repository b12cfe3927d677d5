//! One full generation run: tables, coefficients, emitted text.

use std::io::Write;

use anyhow::{Context, Result};
use scalegen_backend_filter::{CoefficientSet, FilterBank};
use scalegen_spec::{config_hash, output_hash, GeneratorConfig, ScaleTable};

use crate::emit::TableEmitter;

/// A table together with its coefficient sets, in filter order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOutput {
    /// The tuning table.
    pub table: ScaleTable,
    /// One set per configured filter.
    pub coefficients: Vec<CoefficientSet>,
}

/// Everything produced by one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Configuration the batch was generated from.
    pub config: GeneratorConfig,
    /// Tables in emission order.
    pub outputs: Vec<TableOutput>,
}

impl Batch {
    /// Builds the selected tables and runs them through a fresh filter bank.
    ///
    /// The bank lives for the whole batch, so ceiling fallbacks carry over
    /// from one table to the next.
    pub fn run(config: &GeneratorConfig) -> Result<Self> {
        config.validate().context("Invalid generator configuration")?;

        let tables = scalegen_backend_scales::build_tables(config.tunings.as_deref())
            .context("Failed to build tuning tables")?;
        let mut bank = FilterBank::from_config(config).context("Failed to build filter bank")?;

        let outputs = tables
            .into_iter()
            .map(|table| {
                let coefficients = bank
                    .process(&table)
                    .with_context(|| format!("Failed to generate coefficients for '{}'", table.id))?;
                Ok(TableOutput {
                    table,
                    coefficients,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Batch complete: {} table(s) x {} filter(s)",
            outputs.len(),
            bank.len()
        );

        Ok(Self {
            config: config.clone(),
            outputs,
        })
    }

    /// Ids of the emitted tables.
    pub fn table_ids(&self) -> Vec<&str> {
        self.outputs.iter().map(|o| o.table.id.as_str()).collect()
    }

    /// Writes the source text.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let emitter = TableEmitter::from_config(&self.config);
        emitter.write_preamble(out)?;
        for output in &self.outputs {
            emitter
                .write_table(out, &output.table, &output.coefficients)
                .with_context(|| format!("Failed to emit '{}'", output.table.id))?;
        }
        Ok(())
    }

    /// Renders the source text.
    pub fn render(&self) -> Result<String> {
        let mut out = Vec::new();
        self.write_to(&mut out)?;
        String::from_utf8(out).context("Emitted text is not UTF-8")
    }

    /// BLAKE3 hash of the configuration in canonical form.
    pub fn config_hash(&self) -> Result<String> {
        Ok(config_hash(&self.config)?)
    }
}

/// Renders a batch and returns the text with its BLAKE3 hash.
pub fn render_with_hash(batch: &Batch) -> Result<(String, String)> {
    let text = batch.render()?;
    let hash = output_hash(text.as_bytes());
    Ok((text, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scalegen_spec::{FilterConfig, TABLE_LEN};

    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            tunings: Some(vec!["bohlenpierce".to_string(), "gamelan".to_string()]),
            filters: vec![
                FilterConfig::SinglePole { sample_rate: 48000 },
                FilterConfig::ResonantBiquad {
                    sample_rate: 48000,
                    q: 2,
                    gain: 2.0,
                },
            ],
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_run_selected() {
        let batch = Batch::run(&small_config()).unwrap();
        assert_eq!(batch.table_ids(), vec!["bohlenpierce", "gamelan"]);
        for output in &batch.outputs {
            assert_eq!(output.coefficients.len(), 2);
            assert_eq!(output.coefficients[0].rows.len(), TABLE_LEN);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = small_config();
        let (text_a, hash_a) = render_with_hash(&Batch::run(&config).unwrap()).unwrap();
        let (text_b, hash_b) = render_with_hash(&Batch::run(&config).unwrap()).unwrap();
        assert_eq!(text_a, text_b);
        assert_eq!(hash_a, hash_b);
        assert_eq!(hash_a.len(), 64);
    }

    #[test]
    fn test_render_structure() {
        let text = Batch::run(&small_config()).unwrap().render().unwrap();
        assert!(text.starts_with("#include \"Scales.hpp\"\nScale bohlenpierce = {\n"));
        assert_eq!(text.matches("\nScale ").count(), 2);
        assert_eq!(text.matches("\t.c_maxq48000 = {").count(), 2);
        assert_eq!(text.matches("\t.c_bpre48000_q2_g2 = {").count(), 2);
        assert!(text.ends_with("};\n"));
    }

    #[test]
    fn test_unknown_tuning_fails() {
        let config = GeneratorConfig {
            tunings: Some(vec!["nope".to_string()]),
            ..GeneratorConfig::default()
        };
        let err = Batch::run(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("nope"));
    }
}
