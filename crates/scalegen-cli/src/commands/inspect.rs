//! Inspect command implementation
//!
//! Prints the 11 × 21 frequency grid of one tuning.

use anyhow::{Context, Result};
use colored::Colorize;
use scalegen_spec::{format_general, table_hash, ScaleTable};
use std::process::ExitCode;

use super::json_output::{InspectOutput, SubScaleJson};

/// Builds one tuning table by id.
pub fn build_table(tuning: &str) -> Result<ScaleTable> {
    let def = scalegen_backend_scales::find(tuning)?;
    def.build()
        .with_context(|| format!("Failed to build tuning '{}'", tuning))
}

/// JSON view of a table.
pub fn inspect_output(table: &ScaleTable) -> InspectOutput {
    let sub_scales = table
        .sub_scale_names
        .iter()
        .zip(table.frequencies.rows().zip(table.note_names.rows()))
        .map(|(name, (frequencies, notes))| SubScaleJson {
            name: name.clone(),
            frequencies: frequencies.to_vec(),
            notes: notes.to_vec(),
        })
        .collect();

    InspectOutput {
        id: table.id.clone(),
        name: table.name.clone(),
        description: table.description.clone(),
        sub_scales,
        table_hash: table_hash(table),
    }
}

/// Run the inspect command
pub fn run(tuning: &str, json_output: bool) -> Result<ExitCode> {
    let table = build_table(tuning)?;

    if json_output {
        let json = serde_json::to_string_pretty(&inspect_output(&table))
            .context("Failed to serialize output")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {} ({})", "Tuning:".cyan().bold(), table.name, table.id);
    if !table.description.is_empty() {
        println!("{}", table.description.dimmed());
    }

    for (sub_scale, (name, row)) in table
        .sub_scale_names
        .iter()
        .zip(table.frequencies.rows())
        .enumerate()
    {
        let label = if name.is_empty() {
            format!("#{}", sub_scale)
        } else {
            name.clone()
        };
        println!("{}", label.bold());
        let cells: Vec<String> = row.iter().map(|f| format!("{:>9}", format_general(*f, 6))).collect();
        for chunk in cells.chunks(7) {
            println!("  {}", chunk.join(" "));
        }
    }

    println!("{} {}", "BLAKE3:".dimmed(), table_hash(&table));
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inspect_output_shape() {
        let table = build_table("bohlenpierce").unwrap();
        let output = inspect_output(&table);
        assert_eq!(output.sub_scales.len(), 11);
        assert!(output.sub_scales.iter().all(|s| s.frequencies.len() == 21));
        assert_eq!(output.sub_scales[0].frequencies[0], 32.7031956626);
        assert_eq!(output.table_hash, table_hash(&table));
    }

    #[test]
    fn test_unknown_tuning() {
        let err = build_table("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
