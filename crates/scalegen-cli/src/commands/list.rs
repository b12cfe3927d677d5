//! List command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::TuningEntry;

/// Catalog entries in emission order.
pub fn entries() -> Vec<TuningEntry> {
    scalegen_backend_scales::catalog()
        .into_iter()
        .map(|def| TuningEntry {
            generator: def.generator.kind().to_string(),
            id: def.id,
            name: def.name,
            description: def.description,
        })
        .collect()
}

/// Run the list command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let entries = entries();

    if json_output {
        let json = serde_json::to_string_pretty(&entries).context("Failed to serialize output")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    let width = entries.iter().map(|e| e.id.len()).max().unwrap_or(0);
    for entry in &entries {
        println!(
            "{}  {}  {}",
            format!("{:<width$}", entry.id, width = width).bold(),
            format!("{:<12}", entry.generator).dimmed(),
            entry.name
        );
    }
    println!("{} {} tunings", "Total:".cyan().bold(), entries.len());

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_catalog() {
        let entries = entries();
        assert_eq!(entries.len(), 21);
        assert_eq!(entries[0].id, "video_notused");
        assert_eq!(entries[0].generator, "harmonic");
        assert_eq!(entries[1].generator, "interval");
        assert_eq!(entries[20].id, "et_minor");
    }
}
