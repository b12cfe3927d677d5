//! Generate command implementation
//!
//! Runs the batch and writes the C++ source to a file or stdout.

use anyhow::{Context, Result};
use colored::Colorize;
use scalegen_spec::GeneratorConfig;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{GenerateOutput, JsonError};
use crate::batch::{render_with_hash, Batch};

/// Run the generate command
///
/// # Arguments
/// * `config_path` - Path to a JSON configuration (default: built-in defaults)
/// * `output` - Output file path (default: stdout)
/// * `tunings` - Tuning ids overriding the configured selection
/// * `json_output` - Whether to print a machine-readable summary
///
/// When the source goes to stdout the summary goes to stderr.
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    config_path: Option<&str>,
    output: Option<&str>,
    tunings: &[String],
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(config_path, output, tunings)
    } else {
        run_human(config_path, output, tunings)
    }
}

/// Loads the configuration and applies command-line overrides.
pub fn load_config(config_path: Option<&str>, tunings: &[String]) -> Result<GeneratorConfig> {
    let mut config = match config_path {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => GeneratorConfig::default(),
    };
    if !tunings.is_empty() {
        config.tunings = Some(tunings.to_vec());
    }
    Ok(config)
}

/// Writes `text` to `output`, or to stdout when no path is given.
fn write_output(output: Option<&str>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write to: {}", path))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}

fn run_human(config_path: Option<&str>, output: Option<&str>, tunings: &[String]) -> Result<ExitCode> {
    let start = Instant::now();
    let config = load_config(config_path, tunings)?;
    let batch = Batch::run(&config)?;
    let (text, hash) = render_with_hash(&batch)?;
    write_output(output, &text)?;

    let summary = [
        format!(
            "{} {} table(s), {} filter(s)",
            "Generated:".cyan().bold(),
            batch.outputs.len(),
            config.filters.len()
        ),
        format!("{} {}", "Output:".cyan().bold(), output.unwrap_or("<stdout>")),
        format!("{} {}", "BLAKE3:".dimmed(), hash),
        format!(
            "{} {} bytes in {:.1?}",
            "SUCCESS".green().bold(),
            text.len(),
            start.elapsed()
        ),
    ];
    for line in summary {
        if output.is_some() {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(config_path: Option<&str>, output: Option<&str>, tunings: &[String]) -> Result<ExitCode> {
    let (summary, code) = match generate_json(config_path, output, tunings) {
        Ok(summary) => (summary, ExitCode::SUCCESS),
        Err(err) => (
            GenerateOutput::failure(JsonError::from_anyhow(&err)),
            ExitCode::from(1),
        ),
    };

    let json = serde_json::to_string_pretty(&summary).context("Failed to serialize output")?;
    if output.is_some() {
        println!("{}", json);
    } else {
        eprintln!("{}", json);
    }
    Ok(code)
}

fn generate_json(
    config_path: Option<&str>,
    output: Option<&str>,
    tunings: &[String],
) -> Result<GenerateOutput> {
    let config = load_config(config_path, tunings)?;
    let batch = Batch::run(&config)?;
    let (text, hash) = render_with_hash(&batch)?;
    write_output(output, &text)?;

    Ok(GenerateOutput {
        success: true,
        output: Some(output.unwrap_or("-").to_string()),
        output_hash: Some(hash),
        config_hash: Some(batch.config_hash()?),
        tunings: batch.table_ids().into_iter().map(str::to_string).collect(),
        filters: config.filters.iter().map(|f| f.name()).collect(),
        bytes: text.len(),
        errors: Vec::new(),
    })
}
