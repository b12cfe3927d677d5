//! scalegen CLI - Command-line interface for tuning table generation
//!
//! This binary builds the tuning catalog, derives per-note filter
//! coefficients, and writes them as C++ source.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use scalegen_cli::commands;

/// scalegen - Tuning Table and Filter Coefficient Generator
#[derive(Parser)]
#[command(name = "scalegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the tables and write C++ source
    Generate {
        /// Path to a JSON configuration file (default: built-in defaults)
        #[arg(short, long)]
        config: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Tuning id to emit; repeat to select several (default: whole catalog)
        #[arg(short, long = "tuning")]
        tunings: Vec<String>,

        /// Output a machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the tuning catalog
    List {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the frequency grid of one tuning
    Inspect {
        /// Tuning id
        #[arg(short, long)]
        tuning: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            config,
            output,
            tunings,
            json,
        } => commands::generate::run(config.as_deref(), output.as_deref(), &tunings, json),
        Commands::List { json } => commands::list::run(json),
        Commands::Inspect { tuning, json } => commands::inspect::run(&tuning, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["scalegen", "generate"]).unwrap();
        match cli.command {
            Commands::Generate {
                config,
                output,
                tunings,
                json,
            } => {
                assert!(config.is_none());
                assert!(output.is_none());
                assert!(tunings.is_empty());
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_repeated_tuning() {
        let cli = Cli::try_parse_from([
            "scalegen",
            "generate",
            "--tuning",
            "gamelan",
            "-t",
            "bohlenpierce",
            "--output",
            "Scales.cpp",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                output,
                tunings,
                json,
                ..
            } => {
                assert_eq!(output.as_deref(), Some("Scales.cpp"));
                assert_eq!(tunings, vec!["gamelan", "bohlenpierce"]);
                assert!(json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_list() {
        let cli = Cli::try_parse_from(["scalegen", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::List { json: true }));
    }

    #[test]
    fn test_cli_requires_tuning_for_inspect() {
        let err = Cli::try_parse_from(["scalegen", "inspect"]).err().unwrap();
        assert!(err.to_string().contains("--tuning"));

        let cli = Cli::try_parse_from(["scalegen", "inspect", "-t", "gamma_notused"]).unwrap();
        match cli.command {
            Commands::Inspect { tuning, json } => {
                assert_eq!(tuning, "gamma_notused");
                assert!(!json);
            }
            _ => panic!("expected inspect command"),
        }
    }
}
