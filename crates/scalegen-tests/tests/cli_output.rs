//! CLI commands writing to disk.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p scalegen-tests --test cli_output
//! ```

use std::fs;
use std::process::ExitCode;

use pretty_assertions::assert_eq;
use scalegen_cli::commands::{generate, inspect, list};
use scalegen_spec::{output_hash, GeneratorConfig, TABLE_LEN};
use scalegen_tests::render_config;

#[test]
fn test_generate_to_file_matches_library() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Scales.cpp");
    let tunings = vec!["bohlenpierce".to_string(), "et_minor".to_string()];

    let code = generate::run(None, path.to_str(), &tunings, false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let written = fs::read_to_string(&path).unwrap();
    let expected = render_config(&GeneratorConfig {
        tunings: Some(tunings),
        ..GeneratorConfig::default()
    });
    assert_eq!(output_hash(written.as_bytes()), output_hash(expected.as_bytes()));
    assert_eq!(written, expected);
}

#[test]
fn test_generate_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("scalegen.json");
    let out_path = dir.path().join("Tables.cpp");
    fs::write(
        &config_path,
        r#"{
            "header": "Tables.hpp",
            "include_frequencies": false,
            "tunings": ["gamelan"],
            "filters": [{ "family": "single_pole", "sample_rate": 44100 }]
        }"#,
    )
    .unwrap();

    generate::run(config_path.to_str(), out_path.to_str(), &[], true).unwrap();

    let text = fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "#include \"Tables.hpp\"");
    assert_eq!(lines[1], "Scale gamelan = {");
    assert!(text.contains("\t.c_maxq44100 = {\n"));
    assert!(!text.contains(".frequency"));
    assert_eq!(text.matches("\nScale ").count(), 1);
    // Header, name, description, two label blocks, one filter block, closer.
    assert_eq!(lines.len(), 2 + 2 + (11 + 1) + (TABLE_LEN + 1) + (TABLE_LEN + 2) + 1);
}

#[test]
fn test_generate_json_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("never.cpp");
    let code = generate::run(None, out_path.to_str(), &["no_such_tuning".to_string()], true)
        .unwrap();
    assert_eq!(code, ExitCode::from(1));
    assert!(!out_path.exists());
}

#[test]
fn test_generate_human_propagates_failure() {
    let err = generate::run(Some("/nonexistent/scalegen.json"), None, &[], false).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to load config file"));
}

#[test]
fn test_list_and_inspect() {
    assert_eq!(list::run(true).unwrap(), ExitCode::SUCCESS);
    let ids: Vec<String> = list::entries().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, scalegen_backend_scales::ids());

    let table = inspect::build_table("indian_penta").unwrap();
    let json = serde_json::to_value(inspect::inspect_output(&table)).unwrap();
    assert_eq!(json["id"], "indian_penta");
    assert_eq!(json["sub_scales"].as_array().unwrap().len(), 11);
}
