//! Byte-identical output across repeated runs.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p scalegen-tests --test batch_determinism
//! ```

use pretty_assertions::assert_eq;
use scalegen_backend_scales::build_tables;
use scalegen_cli::{render_with_hash, Batch};
use scalegen_spec::{rows_hash, table_hash, GeneratorConfig};
use scalegen_tests::fixtures::{determinism_configs, with_tunings};
use scalegen_tests::{render_config, test_determinism, verify_hash_determinism, DeterminismFixture};

test_determinism!(default_batch_is_deterministic, render_config(&GeneratorConfig::default()));

test_determinism!(
    gamma_only_is_deterministic,
    runs = 5,
    render_config(&with_tunings(&["gamma_notused"]))
);

#[test]
fn test_fixture_configs() {
    let fixture = determinism_configs()
        .into_iter()
        .fold(DeterminismFixture::new(), |fixture, (label, config)| {
            fixture.add_config(label, config)
        });
    let report = fixture.run();
    assert!(report.all_deterministic(), "{}", report);
    assert_eq!(report.entries.len(), 3);
}

#[test]
fn test_table_hashes_stable() {
    let first: Vec<String> = build_tables(None).unwrap().iter().map(table_hash).collect();
    let second: Vec<String> = build_tables(None).unwrap().iter().map(table_hash).collect();
    assert_eq!(first, second);
}

#[test]
fn test_coefficient_hashes_stable() {
    let hashes: Vec<String> = (0..3)
        .map(|_| {
            let batch = Batch::run(&GeneratorConfig::default()).unwrap();
            rows_hash(
                batch
                    .outputs
                    .iter()
                    .flat_map(|o| o.coefficients.iter())
                    .flat_map(|set| set.row_slices()),
            )
        })
        .collect();
    assert!(verify_hash_determinism(&hashes));
}

#[test]
fn test_output_hash_matches_text() {
    let batch = Batch::run(&with_tunings(&["et_major"])).unwrap();
    let (text, hash) = render_with_hash(&batch).unwrap();
    assert_eq!(hash, scalegen_tests::compute_hash(text.as_bytes()));
}

#[test]
fn test_frequency_block_toggle_changes_output() {
    let with = render_config(&with_tunings(&["et_major"]));
    let without = render_config(&GeneratorConfig {
        include_frequencies: false,
        ..with_tunings(&["et_major"])
    });
    assert!(with.contains("\t.frequency = {"));
    assert!(!without.contains("\t.frequency = {"));
    assert!(with.len() > without.len());
}
