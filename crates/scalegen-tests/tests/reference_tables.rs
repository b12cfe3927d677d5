//! Catalog-wide checks and reference values.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p scalegen-tests --test reference_tables
//! ```

use pretty_assertions::assert_eq;
use scalegen_backend_scales::expand::{expand_intervals, DirectRule};
use scalegen_backend_scales::{build_tables, catalog, find, Generator};
use scalegen_spec::{IntervalSpec, NOTES_PER_SUB_SCALE, NUM_SUB_SCALES, TABLE_LEN};
use scalegen_tests::fixtures::{approx_eq, C1};

#[test]
fn test_full_catalog_builds() {
    let tables = build_tables(None).unwrap();
    assert_eq!(tables.len(), 21);
    for table in &tables {
        assert_eq!(table.frequencies.len(), TABLE_LEN, "{}", table.id);
        assert_eq!(table.note_names.len(), TABLE_LEN, "{}", table.id);
        assert_eq!(table.sub_scale_names.len(), NUM_SUB_SCALES, "{}", table.id);
        assert!(
            table.frequencies.iter().all(|f| f.is_finite() && *f > 0.0),
            "{} has a non-positive frequency",
            table.id
        );
    }
}

#[test]
fn test_seven_tone_equal_division() {
    let ratios = (0..7).map(|i| 2.0_f64.powf(i as f64 / 7.0)).collect();
    let spec = IntervalSpec::new(ratios, 32.70, 2.0);
    let row = expand_intervals(&spec, 0, NOTES_PER_SUB_SCALE).unwrap();
    assert!((row.frequencies[7] - 65.40).abs() < 1e-9);
    assert!((row.frequencies[14] - 130.80).abs() < 1e-9);
}

#[test]
fn test_bohlen_pierce_tritave() {
    let table = find("bohlenpierce").unwrap().build().unwrap();
    let row = table.frequencies.row(0);
    assert_eq!(row[0], C1);
    assert_eq!(row[4], row[0] * 3.0);
    assert_eq!(row[5], row[1] * 3.0);
}

/// Tiling and label repetition hold for every interval tuning.
#[test]
fn test_interval_tunings_tile() {
    for def in catalog() {
        let Generator::Interval { sub_scales } = &def.generator else {
            continue;
        };
        let table = def.build().unwrap();
        for (s, spec) in sub_scales.iter().enumerate() {
            let period = spec.ratios.len();
            let frequencies = table.frequencies.row(s);
            let names = table.note_names.row(s);
            for i in period..NOTES_PER_SUB_SCALE {
                assert!(
                    approx_eq(frequencies[i], frequencies[i - period] * spec.repeat_factor),
                    "{} row {} note {}",
                    def.id,
                    s,
                    i
                );
                assert_eq!(names[i], names[i - period], "{} row {} note {}", def.id, s, i);
            }
        }
    }
}

#[test]
fn test_spread_tunings_step_sizes() {
    let mut checked = 0;
    for def in catalog() {
        let Generator::PairSpread(spread) = &def.generator else {
            continue;
        };
        let table = def.build().unwrap();
        for (s, &(a, b)) in spread.pairs.iter().enumerate() {
            let row = table.frequencies.row(s);
            assert_eq!(row[0], spread.start_frequency, "{}", def.id);
            let up_a = 2.0_f64.powf(spread.cents * a as f64 / 1200.0);
            let up_b = 2.0_f64.powf(spread.cents * b as f64 / 1200.0);
            for k in (1..NOTES_PER_SUB_SCALE).step_by(2) {
                assert!(approx_eq(row[k] / row[k - 1], up_a), "{} row {}", def.id, s);
                assert!(approx_eq(row[k + 1] / row[k], up_b), "{} row {}", def.id, s);
            }
            assert_eq!(table.note_name(s, 1), Some(format!("+{}", a).as_str()));
        }
        checked += 1;
    }
    assert_eq!(checked, 3);
}

#[test]
fn test_video_harmonics() {
    let table = find("video_notused").unwrap().build().unwrap();
    assert!(approx_eq(table.frequency(0, 0).unwrap(), 59.94));
    assert!(approx_eq(table.frequency(2, 3).unwrap(), 59.94 * 4.0 * 3.0));
    assert_eq!(table.frequency(10, 0), Some(15729.0));
    assert_eq!(table.frequency(10, 11), Some(31463.0 + 11.0));
}

#[test]
fn test_gamma_ladder_is_continuous() {
    let def = find("gamma_notused").unwrap();
    assert!(matches!(def.generator, Generator::Direct(DirectRule::Ladder(_))));
    let table = def.build().unwrap();
    assert_eq!(table.frequency(0, 0), Some(120.0));
    for s in 1..NUM_SUB_SCALES {
        assert_eq!(table.frequency(s, 0), table.frequency(s - 1, 20));
    }
}

#[test]
fn test_seventeen_tet_rows_double() {
    let table = find("seventeen").unwrap().build().unwrap();
    for s in 1..NUM_SUB_SCALES {
        let ratio = table.frequency(s, 0).unwrap() / table.frequency(s - 1, 0).unwrap();
        assert!(approx_eq(ratio, 2.0));
    }
    let step = table.frequency(0, 17).unwrap() / table.frequency(0, 0).unwrap();
    assert!(approx_eq(step, 2.0));
}

#[test]
fn test_selection_preserves_order() {
    let ids = vec!["et_minor".to_string(), "gamelan".to_string()];
    let tables = build_tables(Some(&ids)).unwrap();
    let got: Vec<&str> = tables.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(got, vec!["et_minor", "gamelan"]);
}
