//! Interval tiling.
//!
//! The first `n` notes are the ratios applied to the start frequency. Every
//! later note repeats the note `n` places before it, multiplied by the repeat
//! factor, so the ratio list tiles upward one octave (or tritave) at a time.
//! When `n` does not divide the row length the last tile is simply cut off.

use scalegen_spec::{IntervalSpec, ScaleResult};

use super::ExpandedRow;

/// Expands one sub-scale to `length` notes.
///
/// # Arguments
/// * `spec` - Ratios, names, start frequency and repeat factor
/// * `sub_scale` - Index used to label validation errors
/// * `length` - Row length, normally 21
pub fn expand_intervals(
    spec: &IntervalSpec,
    sub_scale: usize,
    length: usize,
) -> ScaleResult<ExpandedRow> {
    spec.validate(sub_scale, length)?;

    let period = spec.ratios.len();
    let mut frequencies = Vec::with_capacity(length);
    let mut names = Vec::with_capacity(length);

    for (i, &ratio) in spec.ratios.iter().enumerate() {
        frequencies.push(ratio * spec.start_frequency);
        names.push(spec.names.get(i).cloned().unwrap_or_default());
    }

    for i in period..length {
        frequencies.push(frequencies[i - period] * spec.repeat_factor);
        names.push(names[i - period].clone());
    }

    Ok(ExpandedRow { frequencies, names })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalegen_spec::ScaleError;

    fn close(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-9
    }

    #[test]
    fn test_length_is_fixed() {
        for n in 1..=21 {
            let spec = IntervalSpec::new(vec![1.0; n], 100.0, 2.0);
            let row = expand_intervals(&spec, 0, 21).unwrap();
            assert_eq!(row.frequencies.len(), 21);
            assert_eq!(row.names.len(), 21);
        }
    }

    #[test]
    fn test_tiling_multiplies_by_repeat() {
        let spec = IntervalSpec::new(vec![1.0, 1.2, 1.5, 1.8, 1.9], 55.0, 2.0);
        let row = expand_intervals(&spec, 0, 21).unwrap();
        for i in 5..21 {
            assert_eq!(row.frequencies[i], row.frequencies[i - 5] * 2.0);
        }
    }

    #[test]
    fn test_seven_tone_equal_division() {
        let ratios: Vec<f64> = (0..7).map(|k| 2f64.powf(k as f64 / 7.0)).collect();
        let spec = IntervalSpec::new(ratios, 32.70, 2.0);
        let row = expand_intervals(&spec, 0, 21).unwrap();
        assert!(close(row.frequencies[7], 65.40));
        assert!(close(row.frequencies[14], 130.80));
        assert!((row.frequencies[14] - 130.81).abs() < 0.02);
    }

    #[test]
    fn test_tritave_repeat() {
        let spec = IntervalSpec::new(
            vec![1.0, 9.0 / 7.0, 9.0 / 5.0, 7.0 / 3.0],
            32.7031956626,
            3.0,
        );
        let row = expand_intervals(&spec, 0, 21).unwrap();
        assert_eq!(row.frequencies[4], row.frequencies[0] * 3.0);
        assert_eq!(row.frequencies[5], row.frequencies[1] * 3.0);
        assert_eq!(row.frequencies[20], row.frequencies[16] * 3.0);
    }

    #[test]
    fn test_names_tile_unscaled() {
        let spec = IntervalSpec::new(vec![1.0, 1.25, 1.5], 100.0, 2.0).with_names(["R", "M3", "P5"]);
        let row = expand_intervals(&spec, 0, 21).unwrap();
        for i in 3..21 {
            assert_eq!(row.names[i], row.names[i - 3]);
        }
        assert_eq!(row.names[19], "M3");
        assert_eq!(row.names[20], "P5");
    }

    #[test]
    fn test_missing_names_are_empty() {
        let spec = IntervalSpec::new(vec![1.0, 1.5], 100.0, 2.0);
        let row = expand_intervals(&spec, 0, 21).unwrap();
        assert!(row.names.iter().all(String::is_empty));
    }

    #[test]
    fn test_partial_final_tile_truncated() {
        // 21 = 2 * 8 + 5: the third tile stops after five notes.
        let ratios: Vec<f64> = (0..8).map(|k| 1.0 + k as f64 * 0.1).collect();
        let spec = IntervalSpec::new(ratios, 100.0, 2.0);
        let row = expand_intervals(&spec, 0, 21).unwrap();
        assert_eq!(row.frequencies.len(), 21);
        assert_eq!(row.frequencies[20], row.frequencies[4] * 4.0);
    }

    #[test]
    fn test_full_row_has_no_tiling() {
        let ratios: Vec<f64> = (0..21).map(|k| 1.0 + k as f64).collect();
        let spec = IntervalSpec::new(ratios.clone(), 10.0, 2.0);
        let row = expand_intervals(&spec, 0, 21).unwrap();
        let expected: Vec<f64> = ratios.iter().map(|r| r * 10.0).collect();
        assert_eq!(row.frequencies, expected);
    }

    #[test]
    fn test_rejects_oversized_ratio_list() {
        let spec = IntervalSpec::new(vec![1.0; 22], 100.0, 2.0);
        assert!(matches!(
            expand_intervals(&spec, 6, 21),
            Err(ScaleError::TooManyRatios { sub_scale: 6, .. })
        ));
    }

    #[test]
    fn test_rejects_mismatched_names() {
        let spec = IntervalSpec::new(vec![1.0, 1.5], 100.0, 2.0).with_names(["a", "b", "c"]);
        assert!(expand_intervals(&spec, 0, 21).is_err());
    }
}
