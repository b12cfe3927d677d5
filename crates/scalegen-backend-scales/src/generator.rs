//! Tuning definitions and table construction.

use serde::{Deserialize, Serialize};

use scalegen_spec::{
    IntervalSpec, ScaleError, ScaleGrid, ScaleResult, ScaleTable, NOTES_PER_SUB_SCALE,
    NUM_SUB_SCALES,
};

use crate::expand::{expand_intervals, DirectRule, ExpandedRow, PairSpread};

/// How a tuning's frequencies and note labels are produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Generator {
    /// One interval specification per sub-scale, tiled to 21 notes.
    Interval {
        /// Exactly 11 specifications.
        sub_scales: Vec<IntervalSpec>,
    },
    /// Alternating step pairs of a fixed cents size.
    PairSpread(PairSpread),
    /// A closed-form rule.
    Direct(DirectRule),
}

impl Generator {
    /// Short label for listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Generator::Interval { .. } => "interval",
            Generator::PairSpread(_) => "pair-spread",
            Generator::Direct(DirectRule::ShiftedList { .. }) => "shifted-list",
            Generator::Direct(DirectRule::Harmonic(_)) => "harmonic",
            Generator::Direct(DirectRule::Ladder(_)) => "equal-step",
        }
    }

    /// Expands all 11 sub-scales.
    pub fn expand(&self, tuning: &str) -> ScaleResult<Vec<ExpandedRow>> {
        match self {
            Generator::Interval { sub_scales } => {
                if sub_scales.len() != NUM_SUB_SCALES {
                    return Err(ScaleError::WrongCount {
                        tuning: tuning.to_string(),
                        what: "interval specifications",
                        expected: NUM_SUB_SCALES,
                        found: sub_scales.len(),
                    });
                }
                sub_scales
                    .iter()
                    .enumerate()
                    .map(|(sub_scale, spec)| {
                        expand_intervals(spec, sub_scale, NOTES_PER_SUB_SCALE)
                    })
                    .collect()
            }
            Generator::PairSpread(spread) => spread.expand(tuning),
            Generator::Direct(rule) => rule.expand(tuning),
        }
    }
}

/// A catalog entry: metadata plus the generator that fills the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningDef {
    /// Emitted symbol name.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Exactly 11 sub-scale labels.
    pub sub_scale_names: Vec<String>,
    /// Frequency and label rule.
    pub generator: Generator,
}

impl TuningDef {
    /// Creates a definition.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        sub_scale_names: &[&str],
        generator: Generator,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            sub_scale_names: sub_scale_names.iter().map(|s| s.to_string()).collect(),
            generator,
        }
    }

    /// Expands the generator and assembles the table.
    ///
    /// Fails when the definition is malformed: wrong sub-scale count, bad
    /// interval data, or a non-positive frequency anywhere in the result.
    pub fn build(&self) -> ScaleResult<ScaleTable> {
        log::debug!(
            "Building tuning '{}' ({} generator)",
            self.id,
            self.generator.kind()
        );

        let rows = self.generator.expand(&self.id)?;
        let (frequencies, names): (Vec<_>, Vec<_>) = rows
            .into_iter()
            .map(|row| (row.frequencies, row.names))
            .unzip();

        let table = ScaleTable::new(
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            self.sub_scale_names.clone(),
            ScaleGrid::try_from_rows(&self.id, frequencies)?,
            ScaleGrid::try_from_rows(&self.id, names)?,
        )?;

        log::trace!(
            "Tuning '{}' spans {:.3} Hz to {:.3} Hz",
            table.id,
            table.frequencies.iter().cloned().fold(f64::INFINITY, f64::min),
            table.frequencies.iter().cloned().fold(0.0, f64::max)
        );

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::{EqualStepLadder, LadderStarts, StepSize};

    fn labels() -> Vec<&'static str> {
        vec!["s"; NUM_SUB_SCALES]
    }

    #[test]
    fn test_interval_build() {
        let spec = IntervalSpec::new(vec![1.0, 1.5], 100.0, 2.0).with_names(["R", "P5"]);
        let def = TuningDef::new(
            "fifths",
            "Fifths",
            "",
            &labels(),
            Generator::Interval {
                sub_scales: vec![spec; NUM_SUB_SCALES],
            },
        );
        let table = def.build().unwrap();
        assert_eq!(table.frequency(0, 0), Some(100.0));
        assert_eq!(table.frequency(0, 3), Some(300.0));
        assert_eq!(table.note_name(4, 3), Some("P5"));
        assert_eq!(table.frequencies.len(), 231);
    }

    #[test]
    fn test_interval_wrong_row_count() {
        let spec = IntervalSpec::new(vec![1.0], 100.0, 2.0);
        let def = TuningDef::new(
            "short",
            "Short",
            "",
            &labels(),
            Generator::Interval {
                sub_scales: vec![spec; 10],
            },
        );
        let err = def.build().unwrap_err();
        assert!(matches!(err, ScaleError::WrongCount { found: 10, .. }));
    }

    #[test]
    fn test_sub_scale_name_count_checked() {
        let def = TuningDef::new(
            "ladder",
            "Ladder",
            "",
            &["only one"],
            Generator::Direct(DirectRule::Ladder(EqualStepLadder {
                step: StepSize::Divisions(12),
                starts: LadderStarts::Continuous(100.0),
            })),
        );
        assert!(def.build().is_err());
    }

    #[test]
    fn test_error_names_tuning() {
        let spec = IntervalSpec::new(vec![], 100.0, 2.0);
        let def = TuningDef::new(
            "empty",
            "Empty",
            "",
            &labels(),
            Generator::Interval {
                sub_scales: vec![spec; NUM_SUB_SCALES],
            },
        );
        let err = def.build().unwrap_err();
        assert_eq!(err.code(), "SCALE_001");
    }

    #[test]
    fn test_kind_labels() {
        let ladder = Generator::Direct(DirectRule::Ladder(EqualStepLadder {
            step: StepSize::Cents(100.0),
            starts: LadderStarts::Continuous(100.0),
        }));
        assert_eq!(ladder.kind(), "equal-step");
        let interval = Generator::Interval { sub_scales: vec![] };
        assert_eq!(interval.kind(), "interval");
    }
}
