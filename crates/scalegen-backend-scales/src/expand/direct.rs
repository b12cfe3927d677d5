//! Closed-form generators for tunings that do not tile a ratio list.

use serde::{Deserialize, Serialize};

use scalegen_spec::{ScaleError, ScaleResult, NOTES_PER_SUB_SCALE, NUM_SUB_SCALES};

use super::ExpandedRow;

/// The closed-form strategies. Each is a genuinely different rule; they are
/// selected per tuning, not unified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum DirectRule {
    /// A fixed list of frequencies, shifted up by a constant number of cents
    /// for each successive sub-scale.
    ShiftedList {
        /// One frequency per note.
        frequencies: Vec<f64>,
        /// Shift between consecutive sub-scales, in cents.
        cents_per_sub_scale: f64,
    },
    /// Integer multiples of a base frequency.
    Harmonic(HarmonicSeries),
    /// Repeated multiplication by a fixed step.
    Ladder(EqualStepLadder),
}

impl DirectRule {
    /// Expands all sub-scales.
    pub fn expand(&self, tuning: &str) -> ScaleResult<Vec<ExpandedRow>> {
        match self {
            DirectRule::ShiftedList {
                frequencies,
                cents_per_sub_scale,
            } => shifted_list(tuning, frequencies, *cents_per_sub_scale),
            DirectRule::Harmonic(series) => Ok(series.expand()),
            DirectRule::Ladder(ladder) => ladder.expand(tuning),
        }
    }
}

fn shifted_list(tuning: &str, frequencies: &[f64], cents: f64) -> ScaleResult<Vec<ExpandedRow>> {
    if frequencies.len() != NOTES_PER_SUB_SCALE {
        return Err(ScaleError::WrongCount {
            tuning: tuning.to_string(),
            what: "listed frequencies",
            expected: NOTES_PER_SUB_SCALE,
            found: frequencies.len(),
        });
    }

    Ok((0..NUM_SUB_SCALES)
        .map(|sub_scale| {
            let shift = 2.0_f64.powf(sub_scale as f64 * cents / 1200.0);
            ExpandedRow::unnamed(frequencies.iter().map(|&f| shift * f).collect())
        })
        .collect())
}

/// Final row of a harmonic tuning that counts up by 1 Hz from two
/// different bases instead of following the harmonic series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRamp {
    /// First note index taken from `high`.
    pub split: usize,
    /// Base for notes before the split: `low + note`.
    pub low: f64,
    /// Base for notes from the split on: `high + note`.
    pub high: f64,
}

impl SplitRamp {
    fn frequency(&self, note: usize) -> f64 {
        if note < self.split {
            self.low + note as f64
        } else {
            self.high + note as f64
        }
    }
}

/// `f = base * (note + 1) * (sub_scale + 1)`, optionally replacing the last
/// sub-scale with a [`SplitRamp`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonicSeries {
    /// Fundamental in Hz.
    pub base: f64,
    /// Replacement for the last sub-scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_row: Option<SplitRamp>,
}

impl HarmonicSeries {
    fn expand(&self) -> Vec<ExpandedRow> {
        (0..NUM_SUB_SCALES)
            .map(|sub_scale| {
                let ramp = self
                    .final_row
                    .filter(|_| sub_scale == NUM_SUB_SCALES - 1);
                let row = (0..NOTES_PER_SUB_SCALE)
                    .map(|note| match ramp {
                        Some(ramp) => ramp.frequency(note),
                        None => self.base * (note + 1) as f64 * (sub_scale + 1) as f64,
                    })
                    .collect();
                ExpandedRow::unnamed(row)
            })
            .collect()
    }
}

/// Step between consecutive ladder notes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepSize {
    /// `2^(1/n)`: one step of an n-tone equal division of the octave.
    Divisions(u32),
    /// `2^(cents/1200)`.
    Cents(f64),
}

impl StepSize {
    /// The multiplicative step.
    pub fn ratio(&self) -> f64 {
        match *self {
            StepSize::Divisions(n) => 2.0_f64.powf(1.0 / n as f64),
            StepSize::Cents(cents) => 2.0_f64.powf(cents / 1200.0),
        }
    }
}

/// Where each ladder sub-scale starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LadderStarts {
    /// One explicit start per sub-scale.
    Listed(Vec<f64>),
    /// `start`, then multiplied by `factor` for each following sub-scale.
    Repeated {
        /// First sub-scale start in Hz.
        start: f64,
        /// Multiplier between sub-scale starts.
        factor: f64,
    },
    /// Each sub-scale starts on the last note of the previous one.
    Continuous(f64),
}

/// `f[0] = start_s`, `f[i] = f[i-1] * step`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqualStepLadder {
    /// Step between notes.
    pub step: StepSize,
    /// Sub-scale starting frequencies.
    pub starts: LadderStarts,
}

impl EqualStepLadder {
    fn expand(&self, tuning: &str) -> ScaleResult<Vec<ExpandedRow>> {
        if let StepSize::Divisions(0) = self.step {
            return Err(ScaleError::NonPositive {
                sub_scale: 0,
                field: "divisions",
                value: 0.0,
            });
        }
        if let LadderStarts::Listed(starts) = &self.starts {
            if starts.len() != NUM_SUB_SCALES {
                return Err(ScaleError::WrongCount {
                    tuning: tuning.to_string(),
                    what: "ladder starts",
                    expected: NUM_SUB_SCALES,
                    found: starts.len(),
                });
            }
        }

        let step = self.step.ratio();
        let mut rows = Vec::with_capacity(NUM_SUB_SCALES);
        let mut next_start = match self.starts {
            LadderStarts::Listed(ref starts) => starts[0],
            LadderStarts::Repeated { start, .. } => start,
            LadderStarts::Continuous(start) => start,
        };

        for sub_scale in 0..NUM_SUB_SCALES {
            let start = match self.starts {
                LadderStarts::Listed(ref starts) => starts[sub_scale],
                _ => next_start,
            };

            let mut row = Vec::with_capacity(NOTES_PER_SUB_SCALE);
            row.push(start);
            for note in 1..NOTES_PER_SUB_SCALE {
                row.push(row[note - 1] * step);
            }

            next_start = match self.starts {
                LadderStarts::Listed(_) => next_start,
                LadderStarts::Repeated { factor, .. } => next_start * factor,
                LadderStarts::Continuous(_) => row[NOTES_PER_SUB_SCALE - 1],
            };
            rows.push(ExpandedRow::unnamed(row));
        }

        Ok(rows)
    }
}
