//! Interval-pair spreads.
//!
//! A spread row climbs from its start frequency by alternating two step
//! counts `(a, b)` of a fixed cents size: up `a` steps, up `b` steps, up `a`
//! steps, and so on. Labels record the step taken to reach each note.

use serde::{Deserialize, Serialize};

use scalegen_spec::{ScaleError, ScaleResult, NOTES_PER_SUB_SCALE, NUM_SUB_SCALES};

use super::ExpandedRow;

/// Parameters of a whole spread tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairSpread {
    /// One `(a, b)` step pair per sub-scale.
    pub pairs: Vec<(u32, u32)>,
    /// Size of one step in cents.
    pub cents: f64,
    /// First note of every sub-scale in Hz.
    pub start_frequency: f64,
}

impl PairSpread {
    /// Expands every sub-scale.
    pub fn expand(&self, tuning: &str) -> ScaleResult<Vec<ExpandedRow>> {
        if self.pairs.len() != NUM_SUB_SCALES {
            return Err(ScaleError::WrongCount {
                tuning: tuning.to_string(),
                what: "interval pairs",
                expected: NUM_SUB_SCALES,
                found: self.pairs.len(),
            });
        }
        if !(self.start_frequency.is_finite() && self.start_frequency > 0.0) {
            return Err(ScaleError::NonPositive {
                sub_scale: 0,
                field: "start frequency",
                value: self.start_frequency,
            });
        }
        if !self.cents.is_finite() {
            return Err(ScaleError::NonPositive {
                sub_scale: 0,
                field: "step size",
                value: self.cents,
            });
        }

        Ok(self
            .pairs
            .iter()
            .map(|&pair| expand_pair(pair, self.cents, self.start_frequency, NOTES_PER_SUB_SCALE))
            .collect())
    }
}

/// Expands one sub-scale of `length` notes from a step pair.
///
/// `f[0] = start`; for odd `k`, `f[k] = f[k-1] * 2^(cents·a/1200)` and
/// `f[k+1] = f[k] * 2^(cents·b/1200)`. The loop never writes past
/// `length - 1`, whatever the parity of `length`.
pub fn expand_pair(pair: (u32, u32), cents: f64, start: f64, length: usize) -> ExpandedRow {
    let (a, b) = pair;
    let up_a = 2.0_f64.powf(cents * a as f64 / 1200.0);
    let up_b = 2.0_f64.powf(cents * b as f64 / 1200.0);
    let label_a = format!("+{}", a);
    let label_b = format!("+{}", b);

    let mut frequencies = vec![0.0; length];
    let mut names = vec![String::new(); length];
    if length == 0 {
        return ExpandedRow { frequencies, names };
    }

    frequencies[0] = start;
    names[0] = "0".to_string();

    for k in (1..length).step_by(2) {
        frequencies[k] = frequencies[k - 1] * up_a;
        names[k] = label_a.clone();
        if k + 1 < length {
            frequencies[k + 1] = frequencies[k] * up_b;
            names[k + 1] = label_b.clone();
        }
    }

    ExpandedRow { frequencies, names }
}
