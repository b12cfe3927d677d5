//! Note table expanders.
//!
//! Each expander is a pure function from explicit parameters to one or more
//! rows of frequencies and labels. None of them keep state between calls.

pub mod direct;
pub mod interval;
pub mod spread;

pub use direct::{DirectRule, EqualStepLadder, HarmonicSeries, LadderStarts, SplitRamp, StepSize};
pub use interval::expand_intervals;
pub use spread::{expand_pair, PairSpread};

/// One expanded sub-scale: frequencies and parallel labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedRow {
    /// Note frequencies in Hz.
    pub frequencies: Vec<f64>,
    /// Note labels, empty strings when the tuning has none.
    pub names: Vec<String>,
}

impl ExpandedRow {
    /// A row with the given frequencies and empty labels.
    pub fn unnamed(frequencies: Vec<f64>) -> Self {
        let names = vec![String::new(); frequencies.len()];
        Self { frequencies, names }
    }
}
