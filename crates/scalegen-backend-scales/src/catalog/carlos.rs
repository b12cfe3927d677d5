//! Wendy Carlos' non-octave scales.

use super::E0;
use crate::expand::{DirectRule, EqualStepLadder, LadderStarts, PairSpread, StepSize};
use crate::generator::{Generator, TuningDef};

/// Alpha step: nine divisions of the perfect fifth.
const ALPHA_CENTS: f64 = 78.0;

/// Gamma step: twenty divisions of the perfect fifth.
const GAMMA_CENTS: f64 = 35.099;

/// E2 in Hz.
const E2: f64 = 82.4068892282;

/// Spread start frequencies are stored in single precision.
fn single(hz: f64) -> f64 {
    f64::from(hz as f32)
}

const ALPHA_DESCRIPTION: &str = "Omitting the octave, Wendy Carlos' Alpha scale is a based on a fixed interval size whose multiples approximate justly intonated intervals. Here the step size is 78 cents - 9 divisions of the perfect fifth, or the minor third in four steps. This scale is constructed from ascending pairs of intervals.";

pub(super) fn alpha_spread_1() -> TuningDef {
    TuningDef::new(
        "wc_alpha1",
        "Alpha Spread 1",
        ALPHA_DESCRIPTION,
        &[
            "4/10; E0-",
            "5/10; E0-",
            "4/12; E0-",
            "5/11; E0-",
            "6/10; E0-",
            "7/8; E0-",
            "8/7; E0-",
            "9/7; E0-",
            "10/5; E0-",
            "11/5; E0-",
            "12/4; E0-",
        ],
        Generator::PairSpread(PairSpread {
            pairs: vec![
                (4, 10),
                (5, 10),
                (4, 12),
                (5, 11),
                (6, 10),
                (7, 8),
                (8, 7),
                (9, 7),
                (10, 5),
                (11, 5),
                (12, 4),
            ],
            cents: ALPHA_CENTS,
            start_frequency: single(E0),
        }),
    )
}

pub(super) fn alpha_spread_2() -> TuningDef {
    TuningDef::new(
        "wc_alpha2",
        "Alpha Spread 2",
        ALPHA_DESCRIPTION,
        // The second label really does read 10/2; the data is 2/10.
        &[
            "1/11; E2-",
            "10/2; E2-",
            "3/9; E2-",
            "4/8; E2-",
            "5/7; E2-",
            "6/6; E2-",
            "7/5; E2-",
            "8/4; E2-",
            "9/3; E2-",
            "10/2; E2-",
            "11/1; E2-",
        ],
        Generator::PairSpread(PairSpread {
            pairs: (1..=11).map(|a| (a, 12 - a)).collect(),
            cents: ALPHA_CENTS,
            start_frequency: single(E2),
        }),
    )
}

pub(super) fn gamma_spread() -> TuningDef {
    TuningDef::new(
        "wc_gamma",
        "Gamma Spread",
        "Like the Alpha scale, Wendy Carlos' Gamma scale is based on a fixed interval size whose multiples approximate justly intonated intervals. Here the step size is 35 cents; 20 divisions of the perfect fifth. This scale consists of ascending pairs of intervals.",
        &[
            "3/30; E0-",
            "5/29; E0-",
            "9/25; E0-",
            "11/23; E0-",
            "13/21; E0-",
            "15/19; E0-",
            "18/16; E0-",
            "20/14; E0-",
            "24/10; E0-",
            "29/5; E0-",
            "31/3; E0-",
        ],
        Generator::PairSpread(PairSpread {
            pairs: vec![
                (3, 30),
                (5, 29),
                (8, 25),
                (11, 23),
                (13, 21),
                (15, 19),
                (18, 16),
                (20, 14),
                (24, 10),
                (29, 5),
                (31, 3),
            ],
            cents: GAMMA_CENTS,
            start_frequency: single(E0),
        }),
    )
}

pub(super) fn gamma() -> TuningDef {
    TuningDef::new(
        "gamma_notused",
        "Gamma",
        "Like the Alpha scale, Wendy Carlos' Gamma scale is based on a fixed interval size whose multiples approximate justly intonated intervals. Here the step size is 35 cents which is 20 divisions of the perfect fifth. The notes are consequetively arranged starting at 120Hz. This scale is not used in SMR",
        &[
            "Gamma 0; 120Hz-",
            "Gamma 1; 180Hz-",
            "Gamma 2; 270Hz-",
            "Gamma 3; 405Hz-",
            "Gamma 4; 607.5Hz-",
            "Gamma 5; 911.3Hz-",
            "Gamma 6; 1367.0HZ-",
            "Gamma 7; 2050.5Hz-",
            "Gamma 8; 3075.8Hz-",
            "Gamma 9; 4613.8Hz-",
            "Gamma 10; 6920.8Hz-",
        ],
        Generator::Direct(DirectRule::Ladder(EqualStepLadder {
            step: StepSize::Cents(GAMMA_CENTS),
            starts: LadderStarts::Continuous(120.0),
        })),
    )
}
