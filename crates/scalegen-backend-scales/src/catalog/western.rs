//! Equal-tempered and just western scales.

use super::{et, interval_rows};
use crate::expand::{DirectRule, EqualStepLadder, LadderStarts, StepSize};
use crate::generator::{Generator, TuningDef};

/// A0 in Hz.
const A0: f64 = 440.0 / 16.0;

/// Sub-scale labels shared by the whole-step tunings.
const WHOLE_STEP_RANGES: [&str; 11] = [
    "A2-B5", "A5-B8", "B2-C#5", "B5-C#8", "C2-D5", "C5-D8", "D2-E5", "D5-E8", "E2-F#5", "E5-F#8",
    "F4-G7",
];

/// Starting notes of the whole-step tunings, from A2 = 110 Hz.
///
/// The list carries a twelfth entry (F7) that no sub-scale uses.
fn whole_step_starts() -> [f64; 12] {
    let a = 110.0;
    [
        a,
        a * 8.0,
        a * et(2.0),
        a * et(2.0) * 8.0,
        a * et(3.0),
        a * et(3.0) * 8.0,
        a * et(5.0),
        a * et(5.0) * 8.0,
        a * et(7.0),
        a * et(7.0) * 8.0,
        a * et(8.0),
        a * et(8.0) * 8.0,
    ]
}

pub(super) fn seventeen_tet() -> TuningDef {
    TuningDef::new(
        "seventeen",
        "17 TET",
        "17 notes per octave, Equal temperament. Scales are arranged consecutively from 13.75Hz to 20kHz",
        &[
            "13.75Hz; A-1-",
            "27.5Hz; A0-",
            "55Hz; A1-",
            "110Hz; A2-",
            "220Hz; A3-",
            "440Hz; A4-",
            "880Hz; A5-",
            "1760Hz; A6-",
            "3520Hz; A7-",
            "7040Hz; A8-",
            "14080Hz; A9-",
        ],
        Generator::Direct(DirectRule::Ladder(EqualStepLadder {
            step: StepSize::Divisions(17),
            starts: LadderStarts::Repeated {
                start: 13.75,
                factor: 2.0,
            },
        })),
    )
}

pub(super) fn ji_whole_step() -> TuningDef {
    let scale = vec![1.0, 9.0 / 8.0, 5.0 / 4.0, 45.0 / 32.0, 8.0 / 5.0, 9.0 / 5.0];

    TuningDef::new(
        "ji_wholestep",
        "Whole Step (JI)",
        "Whole Step scales, Just Intonation",
        &WHOLE_STEP_RANGES,
        interval_rows(vec![scale; 11], &[], &whole_step_starts(), &[2.0; 11]),
    )
}

pub(super) fn et_whole_step() -> TuningDef {
    let starts = whole_step_starts()[..11].to_vec();

    TuningDef::new(
        "et_wholestep",
        "Whole Step (ET)",
        "Whole Step scales, Equal Temperament",
        &WHOLE_STEP_RANGES,
        Generator::Direct(DirectRule::Ladder(EqualStepLadder {
            step: StepSize::Cents(200.0),
            starts: LadderStarts::Listed(starts),
        })),
    )
}

pub(super) fn et_chromatic() -> TuningDef {
    let base_e = 13.75 * et(7.0) * 4.0;
    let base_a_sharp = 13.75 * et(1.0) * 8.0;
    // E and A# alternate, each climbing an octave every other sub-scale.
    let starts = (0..11)
        .map(|row| {
            let octave = f64::from(1u32 << (row / 2));
            if row % 2 == 0 {
                base_e * octave
            } else {
                base_a_sharp * octave
            }
        })
        .collect();

    TuningDef::new(
        "et_chromatic",
        // Shares its display name with et_wholestep.
        "Whole Step (ET)",
        "Chromatic Scale, Equal Temperament",
        &[
            "E2-C4", "A#2-F#4", "E3-C5", "A#3-F#5", "E4-C6", "A#4-F#6", "E5-C7", "A#5-F#7",
            "E6-C8", "A#6-F#8", "E7-C9",
        ],
        Generator::Direct(DirectRule::Ladder(EqualStepLadder {
            step: StepSize::Divisions(12),
            starts: LadderStarts::Listed(starts),
        })),
    )
}

/// Triad labels, shared by the just and tempered triad tunings.
const TRIAD_NAMES: [&[&str]; 11] = [
    &["Oct", "M2", "P5"],
    &["Oct", "M3", "d5"],
    &["Oct", "m3", "M7"],
    &["Oct", "M3", "P5"],
    &["Oct", "m3", "d5"],
    &["Oct", "P4", "P5"],
    &["Oct", "M3", "M6"],
    &["Oct", "m3", "m6"],
    &["Oct", "M3", "m6"],
    &["Oct", "m3", "m7"],
    &["Oct", "P5", "M7"],
];

/// Single-interval labels, shared by the just and tempered interval tunings.
const INTERVAL_NAMES: [&[&str]; 11] = [
    &["Oct", "m2"],
    &["Oct", "M2"],
    &["Oct", "m3"],
    &["Oct", "M3"],
    &["Oct", "P4"],
    &["Oct", "d5"],
    &["Oct", "P5"],
    &["Oct", "m6"],
    &["Oct", "M6"],
    &["Oct", "m7"],
    &["Oct", "M7"],
];

const INTERVAL_RANGES: [&str; 11] = [
    "Octave + m2; A0-A8",
    "Octave + M2; A0-A8",
    "Octave + m3; A0-A8",
    "Octave + M2; A0-A8",
    "Octave + P4; A0-A8",
    "Octave + d5; A0-A8",
    "Octave + P5; A0-A8",
    "Octave + m6; A0-A8",
    "Octave + M6; A0-A8",
    "Octave + m7; A0-A8",
    "Octave + M7; A0-A8",
];

pub(super) fn ji_triads() -> TuningDef {
    // G1, a just fifth above C1 = 32.7 Hz.
    let start = 32.7 * (3.0 / 2.0);
    let ratios = [
        [9.0 / 8.0, 3.0 / 2.0],
        [5.0 / 4.0, 10.0 / 7.0],
        [6.0 / 5.0, 15.0 / 8.0],
        [5.0 / 4.0, 3.0 / 2.0],
        [6.0 / 5.0, 10.0 / 7.0],
        [4.0 / 3.0, 3.0 / 2.0],
        [5.0 / 4.0, 5.0 / 3.0],
        [6.0 / 5.0, 8.0 / 5.0],
        [5.0 / 4.0, 8.0 / 5.0],
        [6.0 / 5.0, 16.0 / 9.0],
        [3.0 / 2.0, 15.0 / 8.0],
    ]
    .iter()
    .map(|&[third, fifth]| vec![1.0, third, fifth])
    .collect();

    TuningDef::new(
        "ji_triads",
        "Triads (JI)",
        "Western triads in G, Just Intonation. G1 is defined as a perfect fifth above C1=32.7Hz",
        &[
            "Unison, M2, P5; G1-D8",
            "Unison, M3, d5; G1-C#8",
            "Unison, m3, M7; G1-D8",
            "Unison, M3, d5; G1-D8",
            "Unison, P4, P5; G1-D8",
            "Unison, M3, M6; G1-E8",
            "Unison, m3, m6; G1-D#8",
            "Unison, m3, M6; G1-E8",
            "Unison, m3, m7; G1-F8",
            "Unison, m3, m7; G1-F8",
            "Unison, P5, M7; G1-F#8",
        ],
        interval_rows(ratios, &TRIAD_NAMES, &[start; 11], &[2.0; 11]),
    )
}

pub(super) fn ji_intervals() -> TuningDef {
    // A0, a just major sixth above C0 = 16.35 Hz.
    let start = 16.35 * (5.0 / 3.0);
    let ratios = [
        16.0 / 15.0,
        9.0 / 8.0,
        6.0 / 5.0,
        5.0 / 4.0,
        4.0 / 3.0,
        10.0 / 7.0,
        3.0 / 2.0,
        8.0 / 5.0,
        5.0 / 3.0,
        16.0 / 9.0,
        15.0 / 8.0,
    ]
    .iter()
    .map(|&interval| vec![1.0, interval])
    .collect();

    TuningDef::new(
        "ji_intervals",
        "Intervals (JI)",
        "Single western intervals in A, Just Intonation. A0 is defined as a major sixth above C0=16.35Hz",
        &INTERVAL_RANGES,
        interval_rows(ratios, &INTERVAL_NAMES, &[start; 11], &[2.0; 11]),
    )
}

/// `[1.0, et(s) for s in semitones]`.
fn chord(semitones: &[f64]) -> Vec<f64> {
    std::iter::once(1.0)
        .chain(semitones.iter().map(|&s| et(s)))
        .collect()
}

pub(super) fn et_triads() -> TuningDef {
    let start = A0 * et(10.0);
    let ratios = vec![
        chord(&[2.0, 7.0]),
        chord(&[4.0, 6.0]),
        chord(&[3.0, 11.0]),
        chord(&[4.0, 7.0]),
        chord(&[3.0, 6.0]),
        chord(&[5.0, 7.0]),
        chord(&[4.0, 9.0]),
        chord(&[3.0, 8.0]),
        chord(&[4.0, 8.0]),
        chord(&[3.0, 10.0]),
        chord(&[7.0, 11.0]),
    ];

    TuningDef::new(
        "et_triads",
        "Triads (ET)",
        "Western triads in G, Equal Temperament",
        &[
            "Unison, M2, P5; G1-D8",
            "Unison, M3, d5; G1-C#8",
            "Unison, m3, P5; G1-D8",
            "Unison, M3, P5; G1-D8",
            "Unison, P4, P5; G1-D8",
            "Unison, M3, M6; G1-E8",
            "Unison, m3, m6; G1-D#8",
            "Unison, m3, M6; G1-E8",
            "Unison, m3, m7; G1-F8",
            "Unison, P5, m7; G1-F8",
            "Unison, P5, M7; G1-F#8",
        ],
        interval_rows(ratios, &TRIAD_NAMES, &[start; 11], &[2.0; 11]),
    )
}

pub(super) fn et_intervals() -> TuningDef {
    let ratios = (1..=11).map(|s| chord(&[f64::from(s)])).collect();

    TuningDef::new(
        "et_intervals",
        "Intervals (ET)",
        "Single western intervals in A, Equal Temperament",
        &INTERVAL_RANGES,
        interval_rows(ratios, &INTERVAL_NAMES, &[A0; 11], &[2.0; 11]),
    )
}

pub(super) fn et_major() -> TuningDef {
    let c1 = A0 * et(3.0);
    let b3 = A0 * 8.0 * et(2.0);
    let a6 = A0 * 64.0;

    let ratios = vec![
        chord(&[4.0, 7.0]),
        chord(&[4.0, 7.0, 9.0]),
        chord(&[4.0, 7.0, 11.0]),
        chord(&[4.0, 8.0]),
        chord(&[4.0, 8.0, 11.0]),
        chord(&[4.0, 7.0, 10.0]),
        chord(&[2.0, 4.0, 7.0, 9.0]),
        chord(&[2.0, 4.0, 7.0, 9.0]),
        chord(&[2.0, 4.0, 5.0, 7.0, 9.0, 11.0]),
        // Rotated so the run continues from the previous row.
        chord(&[1.0, 3.0, 5.0, 6.0, 8.0, 10.0]),
        chord(&[2.0, 3.0, 5.0, 7.0, 8.0, 10.0]),
    ];
    let names: [&[&str]; 11] = [
        &["Oct", "M3", "P5"],
        &["Oct", "M3", "P5", "M6"],
        &["Oct", "M3", "P5", "M7"],
        &["Oct", "M3", "m6"],
        &["Oct", "M3", "m5", "M7"],
        &["Oct", "M3", "P5", "M7"],
        &["Oct", "M2", "M3", "P5", "M6"],
        &["Oct", "M2", "M3", "P5", "M6"],
        &["Oct", "M2", "M3", "P4", "P5", "M6", "M7"],
        &["M7", "Oct", "M2", "M3", "P4", "P5", "M6"],
        &["M6", "M7", "Oct", "M2", "M3", "P4", "P5"],
    ];
    let starts = [
        c1,
        c1 * 2.0,
        c1 * 2.0,
        c1,
        c1 * 2.0,
        c1 * 2.0,
        c1,
        c1 * 16.0,
        c1,
        b3,
        a6,
    ];

    TuningDef::new(
        "et_major",
        "Major (ET)",
        "Scales from C Major",
        &[
            "Major chords; C1-",
            "Major 6th chords; C2-",
            "Major 7th chords; C2-",
            "Augmented chords; C1-",
            "Augmented 7th chords; C2-",
            "Dominant 7th chords; C2-",
            "Major Pentatonic; C1-",
            "Major Pentatonic; C5-",
            "Major scale; C1-",
            "Major scale; C3-",
            "Major scale; C6-",
        ],
        interval_rows(ratios, &names, &starts, &[2.0; 11]),
    )
}

pub(super) fn et_minor() -> TuningDef {
    let c1 = A0 * et(3.0);
    let b3 = A0 * 8.0 * et(2.0);
    let f4 = A0 * 8.0 * et(8.0);
    let g_sharp_6 = A0 * 32.0 * et(11.0);

    let ratios = vec![
        chord(&[3.0, 7.0]),
        chord(&[3.0, 7.0, 8.0]),
        chord(&[3.0, 7.0, 10.0]),
        chord(&[3.0, 4.0, 10.0]),
        chord(&[3.0, 5.0, 7.0, 10.0]),
        chord(&[3.0, 5.0, 7.0, 10.0]),
        chord(&[3.0, 5.0, 6.0, 7.0, 10.0]),
        chord(&[1.0, 2.0, 5.0, 7.0, 10.0]),
        chord(&[2.0, 3.0, 5.0, 7.0, 8.0, 11.0]),
        chord(&[1.0, 3.0, 4.0, 6.0, 8.0, 9.0]),
        chord(&[3.0, 4.0, 6.0, 7.0, 9.0, 11.0]),
    ];
    let names: [&[&str]; 11] = [
        &["Oct", "m3", "P5"],
        &["Oct", "m3", "P5", "m6"],
        &["Oct", "m3", "P5", "m7"],
        &["Oct", "m3", "M4", "m7"],
        &["Oct", "m3", "P4", "P4", "m7"],
        &["Oct", "m3", "P4", "P4", "m7"],
        &["Oct", "M2", "M3", "P5", "d5", "M6"],
        &["M3", "P5", "d5", "M6", "Oct", "M2"],
        &["Oct", "M2", "m3", "P4", "P5", "m6", "M7"],
        &["M7", "Oct", "M2", "m3", "P4", "P5", "m6"],
        &["m6", "M7", "Oct", "M2", "m3", "P4", "P5"],
    ];
    let starts = [
        c1,
        c1 * 2.0,
        c1 * 2.0,
        c1 * 2.0,
        c1,
        c1 * 16.0,
        c1,
        f4,
        c1,
        b3,
        g_sharp_6,
    ];

    TuningDef::new(
        "et_minor",
        "Minor (ET)",
        "Scales from C Major",
        &[
            "Minor chords",
            "Minor 6th chords",
            "Minor 7th chords",
            "Half Diminished 7th chords",
            "Minor Pentatonic; C1-",
            "Minor Pentatonic; C5-",
            "Blues scale; C1-",
            "Blues scale; C4-",
            "Harmonic Minor; C1-",
            "Harmonic Minor; C3-",
            "Harmonic Minor; C6-",
        ],
        interval_rows(ratios, &names, &starts, &[2.0; 11]),
    )
}
