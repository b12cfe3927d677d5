//! Tunings derived from hardware: video frame rates and a fixed-band EQ.

use crate::expand::{DirectRule, HarmonicSeries, SplitRamp};
use crate::generator::{Generator, TuningDef};

/// NTSC field rate in Hz.
const NTSC_HZ: f64 = 59.94;

/// Band centres of the Buchla 296 spectral processor.
const BUCHLA_296_BANDS: [f64; 21] = [
    20.0, 40.0, 60.0, 80.0, 100.0, 150.0, 250.0, 350.0, 500.0, 630.0, 800.0, 1000.0, 1300.0,
    1600.0, 2000.0, 2600.0, 3500.0, 5000.0, 8000.0, 10000.0, 20000.0,
];

pub(super) fn video() -> TuningDef {
    TuningDef::new(
        "video_notused",
        "Video",
        "Scales derived from the NTSC frame rate of 59.94Hz, each note is the next multiple of base frequency. This is not used in SMR",
        &[
            "Video H 1; 59.94hz-",
            "Video H 2; 119.88Hz-",
            "Video H 3; 179.82Hz-",
            "Video H 4; 239.76Hz-",
            "Video H 5; 299.70Hz-",
            "Video H 6; 359.64Hz-",
            "Video H 7; 419.58Hz-",
            "Video H 8; 479.52Hz-",
            "Video H 9; 539.46Hz-",
            "Video H 10; 599.40Hz-",
            "Video V 1; 15729.00Hz-",
        ],
        Generator::Direct(DirectRule::Harmonic(HarmonicSeries {
            base: NTSC_HZ,
            // Horizontal line rates, single and doubled.
            final_row: Some(SplitRamp {
                split: 11,
                low: 15729.0,
                high: 31463.0,
            }),
        })),
    )
}

pub(super) fn buchla_296() -> TuningDef {
    TuningDef::new(
        "buchla296",
        "Buchla 296 EQ",
        "Frequencies from the Buchla 296 EQ module. Each scale is shifted up 50 cents from previous scale.",
        &[
            "20.000Hz", "20.586Hz", "21.189Hz", "21.810Hz", "22.449Hz", "23.107Hz", "23.794Hz",
            "24.481Hz", "25.198Hz", "25.937Hz", "26.697Hz",
        ],
        Generator::Direct(DirectRule::ShiftedList {
            frequencies: BUCHLA_296_BANDS.to_vec(),
            cents_per_sub_scale: 50.0,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_rows() {
        let table = video().build().unwrap();
        assert_eq!(table.frequency(0, 0), Some(59.94));
        assert_eq!(table.frequency(1, 2), Some(59.94 * 3.0 * 2.0));
        assert_eq!(table.frequency(10, 0), Some(15729.0));
        assert_eq!(table.frequency(10, 10), Some(15739.0));
        assert_eq!(table.frequency(10, 11), Some(31474.0));
        assert_eq!(table.note_name(0, 0), Some(""));
    }

    #[test]
    fn test_buchla_shift() {
        let table = buchla_296().build().unwrap();
        assert_eq!(table.frequency(0, 20), Some(20000.0));
        let shifted = table.frequency(1, 0).unwrap();
        assert!((shifted - 20.0 * 2f64.powf(1.0 / 24.0)).abs() < 1e-12);
        // Sub-scale labels track the first band.
        assert!((table.frequency(10, 0).unwrap() - 26.697).abs() < 1e-3);
    }
}
