//! Non-western and historical tunings.

use super::{interval_rows, C1, E0};
use crate::generator::TuningDef;

/// Just Bohlen-Pierce steps within one tritave, with their letter names.
const BP_STEPS: [(f64, &str); 14] = [
    (1.0, "C"),
    (27.0 / 25.0, "Db"),
    (25.0 / 21.0, "D"),
    (9.0 / 7.0, "E"),
    (7.0 / 5.0, "F"),
    (75.0 / 49.0, "Gb"),
    (5.0 / 3.0, "G"),
    (9.0 / 5.0, "H"),
    (49.0 / 25.0, "Jb"),
    (15.0 / 7.0, "J"),
    (7.0 / 3.0, "A"),
    (63.0 / 25.0, "Bb"),
    (25.0 / 9.0, "B"),
    (3.0, "C"),
];

/// Step indices of each Bohlen-Pierce sub-scale.
const BP_CHORDS: [[usize; 4]; 11] = [
    [0, 3, 7, 10],
    [0, 3, 7, 11],
    [0, 4, 6, 10],
    [0, 4, 7, 9],
    [0, 4, 7, 10],
    [0, 4, 7, 11],
    [0, 6, 7, 10],
    [0, 6, 7, 11],
    [0, 6, 10, 11],
    [0, 6, 8, 12],
    [0, 5, 9, 12],
];

pub(super) fn bohlen_pierce() -> TuningDef {
    let ratios = BP_CHORDS
        .iter()
        .map(|chord| chord.iter().map(|&i| BP_STEPS[i].0).collect())
        .collect();
    let names: Vec<Vec<&str>> = BP_CHORDS
        .iter()
        .map(|chord| chord.iter().map(|&i| BP_STEPS[i].1).collect())
        .collect();
    let names: Vec<&[&str]> = names.iter().map(Vec::as_slice).collect();

    TuningDef::new(
        "bohlenpierce",
        "Bohlen Pierce",
        "The Bohlen Pierce scale is derived from 13 divisions of a 'tritave' - a frequency ratio of 3:1, compared to the octave ratio of 2:1. Here the scale consists of various intervals taken from an justly intonation scale.",
        &[
            "C, E, H, A; C1-",
            "C, E, H, Bb; C1-",
            "C, F, G, A; C1-",
            "C, F, H, J; C1-",
            "C, F, H, A; C1-",
            "C, F, H, Bb; C1-",
            "C, G, H, A; C1-",
            "C, G, H, Bb; C1-",
            "C, G, A, Bb; C1-",
            "C, G, Jb, B; C1-",
            "C, Gb, J, B; C1-",
        ],
        interval_rows(ratios, &names, &[C1; 11], &[3.0; 11]),
    )
}

/// `[2^(k/n) for k in steps]`.
fn edo(n: f64, steps: &[f64]) -> Vec<f64> {
    steps.iter().map(|&k| 2.0_f64.powf(k / n)).collect()
}

pub(super) fn gamelan() -> TuningDef {
    let slendro = edo(5.0, &[0.0, 1.0, 2.0, 3.0, 4.0]);
    let bali = edo(7.0, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let pelog_1 = edo(7.0, &[0.0, 1.0, 2.0, 4.0, 5.0]);
    let pelog_2 = edo(7.0, &[0.0, 1.0, 3.0, 4.0, 6.0]);
    let pelog_3 = edo(7.0, &[0.0, 2.0, 3.0, 4.0, 5.0]);

    let ratios = vec![
        slendro.clone(),
        bali.clone(),
        pelog_1.clone(),
        pelog_2.clone(),
        pelog_3.clone(),
        slendro,
        bali.clone(),
        bali,
        pelog_1,
        pelog_2,
        pelog_3,
    ];

    // Small offsets detune otherwise identical sub-scales from each other.
    let starts = [
        C1,
        C1 + 2.0,
        C1 + 5.0,
        C1 + 7.0,
        C1 + 9.0,
        C1 * 16.0,
        (C1 + 3.0) * 8.0,
        (C1 + 4.0) * 16.0,
        (C1 * 16.0) + 6.0,
        (C1 * 16.0) + 8.0,
        (C1 * 16.0) + 10.0,
    ];

    TuningDef::new(
        "gamelan",
        "Gamelan Pelog",
        "Gamelan tunings in C.",
        &[
            "Java (5 notes) low, 5-TET",
            "Bali (7 notes) low, 7-TET",
            "Pelog, var1, low, pathet nem or lima? 7-TET",
            "Pelog, var2, low, pathet nem or lima? 7-TET",
            "Pelog, var3, low, pathet barang? 7-TET",
            "Java (5 note) mid, 5-TET",
            "Bali (7 note) mid, 7-TET",
            "Bali (7 note) high, 7-TET",
            "Pelog, var1, high, pathet nem or lima? 7-TET",
            "Pelog, var2, high, pathet nem or lima? 7-TET",
            "Pelog, var3, high, pathet barang? 7-TET",
        ],
        interval_rows(ratios, &[], &starts, &[2.0; 11]),
    )
}

/// 21 of the 22 shrutis; the lower Ri (256:243) does not fit.
const SHRUTIS: [(f64, &str); 21] = [
    (1.0, "Sa"),
    (16.0 / 15.0, "ri"),
    (10.0 / 9.0, "Ri"),
    (9.0 / 8.0, "Ri"),
    (32.0 / 27.0, "ga"),
    (6.0 / 5.0, "ga"),
    (5.0 / 4.0, "Ga"),
    (81.0 / 64.0, "Ga"),
    (4.0 / 3.0, "ma"),
    (27.0 / 20.0, "ma"),
    (45.0 / 32.0, "Ma"),
    (729.0 / 512.0, "Ma"),
    (3.0 / 2.0, "Pa"),
    (128.0 / 81.0, "dha"),
    (8.0 / 5.0, "dha"),
    (5.0 / 3.0, "Dha"),
    (27.0 / 16.0, "Dha"),
    (16.0 / 9.0, "ni"),
    (9.0 / 5.0, "ni"),
    (15.0 / 8.0, "Ni"),
    (243.0 / 128.0, "Ni"),
];

/// C0 in Hz.
const C0: f64 = 16.3515978313;

pub(super) fn shrutis() -> TuningDef {
    let ratios: Vec<f64> = SHRUTIS.iter().map(|&(ratio, _)| ratio).collect();
    let names: Vec<&str> = SHRUTIS.iter().map(|&(_, name)| name).collect();
    let starts: Vec<f64> = (0..11).map(|octave| C0 * 2.0_f64.powi(octave)).collect();

    TuningDef::new(
        "indian_shrutis",
        "Indian Shrutis",
        "In Indian classical music, a shruti is smallest interval or pitch that the human ear can detect and a singer or musical instrument can produce. These are 22 pitches in an octave, the most consonant of which form the 7 notes of the basic scale. Since SMR allows only 21 notes in a scale, the first note of Ri (256:243) is omitted.",
        &[
            "Shrutis; C0-",
            "Shrutis; C1-",
            "Shrutis; C2-",
            "Shrutis; C3-",
            "Shrutis; C4-",
            "Shrutis; C5-",
            "Shrutis; C6-",
            "Shrutis; C7-",
            "Shrutis; C8-",
            "Shrutis; C9-",
            "Shrutis; C10-",
        ],
        interval_rows(vec![ratios; 11], &[names.as_slice(); 11], &starts, &[2.0; 11]),
    )
}

pub(super) fn mesopotamian() -> TuningDef {
    // Pythagorean ratios. There is no augmented fourth (729:512).
    const I: f64 = 1.0;
    const I0: f64 = 256.0 / 243.0;
    const I1: f64 = 9.0 / 8.0;
    const I18: f64 = 32.0 / 27.0;
    const I2: f64 = 81.0 / 64.0;
    const I3: f64 = 4.0 / 3.0;
    const I4: f64 = 1024.0 / 729.0;
    const I5: f64 = 3.0 / 2.0;
    const I58: f64 = 128.0 / 81.0;
    const I6: f64 = 27.0 / 16.0;
    const I7: f64 = 16.0 / 9.0;
    const I8: f64 = 243.0 / 128.0;

    let ishartum = vec![I, I0, I18, I3, I5, I58, I7];
    let embulum = vec![I, I1, I18, I3, I5, I6, I7];
    let nid_murub = vec![I, I1, I2, I3, I5, I6, I8];
    let qablitum = vec![I, I0, I18, I4, I5, I58, I7];
    let kitmun = vec![I, I1, I2, I3, I5, I6, I7];
    let mitum = vec![I, I1, I2, I4, I5, I58, I7];

    let ratios = vec![
        ishartum.clone(),
        ishartum,
        embulum.clone(),
        embulum,
        nid_murub.clone(),
        nid_murub,
        qablitum.clone(),
        qablitum,
        kitmun.clone(),
        kitmun,
        mitum,
    ];

    const A1: f64 = 55.0;
    const A4: f64 = A1 * 8.0;
    let starts = [A1, A4, A1, A4, A1, A4, A1, A4, A1, A4, A1];

    TuningDef::new(
        "mesopotamian",
        "Mesopotamian",
        "The Mesopotamian tuning systems have reconstructed from cuneiform tablet from the Sumerian civilisation describing a Babylonian harp. The original work was made in 1960-70s by Duchesne-Guillemin, Kilmer, Gurney and Wulstan deriving a heptatonic ascending scale. Subsequent work by Vitale and Dumbrill indicated that a descending scale was used. The reader is referred to 'NEW LIGHT ON THE BABYLONIAN TONAL SYSTEM, Leon Crickmore for an up-to-date summary of the discussion. Here the module used a Pythagorian tuning and step size suggested by West in THE BABYLONIAN MUSICAL NOTATION AND THE HURRIAN MELODIC TEXTS, p164. The frequencies have been recalculated using more accurate frequency ratios.",
        &[
            "Ishartum; A1-",
            "Ishartum; A4-",
            "Embulum; A1-",
            "Embulum; A4-",
            "Nid Murub; A1-",
            "Nid Murub; A4-",
            "Quablitum; A1-",
            "Quablitum; A4-",
            "Kitmun; A1-",
            "Kitmun; A4-",
            "Mitum; A1-",
        ],
        interval_rows(ratios, &[], &starts, &[2.0; 11]),
    )
}

pub(super) fn indian_classical() -> TuningDef {
    let svara = vec![
        1.0,
        9.0 / 8.0,
        5.0 / 4.0,
        4.0 / 3.0,
        3.0 / 2.0,
        5.0 / 3.0,
        15.0 / 8.0,
    ];
    // Dha reads 3.0 * 16.0 rather than 5/3 * 16.0 in the firmware tables.
    let five_octaves = vec![
        1.0,
        9.0 / 8.0,
        2.0,
        (5.0 / 4.0) * 2.0,
        4.0,
        (4.0 / 3.0) * 4.0,
        8.0,
        (3.0 / 2.0) * 8.0,
        16.0,
        3.0 * 16.0,
        32.0,
        (15.0 / 8.0) * 32.0,
    ];

    let ratios = vec![
        svara.clone(),
        svara.clone(),
        svara.clone(),
        svara.clone(),
        svara.clone(),
        svara.clone(),
        svara,
        vec![1.0, 9.0 / 8.0, 4.0 / 3.0, 15.0 / 8.0],
        vec![
            1.0,
            5.0 / 4.0,
            5.0 / 3.0,
            15.0 / 8.0,
            (9.0 / 8.0) * 2.0,
            (4.0 / 3.0) * 2.0,
            (3.0 / 2.0) * 2.0,
        ],
        five_octaves.clone(),
        five_octaves,
    ];

    let svara_names: &[&str] = &["Sa", "Ri", "Ga", "ma", "Pa", "Dha", "Ni"];
    let five_octave_names: &[&str] = &[
        "Sa", "Ri", "Sa^2", "Ga^2", "Sa^3", "ma^3", "Sa^4", "Pa^4", "Sa^5", "Dha^5", "Sa^6", "Ni^6",
    ];
    let names: [&[&str]; 11] = [
        svara_names,
        svara_names,
        svara_names,
        svara_names,
        svara_names,
        svara_names,
        svara_names,
        &["Sa", "Ri", "ma", "Ni"],
        &["Sa", "Ga", "Dha", "Ni", "Ri^2", "ma^2", "Pa^2"],
        five_octave_names,
        five_octave_names,
    ];

    let starts = [
        E0,
        E0 * 2.0,
        E0 * 4.0,
        E0 * 8.0,
        E0 * 16.0,
        E0 * 32.0,
        E0 * 64.0,
        120.0,
        120.0,
        20.0,
        20.0,
    ];
    let repeats = [2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 4.0, 64.0, 64.0];

    TuningDef::new(
        "indian_penta",
        "Indian Classical",
        "The Indian Classical scale contains 12 notes, seven of which form the basic notes - Svara - Sa, Ri/Re, Ga, Ma, Pa, Dha, Ni. Unlike the western tradition, the scale uses just intonation and lacks a reference concert pitch, so these notes are similar although not identical in concept to solfege; the pitch of Sa is used as a reference for the other notes in performance. All notes have several acceptable frequency ratios except Sa and Pa (which are always 1:1 and 3:2). The full set of 22 allowed pitches are the Shrutis. The ratios used in SMR co-incide with 'Ptolemy's intense diatonic scale' in increasing octaves of E. Scales 8 to 11 are selections from  Scale 11 is a repeat of Scale 10. SMR describes this scale as pentatonic, which it is not.",
        &[
            "Svara; E0",
            "Svara; E1",
            "Svara; E2",
            "Svara; E3",
            "Svara; E4",
            "Svara; E5",
            "Svara; E6",
            "Sa, Ri, ma, Dha; 120Hz",
            "Svara over 2 octaves; 120Hz",
            "Svara over 5 octaves; 20Hz",
            "Svara over 5 octaves; 20Hz",
        ],
        interval_rows(ratios, &names, &starts, &repeats),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bohlen_pierce_tritave() {
        let table = bohlen_pierce().build().unwrap();
        assert_eq!(table.frequency(0, 0), Some(C1));
        assert_eq!(table.frequency(0, 1), Some(9.0 / 7.0 * C1));
        assert_eq!(table.frequency(0, 4), Some(C1 * 3.0));
        assert_eq!(table.note_name(0, 2), Some("H"));
        assert_eq!(table.note_name(10, 1), Some("Gb"));
        assert_eq!(table.note_name(10, 5), Some("Gb"));
    }

    #[test]
    fn test_gamelan_is_unlabelled() {
        let table = gamelan().build().unwrap();
        assert!(table.note_names.iter().all(String::is_empty));
        assert_eq!(table.frequency(1, 0), Some(C1 + 2.0));
        assert_eq!(table.frequency(0, 5), Some(C1 * 2.0));
    }

    #[test]
    fn test_shrutis_octaves() {
        let table = shrutis().build().unwrap();
        assert_eq!(table.frequency(0, 0), Some(C0));
        assert_eq!(table.frequency(3, 0), Some(C0 * 8.0));
        assert_eq!(table.note_name(5, 20), Some("Ni"));
        let row = table.frequencies.row(2);
        assert!(row.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_mesopotamian_starts() {
        let table = mesopotamian().build().unwrap();
        assert_eq!(table.frequency(0, 0), Some(55.0));
        assert_eq!(table.frequency(1, 0), Some(440.0));
        assert_eq!(table.frequency(10, 7), Some(110.0));
    }

    #[test]
    fn test_indian_classical_repeat_factors() {
        let table = indian_classical().build().unwrap();
        // Four-note row at 120 Hz, octave repeat.
        assert_eq!(table.frequency(7, 4), Some(240.0));
        // Seven-note row, repeat by two octaves.
        assert_eq!(table.frequency(8, 7), Some(480.0));
        assert_eq!(table.note_name(8, 7), Some("Sa"));
        // The preserved Dha value.
        assert_eq!(table.frequency(9, 9), Some(3.0 * 16.0 * 20.0));
        assert_eq!(table.frequency(9, 12), Some(20.0 * 64.0));
    }
}
