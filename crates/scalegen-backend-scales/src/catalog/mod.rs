//! The built-in tuning catalog.
//!
//! Entries are returned in emission order. The constant data is kept exactly
//! as the firmware tables were first generated, including a few values that
//! look like typos (see the notes on `indian_penta` and the duplicated
//! display names); changing them would change the emitted tables.

mod carlos;
mod hardware;
mod western;
mod world;

use scalegen_spec::{IntervalSpec, ScaleError, ScaleResult, ScaleTable};

use crate::generator::{Generator, TuningDef};

/// C1 in Hz, the reference pitch shared by several tunings.
pub(crate) const C1: f64 = 32.7031956626;

/// E0 in Hz.
pub(crate) const E0: f64 = 20.60172231;

/// `2^(semitones/12)`.
pub(crate) fn et(semitones: f64) -> f64 {
    2.0_f64.powf(semitones / 12.0)
}

/// Zips per-row ratios, labels, starts and repeat factors into an interval
/// generator. `names` may be empty for unlabelled tunings. Rows beyond the
/// shortest input are dropped.
pub(crate) fn interval_rows(
    ratios: Vec<Vec<f64>>,
    names: &[&[&str]],
    starts: &[f64],
    repeats: &[f64],
) -> Generator {
    let sub_scales = ratios
        .into_iter()
        .zip(starts)
        .zip(repeats)
        .enumerate()
        .map(|(row, ((ratios, &start), &repeat))| {
            let spec = IntervalSpec::new(ratios, start, repeat);
            match names.get(row) {
                Some(labels) => spec.with_names(labels.iter().copied()),
                None => spec,
            }
        })
        .collect();
    Generator::Interval { sub_scales }
}

/// All tunings in emission order.
pub fn catalog() -> Vec<TuningDef> {
    vec![
        hardware::video(),
        world::bohlen_pierce(),
        world::gamelan(),
        hardware::buchla_296(),
        world::shrutis(),
        world::mesopotamian(),
        carlos::alpha_spread_1(),
        carlos::alpha_spread_2(),
        carlos::gamma_spread(),
        carlos::gamma(),
        western::seventeen_tet(),
        world::indian_classical(),
        western::ji_whole_step(),
        western::et_whole_step(),
        western::et_chromatic(),
        western::ji_triads(),
        western::ji_intervals(),
        western::et_triads(),
        western::et_intervals(),
        western::et_major(),
        western::et_minor(),
    ]
}

/// Ids of all catalog entries, in emission order.
pub fn ids() -> Vec<String> {
    catalog().into_iter().map(|def| def.id).collect()
}

/// Looks up one tuning by id.
pub fn find(id: &str) -> ScaleResult<TuningDef> {
    catalog()
        .into_iter()
        .find(|def| def.id == id)
        .ok_or_else(|| ScaleError::UnknownTuning(id.to_string()))
}

/// Returns the requested tunings in the requested order, or the whole
/// catalog when `ids` is `None`.
pub fn select(ids: Option<&[String]>) -> ScaleResult<Vec<TuningDef>> {
    let all = catalog();
    let Some(ids) = ids else {
        return Ok(all);
    };

    ids.iter()
        .map(|id| {
            all.iter()
                .find(|def| &def.id == id)
                .cloned()
                .ok_or_else(|| ScaleError::UnknownTuning(id.clone()))
        })
        .collect()
}

/// Builds every selected table, failing on the first malformed tuning.
pub fn build_tables(ids: Option<&[String]>) -> ScaleResult<Vec<ScaleTable>> {
    let defs = select(ids)?;
    log::debug!("Building {} tuning table(s)", defs.len());
    defs.iter().map(TuningDef::build).collect()
}
