//! Shared configurations and reference constants.

use scalegen_spec::{CeilingConfig, FilterConfig, GeneratorConfig};

/// C1 in Hz, the start frequency of most interval tunings.
pub const C1: f64 = 32.7031956626;

/// Relative tolerance for derived reference values.
pub const REL_TOLERANCE: f64 = 1e-9;

/// True when `a` and `b` agree to [`REL_TOLERANCE`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= REL_TOLERANCE * a.abs().max(b.abs())
}

/// Default configuration restricted to `ids`.
pub fn with_tunings(ids: &[&str]) -> GeneratorConfig {
    GeneratorConfig {
        tunings: Some(ids.iter().map(|id| id.to_string()).collect()),
        ..GeneratorConfig::default()
    }
}

/// A single 48 kHz single-pole filter with the given ceiling policy.
pub fn single_pole_config(enabled: bool) -> GeneratorConfig {
    GeneratorConfig {
        ceiling: CeilingConfig {
            frequency: 20000.0,
            enabled,
        },
        filters: vec![FilterConfig::SinglePole { sample_rate: 48000 }],
        ..GeneratorConfig::default()
    }
}

/// Configurations exercised by the determinism suite.
pub fn determinism_configs() -> Vec<(&'static str, GeneratorConfig)> {
    vec![
        ("default", GeneratorConfig::default()),
        (
            "no_frequencies",
            GeneratorConfig {
                include_frequencies: false,
                ..GeneratorConfig::default()
            },
        ),
        (
            "reordered",
            with_tunings(&["gamma_notused", "video_notused", "bohlenpierce"]),
        ),
    ]
}
