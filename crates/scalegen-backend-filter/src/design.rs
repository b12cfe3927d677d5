//! Filter design behind a textual request descriptor.
//!
//! A request has the form `<family>/<Q>/<frequency>`, for example
//! `BpRe/800/440`. The frequency is written with `%g`, i.e. six significant
//! digits, so the designed filter sits on the rounded frequency while the
//! caller may evaluate its response at the exact one.
//!
//! The [`FilterDesigner`] trait is the only seam between the coefficient
//! pipeline and the numerics; tests substitute recording designers.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use scalegen_spec::format_general;

use crate::error::{FilterError, FilterResult};

/// Family token of the bandpass resonator.
pub const RESONATOR_FAMILY: &str = "BpRe";

/// Parsed `<family>/<Q>/<frequency>` request.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignRequest {
    /// Family token, e.g. `BpRe`.
    pub family: String,
    /// Resonator Q.
    pub q: f64,
    /// Centre frequency in Hz.
    pub frequency: f64,
}

impl DesignRequest {
    /// A bandpass resonator request.
    pub fn resonator(q: f64, frequency: f64) -> Self {
        Self {
            family: RESONATOR_FAMILY.to_string(),
            q,
            frequency,
        }
    }

    /// Parses a request descriptor.
    pub fn parse(request: &str) -> FilterResult<Self> {
        let mut parts = request.split('/');
        let (Some(family), Some(q), Some(frequency), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(FilterError::malformed(
                request,
                "expected <family>/<Q>/<frequency>",
            ));
        };

        if family.is_empty() {
            return Err(FilterError::malformed(request, "missing family"));
        }
        let q = q
            .trim()
            .parse::<f64>()
            .map_err(|_| FilterError::malformed(request, format!("Q '{}' is not a number", q)))?;
        let frequency = frequency.trim().parse::<f64>().map_err(|_| {
            FilterError::malformed(
                request,
                format!("frequency '{}' is not a number", frequency),
            )
        })?;

        Ok(Self {
            family: family.to_string(),
            q,
            frequency,
        })
    }
}

impl fmt::Display for DesignRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Integral Q prints as a plain integer, never in exponent form.
        let q = if self.q.is_finite() && self.q.fract() == 0.0 {
            format!("{}", self.q)
        } else {
            format_general(self.q, 6)
        };
        write!(f, "{}/{}/{}", self.family, q, format_general(self.frequency, 6))
    }
}

impl FromStr for DesignRequest {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A designed IIR stage followed by its FIR stage.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignedFilter {
    feedback: Vec<f64>,
    feedforward: Vec<f64>,
}

impl DesignedFilter {
    /// Creates a filter from its feedback polynomial `A(z)` (leading 1) and
    /// feed-forward polynomial `B(z)`.
    pub fn new(feedback: Vec<f64>, feedforward: Vec<f64>) -> Self {
        Self {
            feedback,
            feedforward,
        }
    }

    /// Feedback coefficients `[1, a1, a2, ...]`.
    pub fn coefficients(&self) -> &[f64] {
        &self.feedback
    }

    /// Feed-forward coefficients.
    pub fn feedforward(&self) -> &[f64] {
        &self.feedforward
    }

    /// Magnitude response `|B(e^jω)| / |A(e^jω)|` at `fraction` of the
    /// sample rate.
    pub fn response(&self, fraction: f64) -> f64 {
        let omega = 2.0 * PI * fraction;
        polynomial_magnitude(&self.feedforward, omega) / polynomial_magnitude(&self.feedback, omega)
    }
}

/// `|Σ c_k e^(-jωk)|`.
fn polynomial_magnitude(coefficients: &[f64], omega: f64) -> f64 {
    let (re, im) = coefficients
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(re, im), (k, &c)| {
            let phase = omega * k as f64;
            (re + c * phase.cos(), im - c * phase.sin())
        });
    re.hypot(im)
}

/// Designs a filter from a request descriptor at a sample rate.
pub trait FilterDesigner {
    /// Designs the filter described by `request`.
    fn design(&self, request: &str, sample_rate: u32) -> FilterResult<DesignedFilter>;
}

/// Two-pole bandpass resonator with zeros at DC and Nyquist.
///
/// Poles sit at angle `θ = 2πf/fs` and radius `r = exp(-θ / 2Q)`, giving
/// `A(z) = 1 - 2r·cos θ·z⁻¹ + r²·z⁻²` and `B(z) = 1 - z⁻²`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResonatorDesigner;

impl FilterDesigner for ResonatorDesigner {
    fn design(&self, request: &str, sample_rate: u32) -> FilterResult<DesignedFilter> {
        let parsed = DesignRequest::parse(request)?;
        if parsed.family != RESONATOR_FAMILY {
            return Err(FilterError::UnknownFamily {
                request: request.to_string(),
                family: parsed.family,
            });
        }
        if sample_rate == 0 {
            return Err(FilterError::InvalidSampleRate { rate: sample_rate });
        }
        if !(parsed.q.is_finite() && parsed.q > 0.0) {
            return Err(FilterError::InvalidQ { q: parsed.q });
        }

        let rate = f64::from(sample_rate);
        let nyquist = rate / 2.0;
        if !(parsed.frequency > 0.0 && parsed.frequency < nyquist) {
            return Err(FilterError::FrequencyOutOfRange {
                frequency: parsed.frequency,
                nyquist,
            });
        }

        let theta = 2.0 * PI * parsed.frequency / rate;
        let radius = (-theta / (2.0 * parsed.q)).exp();

        Ok(DesignedFilter::new(
            vec![1.0, -2.0 * radius * theta.cos(), radius * radius],
            vec![1.0, 0.0, -1.0],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let request = DesignRequest::parse("BpRe/800/440").unwrap();
        assert_eq!(request, DesignRequest::resonator(800.0, 440.0));
        assert_eq!(request.to_string(), "BpRe/800/440");
    }

    #[test]
    fn test_display_rounds_frequency_to_six_digits() {
        let request = DesignRequest::resonator(2.0, 32.7031956626);
        assert_eq!(request.to_string(), "BpRe/2/32.7032");
        let request = DesignRequest::resonator(800.0, 15729.0);
        assert_eq!(request.to_string(), "BpRe/800/15729");
    }

    #[test]
    fn test_display_keeps_large_q_integral() {
        let request = DesignRequest::resonator(f64::from(1_000_000_u32), 440.0);
        assert_eq!(request.to_string(), "BpRe/1000000/440");
        let request = DesignRequest::resonator(f64::from(u32::MAX), 440.0);
        assert_eq!(request.to_string(), "BpRe/4294967295/440");
        let request = DesignRequest::resonator(2.5, 440.0);
        assert_eq!(request.to_string(), "BpRe/2.5/440");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "BpRe", "BpRe/2", "BpRe/2/440/1", "BpRe/x/440", "BpRe/2/fast", "/2/440"] {
            let err = DesignRequest::parse(bad).unwrap_err();
            assert!(
                matches!(err, FilterError::MalformedRequest { .. }),
                "{:?} gave {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_unknown_family() {
        let err = ResonatorDesigner.design("LpBu/2/440", 48000).unwrap_err();
        assert!(matches!(err, FilterError::UnknownFamily { family, .. } if family == "LpBu"));
    }

    #[test]
    fn test_rejects_bad_q() {
        assert!(matches!(
            ResonatorDesigner.design("BpRe/0/440", 48000),
            Err(FilterError::InvalidQ { .. })
        ));
        assert!(matches!(
            ResonatorDesigner.design("BpRe/-3/440", 48000),
            Err(FilterError::InvalidQ { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_band_frequency() {
        assert!(matches!(
            ResonatorDesigner.design("BpRe/2/24000", 48000),
            Err(FilterError::FrequencyOutOfRange { .. })
        ));
        assert!(matches!(
            ResonatorDesigner.design("BpRe/2/0", 48000),
            Err(FilterError::FrequencyOutOfRange { .. })
        ));
        assert!(ResonatorDesigner.design("BpRe/2/23999", 48000).is_ok());
    }

    #[test]
    fn test_rejects_zero_sample_rate() {
        assert!(matches!(
            ResonatorDesigner.design("BpRe/2/440", 0),
            Err(FilterError::InvalidSampleRate { rate: 0 })
        ));
    }

    #[test]
    fn test_resonator_poles() {
        let filter = ResonatorDesigner.design("BpRe/800/1000", 48000).unwrap();
        let c = filter.coefficients();
        assert_eq!(c.len(), 3);
        assert_eq!(c[0], 1.0);
        let theta = 2.0 * PI * 1000.0 / 48000.0;
        let r = (-theta / 1600.0).exp();
        assert!((c[1] + 2.0 * r * theta.cos()).abs() < 1e-15);
        assert!((c[2] - r * r).abs() < 1e-15);
        // Poles inside the unit circle.
        assert!(c[2] < 1.0);
        assert_eq!(filter.feedforward(), &[1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_response_peaks_near_centre() {
        let filter = ResonatorDesigner.design("BpRe/50/1000", 48000).unwrap();
        let centre = filter.response(1000.0 / 48000.0);
        assert!(centre > filter.response(800.0 / 48000.0));
        assert!(centre > filter.response(1200.0 / 48000.0));
        assert!(filter.response(0.0) < 1e-12);
        assert!(filter.response(0.5) < 1e-9);
    }

    #[test]
    fn test_response_of_identity() {
        let filter = DesignedFilter::new(vec![1.0], vec![1.0]);
        assert!((filter.response(0.123) - 1.0).abs() < 1e-15);
    }
}
