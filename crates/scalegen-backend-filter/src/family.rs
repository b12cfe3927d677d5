//! Coefficient families: how one note frequency becomes one coefficient row.

use std::f64::consts::PI;

use scalegen_spec::FilterConfig;

use crate::design::{DesignRequest, FilterDesigner, ResonatorDesigner};
use crate::error::{FilterError, FilterResult};

/// Coefficients for one note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoefficientRow {
    /// Single-pole filters: one value.
    Single(f64),
    /// Resonant biquads: `[gain, pole2, pole1]`.
    Triple([f64; 3]),
}

impl CoefficientRow {
    /// The values in emission order.
    pub fn values(&self) -> &[f64] {
        match self {
            CoefficientRow::Single(value) => std::slice::from_ref(value),
            CoefficientRow::Triple(values) => values,
        }
    }

    /// Number of values (1 or 3).
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A stateless frequency-to-coefficients mapping.
pub trait CoefficientFamily {
    /// Identifier-safe configuration name, unique within a bank.
    fn name(&self) -> String;

    /// Values per row.
    fn row_len(&self) -> usize;

    /// Computes the row for `frequency`.
    fn calculate(&self, frequency: f64) -> FilterResult<CoefficientRow>;
}

/// `[2π·f / sample_rate]`.
#[derive(Debug, Clone, Copy)]
pub struct SinglePole {
    sample_rate: u32,
}

impl SinglePole {
    /// Creates a single-pole family.
    pub fn new(sample_rate: u32) -> FilterResult<Self> {
        if sample_rate == 0 {
            return Err(FilterError::InvalidSampleRate { rate: sample_rate });
        }
        Ok(Self { sample_rate })
    }
}

impl CoefficientFamily for SinglePole {
    fn name(&self) -> String {
        format!("maxq{}", self.sample_rate)
    }

    fn row_len(&self) -> usize {
        1
    }

    fn calculate(&self, frequency: f64) -> FilterResult<CoefficientRow> {
        Ok(CoefficientRow::Single(
            2.0 * PI * frequency / f64::from(self.sample_rate),
        ))
    }
}

/// Gain-normalised bandpass resonator.
///
/// Each row designs `BpRe/<Q>/<f>`, scales the target gain by the inverse
/// of the response at `f`, and keeps the two feedback coefficients.
pub struct ResonantBiquad {
    sample_rate: u32,
    q: u32,
    gain: f64,
    designer: Box<dyn FilterDesigner>,
}

impl ResonantBiquad {
    /// Creates a resonator family backed by [`ResonatorDesigner`].
    pub fn new(sample_rate: u32, q: u32, gain: f64) -> FilterResult<Self> {
        Self::with_designer(sample_rate, q, gain, Box::new(ResonatorDesigner))
    }

    /// Creates a resonator family backed by any designer.
    pub fn with_designer(
        sample_rate: u32,
        q: u32,
        gain: f64,
        designer: Box<dyn FilterDesigner>,
    ) -> FilterResult<Self> {
        if sample_rate == 0 {
            return Err(FilterError::InvalidSampleRate { rate: sample_rate });
        }
        if q == 0 {
            return Err(FilterError::InvalidQ { q: 0.0 });
        }
        Ok(Self {
            sample_rate,
            q,
            gain,
            designer,
        })
    }
}

impl CoefficientFamily for ResonantBiquad {
    fn name(&self) -> String {
        FilterConfig::ResonantBiquad {
            sample_rate: self.sample_rate,
            q: self.q,
            gain: self.gain,
        }
        .name()
    }

    fn row_len(&self) -> usize {
        3
    }

    fn calculate(&self, frequency: f64) -> FilterResult<CoefficientRow> {
        let request = DesignRequest::resonator(f64::from(self.q), frequency).to_string();
        let filter = self.designer.design(&request, self.sample_rate)?;

        let response = filter.response(frequency / f64::from(self.sample_rate));
        if !(response.is_finite() && response != 0.0) {
            return Err(FilterError::DegenerateResponse { request, frequency });
        }

        match *filter.coefficients() {
            [_, pole1, pole2, ..] => Ok(CoefficientRow::Triple([
                self.gain / response,
                pole2,
                pole1,
            ])),
            _ => Err(FilterError::malformed(
                request,
                "designer returned fewer than three feedback coefficients",
            )),
        }
    }
}

/// Builds the family described by a configuration entry.
pub fn family_for(config: &FilterConfig) -> FilterResult<Box<dyn CoefficientFamily>> {
    Ok(match *config {
        FilterConfig::SinglePole { sample_rate } => Box::new(SinglePole::new(sample_rate)?),
        FilterConfig::ResonantBiquad {
            sample_rate,
            q,
            gain,
        } => Box::new(ResonantBiquad::new(sample_rate, q, gain)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::DesignedFilter;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every request and answers with fixed coefficients.
    struct RecordingDesigner {
        requests: Rc<RefCell<Vec<(String, u32)>>>,
        feedback: Vec<f64>,
    }

    impl FilterDesigner for RecordingDesigner {
        fn design(&self, request: &str, sample_rate: u32) -> FilterResult<DesignedFilter> {
            self.requests
                .borrow_mut()
                .push((request.to_string(), sample_rate));
            // B = 1 makes the response 1 / |A|.
            Ok(DesignedFilter::new(self.feedback.clone(), vec![1.0]))
        }
    }

    #[test]
    fn test_single_pole_value() {
        let family = SinglePole::new(48000).unwrap();
        let row = family.calculate(440.0).unwrap();
        assert_eq!(row, CoefficientRow::Single(2.0 * PI * 440.0 / 48000.0));
        assert_eq!(family.name(), "maxq48000");
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_single_pole_at_ceiling() {
        let family = SinglePole::new(48000).unwrap();
        let row = family.calculate(20000.0).unwrap();
        assert!((row.values()[0] - 2.617993877991494).abs() < 1e-12);
    }

    #[test]
    fn test_biquad_row_order_and_request() {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let designer = RecordingDesigner {
            requests: Rc::clone(&requests),
            feedback: vec![1.0, -0.5, 0.25],
        };
        let family = ResonantBiquad::with_designer(96000, 800, 40.0, Box::new(designer)).unwrap();

        let row = family.calculate(32.7031956626).unwrap();
        assert_eq!(
            requests.borrow().as_slice(),
            &[("BpRe/800/32.7032".to_string(), 96000)]
        );

        let filter = DesignedFilter::new(vec![1.0, -0.5, 0.25], vec![1.0]);
        let response = filter.response(32.7031956626 / 96000.0);
        assert_eq!(
            row,
            CoefficientRow::Triple([40.0 / response, 0.25, -0.5])
        );
    }

    #[test]
    fn test_biquad_rejects_short_design() {
        let designer = RecordingDesigner {
            requests: Rc::new(RefCell::new(Vec::new())),
            feedback: vec![1.0, -0.5],
        };
        let family = ResonantBiquad::with_designer(48000, 2, 2.0, Box::new(designer)).unwrap();
        assert!(matches!(
            family.calculate(440.0),
            Err(FilterError::MalformedRequest { .. })
        ));
    }

    #[test]
    fn test_biquad_unit_gain_at_centre() {
        // A normalised row reproduces the target gain at the design frequency.
        let family = ResonantBiquad::new(48000, 2, 2.0).unwrap();
        let CoefficientRow::Triple([gain, pole2, pole1]) = family.calculate(1000.0).unwrap() else {
            panic!("expected a triple");
        };
        let filter = DesignedFilter::new(vec![1.0, pole1, pole2], vec![1.0, 0.0, -1.0]);
        let achieved = gain * filter.response(1000.0 / 48000.0);
        assert!((achieved - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_family_for_config() {
        for config in scalegen_spec::default_filters() {
            let family = family_for(&config).unwrap();
            assert_eq!(family.name(), config.name());
            assert_eq!(family.row_len(), config.row_len());
        }
    }

    #[test]
    fn test_zero_q_rejected() {
        assert!(matches!(
            ResonantBiquad::new(48000, 0, 1.0),
            Err(FilterError::InvalidQ { .. })
        ));
    }
}
