//! scalegen filter backend
//!
//! Turns note frequencies into per-note filter coefficients.
//!
//! Every [`CoefficientPipeline`] pairs a [`CoefficientFamily`] with a
//! [`FilterState`] holding the frequency ceiling. Frequencies above the
//! ceiling are replaced by the last in-range one, or by the ceiling when no
//! in-range frequency has been seen yet. A [`FilterBank`] runs tables
//! through the configured pipelines in order.
//!
//! Resonator coefficients come from a [`FilterDesigner`] addressed by a
//! `BpRe/<Q>/<frequency>` request string; [`ResonatorDesigner`] is the
//! built-in implementation.
//!
//! ```
//! use scalegen_backend_filter::{CoefficientPipeline, FilterState, SinglePole};
//!
//! let family = SinglePole::new(48000).unwrap();
//! let mut pipeline = CoefficientPipeline::new(Box::new(family), FilterState::new(20000.0, true));
//! let in_range = pipeline.generate(100.0).unwrap();
//! let clamped = pipeline.generate(25000.0).unwrap();
//! assert_eq!(in_range, clamped);
//! ```

pub mod bank;
pub mod design;
pub mod error;
pub mod family;
pub mod pipeline;

pub use bank::{CoefficientSet, FilterBank};
pub use design::{DesignRequest, DesignedFilter, FilterDesigner, ResonatorDesigner};
pub use error::{FilterError, FilterResult};
pub use family::{family_for, CoefficientFamily, CoefficientRow, ResonantBiquad, SinglePole};
pub use pipeline::{CoefficientPipeline, FilterState};
