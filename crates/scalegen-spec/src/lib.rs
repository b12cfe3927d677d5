//! scalegen Table Specification Library
//!
//! Types, configuration and hashing shared by the scalegen backends and CLI.
//!
//! # Overview
//!
//! A tuning system is emitted as a [`ScaleTable`]: 11 sub-scales of 21 notes,
//! stored in a [`ScaleGrid`] so row/column access never involves manual index
//! arithmetic. Sub-scales built by interval tiling are described by an
//! [`IntervalSpec`]. Which filters to run and how the frequency ceiling
//! behaves is described by a [`GeneratorConfig`].
//!
//! # Example
//!
//! ```
//! use scalegen_spec::{GeneratorConfig, IntervalSpec};
//!
//! let spec = IntervalSpec::new(vec![1.0, 9.0 / 7.0, 9.0 / 5.0, 7.0 / 3.0], 32.7031956626, 3.0);
//! assert!(spec.validate_row(0).is_ok());
//!
//! let config = GeneratorConfig::from_json("{}").unwrap();
//! assert_eq!(config.filters.len(), 6);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Generator configuration (filters, ceiling, tuning selection)
//! - [`error`]: Construction and configuration errors
//! - [`hash`]: BLAKE3 hashes for determinism checks
//! - [`interval`]: Per-sub-scale interval specification
//! - [`number`]: C-compatible `%g` number formatting
//! - [`table`]: The 11 × 21 table and grid container

pub mod config;
pub mod error;
pub mod hash;
pub mod interval;
pub mod number;
pub mod table;

pub use config::{
    default_filters, CeilingConfig, FilterConfig, GeneratorConfig, DEFAULT_CEILING_HZ,
    DEFAULT_HEADER,
};
pub use error::{BackendError, ScaleError, ScaleResult};
pub use hash::{config_hash, output_hash, rows_hash, table_hash};
pub use interval::IntervalSpec;
pub use number::{format_general, format_table_value};
pub use table::{ScaleGrid, ScaleTable, NOTES_PER_SUB_SCALE, NUM_SUB_SCALES, TABLE_LEN};
